//! View models for display.
//!
//! The query engine hands over an ordered list of products; this module turns
//! it into [`ProductCard`]s that carry everything a UI needs and nothing it
//! has to compute. Styling and layout belong to the UI.

use crate::model::{Product, ProductId};
use crate::wishlist::Wishlist;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    /// 1-based position in the rendered list.
    pub position: usize,
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub net_weight: Option<String>,
    pub shelf_life: String,
    pub category: &'static str,
    pub liked: bool,
}

pub fn cards(products: &[&Product], wishlist: &Wishlist, image_root: &str) -> Vec<ProductCard> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| ProductCard {
            position: i + 1,
            id: p.id,
            name: p.name.clone(),
            image_url: image_url(image_root, &p.image_path),
            net_weight: if p.net_weight.is_empty() {
                None
            } else {
                Some(p.net_weight.clone())
            },
            shelf_life: shelf_life_label(p.shelf_life_days),
            category: p.category.label(),
            liked: wishlist.contains(&p.name),
        })
        .collect()
}

pub fn shelf_life_label(days: u32) -> String {
    match days {
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

fn image_url(root: &str, path: &str) -> String {
    if root.is_empty() || path.contains("://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
