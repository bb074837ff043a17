use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::model::Product;
use crate::query::{self, FilterSpec};
use crate::render;
use crate::wishlist::Wishlist;

pub fn run(
    catalog: &Catalog,
    wishlist: &Wishlist,
    spec: &FilterSpec,
    config: &CatalogConfig,
) -> CmdResult {
    let view = query::apply(catalog.products(), spec);
    let mut result = CmdResult::default()
        .with_listed_products(render::cards(&view, wishlist, &config.image_root))
        .with_spec(spec.clone());
    if view.is_empty() && !catalog.is_empty() {
        result.add_message(CmdMessage::info("No products match the current filters."));
    }
    result
}

/// Liked products, in catalog order.
pub fn liked(catalog: &Catalog, wishlist: &Wishlist, config: &CatalogConfig) -> CmdResult {
    let view: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| wishlist.contains(&p.name))
        .collect();
    let mut result = CmdResult::default()
        .with_listed_products(render::cards(&view, wishlist, &config.image_root));

    let orphaned = wishlist
        .names()
        .filter(|name| catalog.products().iter().all(|p| p.name != *name))
        .count();
    if orphaned > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} liked name(s) no longer match a product.",
            orphaned
        )));
    }
    result
}
