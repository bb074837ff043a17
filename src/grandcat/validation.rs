//! Admin form validation.
//!
//! Invalid input is rejected here, before it reaches the catalog, so the
//! repository never has to re-check a [`ProductDraft`].

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, ProductDraft};

/// Raw values as typed into the admin create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub image_path: String,
    pub net_weight: String,
    pub shelf_life: String,
    pub category: String,
}

impl ProductForm {
    /// Pre-fills the form with an existing record, for the edit flow.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image_path: product.image_path.clone(),
            net_weight: product.net_weight.clone(),
            shelf_life: product.shelf_life_days.to_string(),
            category: product.category.token().to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProductDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::invalid("name", "is required"));
        }

        let image_path = self.image_path.trim();
        if image_path.is_empty() {
            return Err(CatalogError::invalid("image path", "is required"));
        }

        let shelf_life = self.shelf_life.trim();
        if shelf_life.is_empty() {
            return Err(CatalogError::invalid("shelf life", "is required"));
        }
        let shelf_life_days = shelf_life.parse::<u32>().map_err(|_| {
            CatalogError::invalid(
                "shelf life",
                format!("\"{}\" is not a whole number of days", shelf_life),
            )
        })?;

        let category = Category::parse_loose(&self.category).ok_or_else(|| {
            CatalogError::invalid(
                "category",
                format!("\"{}\" is not one of {}", self.category.trim(), category_list()),
            )
        })?;

        Ok(ProductDraft {
            name: name.to_string(),
            image_path: encode_spaces(image_path),
            net_weight: self.net_weight.trim().to_string(),
            shelf_life_days,
            category,
        })
    }
}

fn encode_spaces(path: &str) -> String {
    path.replace(' ', "%20")
}

fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|c| c.token())
        .collect::<Vec<_>>()
        .join(", ")
}
