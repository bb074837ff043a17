use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of product categories.
///
/// The canonical token (`BiscuitsAndCookies`) is what travels through URLs and
/// persisted JSON; the label (`Biscuits & Cookies`) is for display. Parsing
/// is exact on the token, see [`Category::parse_loose`] for form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Muffins,
    #[serde(alias = "Biscuits & Cookies")]
    BiscuitsAndCookies,
    Chikkis,
    Snacks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Muffins,
        Category::BiscuitsAndCookies,
        Category::Chikkis,
        Category::Snacks,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Category::Muffins => "Muffins",
            Category::BiscuitsAndCookies => "BiscuitsAndCookies",
            Category::Chikkis => "Chikkis",
            Category::Snacks => "Snacks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Muffins => "Muffins",
            Category::BiscuitsAndCookies => "Biscuits & Cookies",
            Category::Chikkis => "Chikkis",
            Category::Snacks => "Snacks",
        }
    }

    /// Case-insensitive match against either the token or the label.
    pub fn parse_loose(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|c| {
            c.token().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Surrogate identifier assigned to a product when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Placeholder for records stored without an id; replaced on load.
    pub fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_nil()
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // Legacy blobs carry no id; the catalog assigns one on load.
    #[serde(default = "ProductId::unassigned")]
    pub id: ProductId,
    pub name: String,
    #[serde(alias = "image")]
    pub image_path: String,
    #[serde(default)]
    pub net_weight: String,
    #[serde(alias = "shelfLife")]
    pub shelf_life_days: u32,
    pub category: Category,
}

impl Product {
    pub fn new(draft: ProductDraft) -> Self {
        Self::with_id(ProductId::new(), draft)
    }

    pub fn with_id(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image_path: draft.image_path,
            net_weight: draft.net_weight,
            shelf_life_days: draft.shelf_life_days,
            category: draft.category,
        }
    }
}

/// Every field of a product except its identity.
///
/// Drafts only come out of [`crate::validation::ProductForm::validate`] or the
/// seed table, so the repository can trust them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub image_path: String,
    pub net_weight: String,
    pub shelf_life_days: u32,
    pub category: Category,
}
