use crate::config::CatalogConfig;
use crate::model::Product;
use crate::query::FilterSpec;
use crate::render::ProductCard;
use url::Url;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod like;
pub mod list;
pub mod reset;
pub mod share;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<ProductCard>,
    pub spec: Option<FilterSpec>,
    pub share_url: Option<Url>,
    pub liked: Option<bool>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, cards: Vec<ProductCard>) -> Self {
        self.listed_products = cards;
        self
    }

    pub fn with_spec(mut self, spec: FilterSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    pub fn with_share_url(mut self, url: Url) -> Self {
        self.share_url = Some(url);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field overrides for the edit flow.
///
/// Unset fields keep the product's current value; the merged form is then
/// validated and replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEdit {
    pub name: Option<String>,
    pub image_path: Option<String>,
    pub net_weight: Option<String>,
    pub shelf_life: Option<String>,
    pub category: Option<String>,
}

impl ProductEdit {
    pub fn is_empty(&self) -> bool {
        *self == ProductEdit::default()
    }
}
