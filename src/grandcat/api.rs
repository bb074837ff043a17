//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for every catalog operation,
//! whatever the UI. It owns the session state explicitly: the store, the
//! catalog, the wishlist, the current filter spec and the config. Handlers
//! receive the facade instead of reaching for shared globals.
//!
//! The facade dispatches to `commands/*.rs`, which hold the logic, and
//! appends any queued storage warnings to the returned [`CmdResult`].
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `CatalogApi<FsBackend>`
//! - Testing: `CatalogApi<MemBackend>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::query::FilterSpec;
use crate::selector::ProductSelector;
use crate::store::{KvStore, StorageBackend};
use crate::url_state;
use crate::validation::ProductForm;
use crate::wishlist::Wishlist;
use std::path::Path;
use url::Url;

pub struct CatalogApi<B: StorageBackend> {
    store: KvStore<B>,
    catalog: Catalog,
    wishlist: Wishlist,
    spec: FilterSpec,
    config: CatalogConfig,
}

impl<B: StorageBackend> CatalogApi<B> {
    /// Loads the catalog and wishlist from `backend`, seeding on first run.
    pub fn new(backend: B, config: CatalogConfig) -> Result<Self> {
        let store = KvStore::new(backend);
        let catalog = Catalog::load(&store)?;
        let wishlist = Wishlist::load(&store);
        Ok(Self {
            store,
            catalog,
            wishlist,
            spec: FilterSpec::default(),
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn store(&self) -> &KvStore<B> {
        &self.store
    }

    /// Makes `spec` current and lists the matching products.
    pub fn view(&mut self, spec: FilterSpec) -> CmdResult {
        self.spec = spec;
        self.relist()
    }

    /// Applies a query string on top of the current spec (partial update).
    pub fn view_query(&mut self, query: &str) -> CmdResult {
        let spec = url_state::from_query_string(query, &self.spec);
        self.view(spec)
    }

    /// First-load restore from a full page URL, fragment preselection included.
    pub fn view_url(&mut self, url: &Url) -> CmdResult {
        self.view(url_state::from_url(url))
    }

    /// Re-runs the current query, e.g. after a mutation.
    pub fn relist(&self) -> CmdResult {
        let result = commands::list::run(&self.catalog, &self.wishlist, &self.spec, &self.config);
        self.finish(result)
    }

    pub fn liked(&self) -> CmdResult {
        let result = commands::list::liked(&self.catalog, &self.wishlist, &self.config);
        self.finish(result)
    }

    pub fn create(&mut self, form: &ProductForm) -> Result<CmdResult> {
        let result = commands::create::run(&self.store, &mut self.catalog, form)?;
        Ok(self.finish(result))
    }

    pub fn update(&mut self, selector: &str, edit: &ProductEdit) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        let result = commands::update::run(
            &self.store,
            &mut self.catalog,
            &mut self.wishlist,
            &selector,
            edit,
        )?;
        Ok(self.finish(result))
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = selectors
            .iter()
            .map(|s| parse_selector(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let result = commands::delete::run(&self.store, &mut self.catalog, &selectors)?;
        Ok(self.finish(result))
    }

    pub fn toggle_like(&mut self, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        let result =
            commands::like::toggle(&self.store, &self.catalog, &mut self.wishlist, &selector)?;
        Ok(self.finish(result))
    }

    pub fn reset(&mut self, clear_likes: bool) -> Result<CmdResult> {
        let result = commands::reset::run(
            &self.store,
            &mut self.catalog,
            &mut self.wishlist,
            clear_likes,
        )?;
        Ok(self.finish(result))
    }

    /// Shareable link for the current spec.
    pub fn share(&self) -> Result<CmdResult> {
        let result = commands::share::run(&self.spec, &self.config)?;
        Ok(self.finish(result))
    }

    /// Reads or writes `config.json` in `dir`; a successful set also takes
    /// effect for the rest of this session.
    pub fn configure(&mut self, dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(self.finish(result))
    }

    fn finish(&self, mut result: CmdResult) -> CmdResult {
        for warning in self.store.take_warnings() {
            result.add_message(CmdMessage::warning(warning));
        }
        result
    }
}

fn parse_selector(input: &str) -> Result<ProductSelector> {
    input
        .parse()
        .map_err(crate::error::CatalogError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ProductEdit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::query::{CategoryFilter, ShelfBucket, SortKey};
    use crate::store::mem_backend::MemBackend;
    use crate::store::PRODUCTS_KEY;

    fn api() -> CatalogApi<MemBackend> {
        CatalogApi::new(MemBackend::new(), CatalogConfig::default()).unwrap()
    }

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            image_path: "images/x.jpg".into(),
            net_weight: String::new(),
            shelf_life: "3".into(),
            category: "Muffins".into(),
        }
    }

    #[test]
    fn view_sets_current_spec() {
        let mut api = api();
        let spec = FilterSpec {
            category: CategoryFilter::Only(Category::Muffins),
            sort: SortKey::NameAsc,
            ..FilterSpec::default()
        };
        let result = api.view(spec.clone());
        assert_eq!(result.listed_products.len(), 10);
        assert_eq!(api.spec(), &spec);
    }

    #[test]
    fn query_updates_are_partial() {
        let mut api = api();
        api.view_query("cat=Muffins");
        let result = api.view_query("q=vanilla");
        assert_eq!(api.spec().category, CategoryFilter::Only(Category::Muffins));
        let names: Vec<_> = result.listed_products.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Vanilla Muffin", "Vanilla Muffin Pack"]);
    }

    #[test]
    fn url_restore_uses_fragment() {
        let mut api = api();
        let url = Url::parse("http://localhost/products.html?shelf=%3C7#Muffins").unwrap();
        let result = api.view_url(&url);
        assert_eq!(api.spec().shelf, ShelfBucket::Under7);
        assert_eq!(result.listed_products.len(), 5);
    }

    #[test]
    fn mutations_are_visible_to_the_next_listing() {
        let mut api = api();
        api.view_query("cat=Muffins&shelf=%3C7");
        api.create(&form("Mini Muffin")).unwrap();

        let result = api.relist();
        assert_eq!(result.listed_products.len(), 6);
        assert_eq!(result.listed_products[5].name, "Mini Muffin");
    }

    #[test]
    fn storage_failure_surfaces_as_a_warning_once() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);

        let first = api.create(&form("Mini Muffin")).unwrap();
        assert!(first
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));

        let second = api.toggle_like("Mini Muffin").unwrap();
        assert!(second
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
        assert_eq!(api.catalog().len(), 41);
        assert!(api.wishlist().contains("Mini Muffin"));
    }

    #[test]
    fn corrupted_catalog_reseeds_on_startup() {
        let backend = MemBackend::new().with_raw(PRODUCTS_KEY, "not json at all");
        let api = CatalogApi::new(backend, CatalogConfig::default()).unwrap();
        assert_eq!(api.catalog().len(), 40);
        assert!(api.store().backend().raw(PRODUCTS_KEY).unwrap().contains("\"version\":1"));
    }

    #[test]
    fn delete_and_like_dispatch_by_selector() {
        let mut api = api();
        api.toggle_like("COOKIE 01").unwrap();
        assert!(api.wishlist().contains("COOKIE 01"));

        let result = api.delete(&["1", "COOKIE 02"]).unwrap();
        assert_eq!(result.affected_products.len(), 2);
        assert_eq!(api.catalog().len(), 38);
    }

    #[test]
    fn share_uses_current_spec() {
        let mut api = api();
        api.view_query("cat=Chikkis&sort=shelf-desc");
        let url = api.share().unwrap().share_url.unwrap();
        assert_eq!(url.query(), Some("cat=Chikkis&sort=shelf-desc"));
    }

    #[test]
    fn configure_applies_to_the_session() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut api = api();
        api.configure(
            dir.path(),
            ConfigAction::Set("share-base-url".into(), "https://shop.test/p".into()),
        )
        .unwrap();
        let url = api.share().unwrap().share_url.unwrap();
        assert_eq!(url.as_str(), "https://shop.test/p");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut api = api();
        api.delete(&["1", "2", "3"]).unwrap();
        api.reset(false).unwrap();
        assert_eq!(api.catalog().len(), 40);
    }
}
