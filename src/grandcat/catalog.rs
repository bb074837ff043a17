//! The catalog repository.
//!
//! [`Catalog`] is the sole owner of the product collection. The persisted
//! copy under [`PRODUCTS_KEY`] is a mirror written after every mutation; it
//! is only the source of truth on load.
//!
//! Records are addressed by their surrogate [`ProductId`]. The positional
//! `*_at` variants remain for callers that hold an index into the current
//! list; a stale index is a logged no-op, never an error.

use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductDraft, ProductId};
use crate::seed::default_catalog;
use crate::store::{KvStore, StorageBackend, PRODUCTS_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the stored catalog, or seeds (and persists) the default one.
    pub fn load<B: StorageBackend>(store: &KvStore<B>) -> Result<Self> {
        match store.read_versioned::<Vec<Product>>(PRODUCTS_KEY) {
            Some(decoded) => {
                let mut products = decoded.value;
                let mut assigned = 0;
                for product in products.iter_mut().filter(|p| !p.id.is_assigned()) {
                    product.id = ProductId::new();
                    assigned += 1;
                }
                let catalog = Self { products };
                if decoded.migrated || assigned > 0 {
                    tracing::debug!(assigned, "migrated stored catalog to the current schema");
                    catalog.persist(store)?;
                }
                Ok(catalog)
            }
            None => {
                tracing::debug!("no usable stored catalog, seeding defaults");
                let catalog = Self {
                    products: default_catalog(),
                };
                catalog.persist(store)?;
                Ok(catalog)
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let wanted = name_key(name);
        self.products.iter().find(|p| name_key(&p.name) == wanted)
    }

    /// Appends a new product and persists.
    pub fn create<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        draft: ProductDraft,
    ) -> Result<Product> {
        self.ensure_name_free(&draft.name, None)?;
        let product = Product::new(draft);
        self.products.push(product.clone());
        self.persist(store)?;
        Ok(product)
    }

    /// Replaces every field of the product with `id`.
    ///
    /// Returns the previous record, or `None` if no product has that id.
    pub fn update<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>> {
        match self.position(id) {
            Some(index) => self.replace(store, index, draft).map(Some),
            None => {
                tracing::warn!(%id, "update ignored: no such product");
                Ok(None)
            }
        }
    }

    /// Positional variant of [`Catalog::update`] (0-based).
    pub fn update_at<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        index: usize,
        draft: ProductDraft,
    ) -> Result<Option<Product>> {
        if index >= self.products.len() {
            tracing::warn!(index, len = self.products.len(), "update ignored: index out of range");
            return Ok(None);
        }
        self.replace(store, index, draft).map(Some)
    }

    /// Removes the product with `id`, returning it.
    pub fn delete<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        id: &ProductId,
    ) -> Result<Option<Product>> {
        match self.position(id) {
            Some(index) => self.remove(store, index).map(Some),
            None => {
                tracing::warn!(%id, "delete ignored: no such product");
                Ok(None)
            }
        }
    }

    /// Positional variant of [`Catalog::delete`] (0-based).
    pub fn delete_at<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        index: usize,
    ) -> Result<Option<Product>> {
        if index >= self.products.len() {
            tracing::warn!(index, len = self.products.len(), "delete ignored: index out of range");
            return Ok(None);
        }
        self.remove(store, index).map(Some)
    }

    /// Discards all edits and restores the default catalog.
    pub fn reset_to_defaults<B: StorageBackend>(&mut self, store: &KvStore<B>) -> Result<()> {
        self.products = default_catalog();
        self.persist(store)
    }

    fn replace<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        index: usize,
        draft: ProductDraft,
    ) -> Result<Product> {
        let id = self.products[index].id;
        // Older catalogs may already hold duplicates; only a rename is checked.
        if name_key(&draft.name) != name_key(&self.products[index].name) {
            self.ensure_name_free(&draft.name, Some(&id))?;
        }
        let previous = std::mem::replace(&mut self.products[index], Product::with_id(id, draft));
        self.persist(store)?;
        Ok(previous)
    }

    fn remove<B: StorageBackend>(&mut self, store: &KvStore<B>, index: usize) -> Result<Product> {
        let removed = self.products.remove(index);
        self.persist(store)?;
        Ok(removed)
    }

    fn ensure_name_free(&self, name: &str, except: Option<&ProductId>) -> Result<()> {
        let wanted = name_key(name);
        let taken = self
            .products
            .iter()
            .any(|p| Some(&p.id) != except && name_key(&p.name) == wanted);
        if taken {
            return Err(CatalogError::DuplicateName(name.trim().to_string()));
        }
        Ok(())
    }

    fn persist<B: StorageBackend>(&self, store: &KvStore<B>) -> Result<()> {
        store.write(PRODUCTS_KEY, &self.products)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
