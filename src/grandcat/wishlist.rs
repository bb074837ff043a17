//! Liked products, keyed by product name and persisted under [`LIKES_KEY`].

use crate::error::Result;
use crate::store::{KvStore, StorageBackend, LIKES_KEY};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    names: BTreeSet<String>,
}

impl Wishlist {
    pub fn load<B: StorageBackend>(store: &KvStore<B>) -> Self {
        Self {
            names: store.read(LIKES_KEY, BTreeSet::new()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Flips membership of `name`, persists, and returns the new membership.
    pub fn toggle<B: StorageBackend>(&mut self, store: &KvStore<B>, name: &str) -> Result<bool> {
        let flip = |names: &mut BTreeSet<String>| {
            let liked = !names.remove(name);
            if liked {
                names.insert(name.to_string());
            }
            (liked, names.clone())
        };
        let (liked, names) = store.merge(LIKES_KEY, self.names.clone(), flip)?;
        self.names = names;
        Ok(liked)
    }

    /// Carries membership over when a liked product is renamed.
    pub fn rename<B: StorageBackend>(
        &mut self,
        store: &KvStore<B>,
        old: &str,
        new: &str,
    ) -> Result<()> {
        if old == new || !self.names.contains(old) {
            return Ok(());
        }
        let carry = |names: &mut BTreeSet<String>| {
            if names.remove(old) {
                names.insert(new.to_string());
            }
            names.clone()
        };
        self.names = store.merge(LIKES_KEY, self.names.clone(), carry)?;
        Ok(())
    }

    pub fn clear<B: StorageBackend>(&mut self, store: &KvStore<B>) {
        self.names.clear();
        store.remove(LIKES_KEY);
    }
}
