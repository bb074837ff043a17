use crate::catalog::Catalog;
use crate::commands::helpers::resolve_selector;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selector::ProductSelector;
use crate::store::{KvStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &KvStore<B>,
    catalog: &mut Catalog,
    selectors: &[ProductSelector],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Resolve everything against the list as shown, before anything moves.
    let mut targets = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match resolve_selector(catalog, selector) {
            Ok(product) => targets.push((selector, product.id)),
            Err(message) => result.add_message(message),
        }
    }

    for (selector, id) in targets {
        if let Some(removed) = catalog.delete(store, &id)? {
            result.add_message(CmdMessage::success(format!(
                "Product deleted ({}): {}",
                selector, removed.name
            )));
            result.affected_products.push(removed);
        }
    }

    Ok(result)
}
