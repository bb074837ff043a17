use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvStore, StorageBackend};
use crate::wishlist::Wishlist;

/// Restores the default catalog, optionally clearing the wishlist too.
pub fn run<B: StorageBackend>(
    store: &KvStore<B>,
    catalog: &mut Catalog,
    wishlist: &mut Wishlist,
    clear_likes: bool,
) -> Result<CmdResult> {
    catalog.reset_to_defaults(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Catalog reset to its {} default products.",
        catalog.len()
    )));
    if clear_likes {
        let count = wishlist.len();
        wishlist.clear(store);
        result.add_message(CmdMessage::success(format!("Cleared {} liked product(s).", count)));
    }
    Ok(result)
}
