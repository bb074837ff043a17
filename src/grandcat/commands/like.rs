use crate::catalog::Catalog;
use crate::commands::helpers::resolve_selector;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selector::ProductSelector;
use crate::store::{KvStore, StorageBackend};
use crate::wishlist::Wishlist;

pub fn toggle<B: StorageBackend>(
    store: &KvStore<B>,
    catalog: &Catalog,
    wishlist: &mut Wishlist,
    selector: &ProductSelector,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let name = match resolve_selector(catalog, selector) {
        Ok(product) => product.name.clone(),
        Err(message) => match selector {
            // A liked product that has since been deleted can still be unliked.
            ProductSelector::Name(n) if wishlist.contains(n) => n.clone(),
            _ => {
                result.add_message(message);
                return Ok(result);
            }
        },
    };

    let liked = wishlist.toggle(store, &name)?;
    result.liked = Some(liked);
    result.add_message(CmdMessage::success(if liked {
        format!("Liked: {}", name)
    } else {
        format!("Unliked: {}", name)
    }));
    Ok(result)
}
