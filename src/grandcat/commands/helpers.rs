use crate::catalog::Catalog;
use crate::commands::CmdMessage;
use crate::model::Product;
use crate::selector::ProductSelector;

/// Resolves `selector`, or explains why nothing will happen.
///
/// A selector that matches nothing is not an error: the list it came from
/// may simply be stale. The caller turns `Err` into a no-op.
pub fn resolve_selector<'a>(
    catalog: &'a Catalog,
    selector: &ProductSelector,
) -> Result<&'a Product, CmdMessage> {
    selector.resolve(catalog).ok_or_else(|| {
        tracing::warn!(%selector, len = catalog.len(), "selector matched no product");
        CmdMessage::warning(format!(
            "No product matches {}; nothing changed.",
            selector
        ))
    })
}
