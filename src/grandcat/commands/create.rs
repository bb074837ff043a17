use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvStore, StorageBackend};
use crate::validation::ProductForm;

pub fn run<B: StorageBackend>(
    store: &KvStore<B>,
    catalog: &mut Catalog,
    form: &ProductForm,
) -> Result<CmdResult> {
    let draft = form.validate()?;
    let product = catalog.create(store, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created ({}): {}",
        catalog.len(),
        product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::mem_backend::MemBackend;

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            image_path: "images/new.jpg".into(),
            net_weight: "".into(),
            shelf_life: "10".into(),
            category: "Snacks".into(),
        }
    }

    #[test]
    fn creates_and_reports_position() {
        let store = KvStore::new(MemBackend::new());
        let mut catalog = Catalog::load(&store).unwrap();
        let result = run(&store, &mut catalog, &form("Garlic Sticks")).unwrap();

        assert_eq!(result.affected_products[0].name, "Garlic Sticks");
        assert_eq!(result.messages[0].content, "Product created (41): Garlic Sticks");
    }

    #[test]
    fn invalid_form_never_reaches_the_catalog() {
        let store = KvStore::new(MemBackend::new());
        let mut catalog = Catalog::load(&store).unwrap();
        let mut bad = form("Garlic Sticks");
        bad.shelf_life = "a week".into();

        assert!(matches!(
            run(&store, &mut catalog, &bad),
            Err(CatalogError::Invalid { .. })
        ));
        assert_eq!(catalog.len(), 40);
    }
}
