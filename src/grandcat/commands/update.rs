use crate::catalog::Catalog;
use crate::commands::helpers::resolve_selector;
use crate::commands::{CmdMessage, CmdResult, ProductEdit};
use crate::error::Result;
use crate::selector::ProductSelector;
use crate::store::{KvStore, StorageBackend};
use crate::validation::ProductForm;
use crate::wishlist::Wishlist;

pub fn run<B: StorageBackend>(
    store: &KvStore<B>,
    catalog: &mut Catalog,
    wishlist: &mut Wishlist,
    selector: &ProductSelector,
    edit: &ProductEdit,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let current = match resolve_selector(catalog, selector) {
        Ok(product) => product.clone(),
        Err(message) => {
            result.add_message(message);
            return Ok(result);
        }
    };

    let form = merge(ProductForm::from_product(&current), edit);
    let draft = form.validate()?;

    let Some(previous) = catalog.update(store, &current.id, draft)? else {
        return Ok(result);
    };
    let Some(updated) = catalog.get(&current.id).cloned() else {
        return Ok(result);
    };
    wishlist.rename(store, &previous.name, &updated.name)?;

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        selector, updated.name
    )));
    Ok(result.with_affected_products(vec![updated]))
}

fn merge(mut form: ProductForm, edit: &ProductEdit) -> ProductForm {
    if let Some(name) = &edit.name {
        form.name = name.clone();
    }
    if let Some(image_path) = &edit.image_path {
        form.image_path = image_path.clone();
    }
    if let Some(net_weight) = &edit.net_weight {
        form.net_weight = net_weight.clone();
    }
    if let Some(shelf_life) = &edit.shelf_life {
        form.shelf_life = shelf_life.clone();
    }
    if let Some(category) = &edit.category {
        form.category = category.clone();
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;

    fn setup() -> (KvStore<MemBackend>, Catalog, Wishlist) {
        let store = KvStore::new(MemBackend::new());
        let catalog = Catalog::load(&store).unwrap();
        let wishlist = Wishlist::load(&store);
        (store, catalog, wishlist)
    }

    #[test]
    fn edits_only_the_given_fields() {
        let (store, mut catalog, mut wishlist) = setup();
        let edit = ProductEdit {
            shelf_life: Some("8".into()),
            ..ProductEdit::default()
        };
        let result = run(&store, &mut catalog, &mut wishlist, &ProductSelector::Position(2), &edit).unwrap();

        let updated = &result.affected_products[0];
        assert_eq!(updated.name, "Vanilla Muffin");
        assert_eq!(updated.shelf_life_days, 8);
        assert_eq!(updated.category, Category::Muffins);
        assert_eq!(catalog.products()[1], *updated);
    }

    #[test]
    fn stale_position_is_a_warning_and_no_op() {
        let (store, mut catalog, mut wishlist) = setup();
        let before = catalog.clone();
        let edit = ProductEdit {
            name: Some("Ghost".into()),
            ..ProductEdit::default()
        };
        let result = run(&store, &mut catalog, &mut wishlist, &ProductSelector::Position(77), &edit).unwrap();

        assert_eq!(catalog, before);
        assert!(result.affected_products.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn rename_carries_the_like() {
        let (store, mut catalog, mut wishlist) = setup();
        wishlist.toggle(&store, "Khari").unwrap();
        let edit = ProductEdit {
            name: Some("Butter Khari".into()),
            ..ProductEdit::default()
        };
        run(&store, &mut catalog, &mut wishlist, &ProductSelector::Name("khari".into()), &edit).unwrap();

        assert!(wishlist.contains("Butter Khari"));
        assert!(!Wishlist::load(&store).contains("Khari"));
    }

    #[test]
    fn duplicate_rows_from_old_data_can_be_edited() {
        let legacy = r#"[
            {"name":"Khari","image":"images/Khari.jpg","shelfLife":15,"category":"Snacks"},
            {"name":"Khari","image":"images/Khari.jpg","shelfLife":15,"category":"Snacks"}
        ]"#;
        let store = KvStore::new(MemBackend::new().with_raw(crate::store::PRODUCTS_KEY, legacy));
        let mut catalog = Catalog::load(&store).unwrap();
        let mut wishlist = Wishlist::load(&store);
        let edit = ProductEdit {
            shelf_life: Some("20".into()),
            ..ProductEdit::default()
        };

        let result = run(&store, &mut catalog, &mut wishlist, &ProductSelector::Position(2), &edit).unwrap();

        assert_eq!(result.affected_products[0].shelf_life_days, 20);
        assert_eq!(catalog.products()[0].shelf_life_days, 15);
    }

    #[test]
    fn invalid_edit_is_rejected() {
        let (store, mut catalog, mut wishlist) = setup();
        let edit = ProductEdit {
            category: Some("Cakes".into()),
            ..ProductEdit::default()
        };
        assert!(run(&store, &mut catalog, &mut wishlist, &ProductSelector::Position(1), &edit).is_err());
        assert_eq!(catalog.products()[0].category, Category::Muffins);
    }
}
