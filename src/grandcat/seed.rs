//! The built-in default catalog.
//!
//! Seed records carry fixed ids so that a first run and a reset converge on
//! exactly the same catalog.

use crate::model::{Category, Product, ProductDraft, ProductId};
use uuid::Uuid;

const SEED_ID_BASE: u128 = 0x6772_616e_6463_6174_0000_0000_0000_0000;

struct SeedRow {
    name: &'static str,
    image: &'static str,
    weight: &'static str,
    shelf_life_days: u32,
    category: Category,
}

const fn row(
    name: &'static str,
    image: &'static str,
    weight: &'static str,
    shelf_life_days: u32,
    category: Category,
) -> SeedRow {
    SeedRow {
        name,
        image,
        weight,
        shelf_life_days,
        category,
    }
}

use Category::{BiscuitsAndCookies, Chikkis, Muffins, Snacks};

const SEED: [SeedRow; 40] = [
    // Muffins: singles keep for 6 days, packs for 12
    row("Chocolate Muffin", "images/muffins/Chocolate%20Muffin.jpg", "50 g", 6, Muffins),
    row("Vanilla Muffin", "images/muffins/Vanilla%20Muffin.jpg", "50 g", 6, Muffins),
    row("Blueberry Muffin", "images/muffins/Blueberry%20Muffin.jpg", "50 g", 6, Muffins),
    row("Strawberry Muffin", "images/muffins/Strawberry%20Muffin.jpg", "50 g", 6, Muffins),
    row("Butterscotch Muffin", "images/muffins/Butterscotch%20Muffin.jpg", "50 g", 6, Muffins),
    row("Chocolate Muffin Pack", "images/muffins/Chocolate%20Muffin%20Pack.jpg", "300 g", 12, Muffins),
    row("Vanilla Muffin Pack", "images/muffins/Vanilla%20Muffin%20Pack.jpg", "300 g", 12, Muffins),
    row("Blueberry Muffin Pack", "images/muffins/Blueberry%20Muffin%20Pack.jpg", "300 g", 12, Muffins),
    row("Strawberry Muffin Pack", "images/muffins/Strawberry%20Muffin%20Pack.jpg", "300 g", 12, Muffins),
    row("Butterscotch Muffin Pack", "images/muffins/Butterscotch%20Muffin%20Pack.jpg", "300 g", 12, Muffins),
    // Biscuits & cookies
    row("COOKIE 01", "images/cookies/COOKIE%2001.jpg", "200 g", 120, BiscuitsAndCookies),
    row("COOKIE 02", "images/cookies/COOKIE%2002.jpg", "200 g", 120, BiscuitsAndCookies),
    row("COOKIE 03", "images/cookies/COOKIE%2003.jpg", "200 g", 120, BiscuitsAndCookies),
    row("COOKIE 04", "images/cookies/COOKIE%2004.jpg", "200 g", 120, BiscuitsAndCookies),
    row("COOKIE 05", "images/cookies/COOKIE%2005.jpg", "200 g", 120, BiscuitsAndCookies),
    row("Butter Biscuits", "images/cookies/Butter%20Biscuits.jpg", "250 g", 90, BiscuitsAndCookies),
    row("Coconut Biscuits", "images/cookies/Coconut%20Biscuits.jpg", "250 g", 90, BiscuitsAndCookies),
    row("Jeera Biscuits", "images/cookies/Jeera%20Biscuits.jpg", "250 g", 90, BiscuitsAndCookies),
    row("Milk Biscuits", "images/cookies/Milk%20Biscuits.jpg", "", 90, BiscuitsAndCookies),
    row("Ragi Biscuits", "images/cookies/Ragi%20Biscuits.jpg", "250 g", 60, BiscuitsAndCookies),
    // Chikkis
    row("Peanut Chikki", "images/chikkis/Peanut%20Chikki.jpg", "100 g", 90, Chikkis),
    row("Sesame Chikki", "images/chikkis/Sesame%20Chikki.jpg", "100 g", 90, Chikkis),
    row("Coconut Chikki", "images/chikkis/Coconut%20Chikki.jpg", "100 g", 45, Chikkis),
    row("Dry Fruit Chikki", "images/chikkis/Dry%20Fruit%20Chikki.jpg", "100 g", 60, Chikkis),
    row("Jaggery Peanut Chikki", "images/chikkis/Jaggery%20Peanut%20Chikki.jpg", "150 g", 90, Chikkis),
    row("Rajgira Chikki", "images/chikkis/Rajgira%20Chikki.jpg", "100 g", 75, Chikkis),
    row("Cashew Chikki", "images/chikkis/Cashew%20Chikki.jpg", "100 g", 60, Chikkis),
    row("Almond Chikki", "images/chikkis/Almond%20Chikki.jpg", "100 g", 60, Chikkis),
    row("Mixed Nut Chikki", "images/chikkis/Mixed%20Nut%20Chikki.jpg", "", 60, Chikkis),
    row("Til Gud Chikki", "images/chikkis/Til%20Gud%20Chikki.jpg", "100 g", 120, Chikkis),
    // Snacks
    row("Banana Chips", "images/snacks/Banana%20Chips.jpg", "150 g", 45, Snacks),
    row("Masala Peanuts", "images/snacks/Masala%20Peanuts.jpg", "200 g", 60, Snacks),
    row("Potato Wafers", "images/snacks/Potato%20Wafers.jpg", "100 g", 30, Snacks),
    row("Mixture", "images/snacks/Mixture.jpg", "200 g", 45, Snacks),
    row("Bhujia", "images/snacks/Bhujia.jpg", "200 g", 60, Snacks),
    row("Chakli", "images/snacks/Chakli.jpg", "200 g", 30, Snacks),
    row("Shankarpali", "images/snacks/Shankarpali.jpg", "200 g", 30, Snacks),
    row("Khari", "images/snacks/Khari.jpg", "", 15, Snacks),
    row("Roasted Chana", "images/snacks/Roasted%20Chana.jpg", "250 g", 90, Snacks),
    row("Murukku", "images/snacks/Murukku.jpg", "200 g", 45, Snacks),
];

/// Builds a fresh copy of the default catalog, in its canonical order.
pub fn default_catalog() -> Vec<Product> {
    SEED.iter()
        .enumerate()
        .map(|(i, r)| {
            let id = ProductId(Uuid::from_u128(SEED_ID_BASE + i as u128 + 1));
            Product::with_id(
                id,
                ProductDraft {
                    name: r.name.to_string(),
                    image_path: r.image.to_string(),
                    net_weight: r.weight.to_string(),
                    shelf_life_days: r.shelf_life_days,
                    category: r.category,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_ten_per_category() {
        let seed = default_catalog();
        assert_eq!(seed.len(), 40);
        for c in Category::ALL {
            assert_eq!(seed.iter().filter(|p| p.category == c).count(), 10);
        }
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(default_catalog(), default_catalog());
    }

    #[test]
    fn seed_names_and_ids_are_unique() {
        let seed = default_catalog();
        let names: HashSet<_> = seed.iter().map(|p| p.name.to_lowercase()).collect();
        let ids: HashSet<_> = seed.iter().map(|p| p.id).collect();
        assert_eq!(names.len(), seed.len());
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn seed_image_paths_are_encoded() {
        assert!(default_catalog().iter().all(|p| !p.image_path.contains(' ')));
    }
}
