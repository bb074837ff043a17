//! # Query Engine
//!
//! [`apply`] turns the full catalog plus a [`FilterSpec`] into the ordered
//! view the user sees. It runs four stages in a fixed order:
//!
//! 1. category filter
//! 2. shelf-life bucket filter
//! 3. case-insensitive name search
//! 4. stable sort
//!
//! Sorting is always last, so it only ever orders the already-filtered
//! subset. The engine is total: any catalog (including an empty one) and any
//! spec produce a result, possibly empty.

use crate::model::{Category, Product};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => product.category == *c,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Coarse shelf-life classes. Deliberately not a general range query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShelfBucket {
    #[default]
    All,
    /// `>=30`
    AtLeast30,
    /// `<7`
    Under7,
}

impl ShelfBucket {
    pub const ALL: [ShelfBucket; 3] = [ShelfBucket::All, ShelfBucket::AtLeast30, ShelfBucket::Under7];

    pub fn token(&self) -> &'static str {
        match self {
            ShelfBucket::All => "all",
            ShelfBucket::AtLeast30 => ">=30",
            ShelfBucket::Under7 => "<7",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ShelfBucket::All => true,
            ShelfBucket::AtLeast30 => product.shelf_life_days >= 30,
            ShelfBucket::Under7 => product.shelf_life_days < 7,
        }
    }
}

impl fmt::Display for ShelfBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ShelfBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.token() == s)
            .ok_or_else(|| format!("Unknown shelf bucket: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Identity sort: keeps catalog (insertion) order. Not a scored ranking.
    #[default]
    Relevance,
    NameAsc,
    NameDesc,
    ShelfDesc,
    ShelfAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::ShelfDesc,
        SortKey::ShelfAsc,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::ShelfDesc => "shelf-desc",
            SortKey::ShelfAsc => "shelf-asc",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::NameAsc => collate(&a.name, &b.name),
            SortKey::NameDesc => collate(&b.name, &a.name),
            SortKey::ShelfDesc => b.shelf_life_days.cmp(&a.shelf_life_days),
            SortKey::ShelfAsc => a.shelf_life_days.cmp(&b.shelf_life_days),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.token() == s)
            .ok_or_else(|| format!("Unknown sort key: {}", s))
    }
}

/// The user's current query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub category: CategoryFilter,
    pub shelf: ShelfBucket,
    pub search: String,
    pub sort: SortKey,
}

impl FilterSpec {
    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// True when `self` equals `other` except for exactly one filter
    /// dimension, which `self` sets to a non-default value while `other`
    /// leaves it open. Sort keys must match.
    pub fn narrows(&self, other: &FilterSpec) -> bool {
        if self.sort != other.sort {
            return false;
        }
        let category = self.category != other.category;
        let shelf = self.shelf != other.shelf;
        let search = self.search != other.search;
        match (category, shelf, search) {
            (true, false, false) => other.category == CategoryFilter::All,
            (false, true, false) => other.shelf == ShelfBucket::All,
            (false, false, true) => other.search.trim().is_empty(),
            _ => false,
        }
    }
}

/// Runs the filter and sort stages, borrowing from `products`.
pub fn apply<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let needle = spec.search.trim().to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| spec.category.matches(p))
        .filter(|p| spec.shelf.matches(p))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect();

    if spec.sort != SortKey::Relevance {
        // sort_by is stable: ties keep their filtered order.
        view.sort_by(|a, b| spec.sort.compare(a, b));
    }
    view
}

/// Approximates a locale-aware comparison: case-folded text decides, the raw
/// text breaks ties so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductDraft, ProductId};
    use crate::seed::default_catalog;
    use std::collections::HashSet;

    fn spec(category: CategoryFilter, shelf: ShelfBucket, search: &str, sort: SortKey) -> FilterSpec {
        FilterSpec {
            category,
            shelf,
            search: search.to_string(),
            sort,
        }
    }

    fn names(view: &[&Product]) -> Vec<String> {
        view.iter().map(|p| p.name.clone()).collect()
    }

    fn all_specs() -> Vec<FilterSpec> {
        let mut categories = vec![CategoryFilter::All];
        categories.extend(Category::ALL.map(CategoryFilter::Only));
        let mut specs = Vec::new();
        for category in &categories {
            for shelf in ShelfBucket::ALL {
                for search in ["", "muffin", "COOKIE", "chikki", "zzz"] {
                    for sort in SortKey::ALL {
                        specs.push(spec(*category, shelf, search, sort));
                    }
                }
            }
        }
        specs
    }

    #[test]
    fn muffins_sorted_by_name() {
        let products = default_catalog();
        let view = apply(
            &products,
            &spec(CategoryFilter::Only(Category::Muffins), ShelfBucket::All, "", SortKey::NameAsc),
        );
        assert_eq!(
            names(&view),
            vec![
                "Blueberry Muffin",
                "Blueberry Muffin Pack",
                "Butterscotch Muffin",
                "Butterscotch Muffin Pack",
                "Chocolate Muffin",
                "Chocolate Muffin Pack",
                "Strawberry Muffin",
                "Strawberry Muffin Pack",
                "Vanilla Muffin",
                "Vanilla Muffin Pack",
            ]
        );
    }

    #[test]
    fn under_seven_days_keeps_insertion_order() {
        let products = default_catalog();
        let view = apply(
            &products,
            &spec(CategoryFilter::All, ShelfBucket::Under7, "", SortKey::Relevance),
        );
        assert_eq!(
            names(&view),
            vec![
                "Chocolate Muffin",
                "Vanilla Muffin",
                "Blueberry Muffin",
                "Strawberry Muffin",
                "Butterscotch Muffin",
            ]
        );
        assert!(view.iter().all(|p| p.shelf_life_days == 6));
    }

    #[test]
    fn search_is_case_insensitive() {
        let products = default_catalog();
        let view = apply(
            &products,
            &spec(CategoryFilter::All, ShelfBucket::All, "cookie", SortKey::Relevance),
        );
        assert_eq!(
            names(&view),
            vec!["COOKIE 01", "COOKIE 02", "COOKIE 03", "COOKIE 04", "COOKIE 05"]
        );
    }

    #[test]
    fn blank_search_matches_everything() {
        let products = default_catalog();
        for blank in ["", "   "] {
            let view = apply(
                &products,
                &spec(CategoryFilter::All, ShelfBucket::All, blank, SortKey::Relevance),
            );
            assert_eq!(view.len(), products.len());
        }
    }

    #[test]
    fn at_least_thirty_days_bucket() {
        let products = default_catalog();
        let view = apply(
            &products,
            &spec(CategoryFilter::All, ShelfBucket::AtLeast30, "", SortKey::Relevance),
        );
        assert!(view.iter().all(|p| p.shelf_life_days >= 30));
        // Muffins (6 and 12 days) and Khari (15) drop out.
        assert_eq!(view.len(), 29);
    }

    #[test]
    fn shelf_sorts_are_numeric_and_stable() {
        let products = default_catalog();
        let desc = apply(
            &products,
            &spec(CategoryFilter::Only(Category::Snacks), ShelfBucket::All, "", SortKey::ShelfDesc),
        );
        let days: Vec<u32> = desc.iter().map(|p| p.shelf_life_days).collect();
        assert_eq!(days, vec![90, 60, 60, 45, 45, 45, 30, 30, 30, 15]);
        // Ties keep catalog order.
        assert_eq!(
            names(&desc[3..6]),
            vec!["Banana Chips", "Mixture", "Murukku"]
        );

        let asc = apply(
            &products,
            &spec(CategoryFilter::Only(Category::Snacks), ShelfBucket::All, "", SortKey::ShelfAsc),
        );
        assert_eq!(asc[0].name, "Khari");
        assert_eq!(names(&asc[1..4]), vec!["Potato Wafers", "Chakli", "Shankarpali"]);
    }

    #[test]
    fn name_desc_reverses_name_asc_for_unique_names() {
        let products = default_catalog();
        let asc = apply(&products, &spec(CategoryFilter::All, ShelfBucket::All, "", SortKey::NameAsc));
        let mut desc = apply(&products, &spec(CategoryFilter::All, ShelfBucket::All, "", SortKey::NameDesc));
        desc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let products = default_catalog();
        let view = apply(
            &products,
            &spec(CategoryFilter::Only(Category::Chikkis), ShelfBucket::Under7, "", SortKey::NameAsc),
        );
        assert!(view.is_empty());
        assert!(apply(&[], &FilterSpec::default()).is_empty());
    }

    #[test]
    fn relevance_is_identity_on_the_filtered_subset() {
        let products = default_catalog();
        let view = apply(&products, &FilterSpec::default());
        let expected: Vec<&Product> = products.iter().collect();
        assert_eq!(view, expected);
    }

    #[test]
    fn collation_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "apple"), Ordering::Greater);
        assert_eq!(collate("cookie", "COOKIE 01"), Ordering::Less);
        assert_ne!(collate("Khari", "khari"), Ordering::Equal);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let products: Vec<Product> = ["banana", "Apple", "cherry"]
            .iter()
            .map(|n| {
                Product::with_id(
                    ProductId::new(),
                    ProductDraft {
                        name: n.to_string(),
                        image_path: String::new(),
                        net_weight: String::new(),
                        shelf_life_days: 1,
                        category: Category::Snacks,
                    },
                )
            })
            .collect();
        let view = apply(&products, &spec(CategoryFilter::All, ShelfBucket::All, "", SortKey::NameAsc));
        assert_eq!(names(&view), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn filter_monotonicity() {
        let products = default_catalog();
        let specs = all_specs();
        let mut checked = 0;
        for narrow in &specs {
            for wide in &specs {
                if narrow.narrows(wide) {
                    assert!(
                        apply(&products, narrow).len() <= apply(&products, wide).len(),
                        "{:?} returned more than {:?}",
                        narrow,
                        wide
                    );
                    checked += 1;
                }
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn sorting_is_idempotent() {
        let products = default_catalog();
        for s in all_specs() {
            let once: Vec<Product> = apply(&products, &s).into_iter().cloned().collect();
            let twice = apply(&once, &s);
            assert_eq!(twice.into_iter().cloned().collect::<Vec<_>>(), once, "{:?}", s);
        }
    }

    #[test]
    fn category_partition() {
        let products = default_catalog();
        let mut union = HashSet::new();
        for c in Category::ALL {
            let view = apply(
                &products,
                &spec(CategoryFilter::Only(c), ShelfBucket::All, "", SortKey::Relevance),
            );
            assert!(view.iter().all(|p| p.category == c));
            for p in view {
                assert!(union.insert(p.id), "{} appeared in two categories", p.name);
            }
        }
        let all: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(union, all);
    }

    #[test]
    fn narrows_requires_exactly_one_dimension() {
        let wide = FilterSpec::default();
        let by_cat = spec(CategoryFilter::Only(Category::Snacks), ShelfBucket::All, "", SortKey::Relevance);
        let by_two = spec(CategoryFilter::Only(Category::Snacks), ShelfBucket::Under7, "", SortKey::Relevance);
        assert!(by_cat.narrows(&wide));
        assert!(!wide.narrows(&by_cat));
        assert!(!by_two.narrows(&wide));
        assert!(by_two.narrows(&by_cat));
        assert!(!wide.narrows(&wide));
    }

    #[test]
    fn tokens_parse_back() {
        for b in ShelfBucket::ALL {
            assert_eq!(b.to_string().parse::<ShelfBucket>().unwrap(), b);
        }
        for k in SortKey::ALL {
            assert_eq!(k.to_string().parse::<SortKey>().unwrap(), k);
        }
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Chikkis".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Chikkis)
        );
        assert!("newest".parse::<SortKey>().is_err());
        assert!(">30".parse::<ShelfBucket>().is_err());
    }
}
