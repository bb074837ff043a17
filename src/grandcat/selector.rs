use crate::catalog::Catalog;
use crate::model::{Product, ProductId};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user input that picks one product out of the catalog.
///
/// - `3` is a 1-based position in catalog order;
/// - a UUID selects by surrogate id;
/// - anything else is an exact, case-insensitive product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    Position(usize),
    Id(ProductId),
    Name(String),
}

impl ProductSelector {
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        match self {
            ProductSelector::Position(n) => n
                .checked_sub(1)
                .and_then(|i| catalog.products().get(i)),
            ProductSelector::Id(id) => catalog.get(id),
            ProductSelector::Name(name) => catalog.find_by_name(name),
        }
    }
}

impl fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSelector::Position(n) => write!(f, "{}", n),
            ProductSelector::Id(id) => write!(f, "{}", id),
            ProductSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for ProductSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty product selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            return Ok(ProductSelector::Position(n));
        }
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(ProductSelector::Id(ProductId(uuid)));
        }
        Ok(ProductSelector::Name(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::KvStore;

    fn catalog() -> Catalog {
        Catalog::load(&KvStore::new(MemBackend::new())).unwrap()
    }

    #[test]
    fn parses_each_form() {
        assert_eq!("3".parse::<ProductSelector>(), Ok(ProductSelector::Position(3)));
        let id = ProductId::new();
        assert_eq!(id.to_string().parse::<ProductSelector>(), Ok(ProductSelector::Id(id)));
        assert_eq!(
            " Peanut Chikki ".parse::<ProductSelector>(),
            Ok(ProductSelector::Name("Peanut Chikki".into()))
        );
        assert!("  ".parse::<ProductSelector>().is_err());
    }

    #[test]
    fn positions_are_one_based() {
        let catalog = catalog();
        assert_eq!(
            ProductSelector::Position(1).resolve(&catalog).map(|p| p.name.as_str()),
            Some("Chocolate Muffin")
        );
        assert!(ProductSelector::Position(0).resolve(&catalog).is_none());
        assert!(ProductSelector::Position(41).resolve(&catalog).is_none());
    }

    #[test]
    fn names_match_case_insensitively() {
        let catalog = catalog();
        let found = ProductSelector::Name("cookie 03".into()).resolve(&catalog).unwrap();
        assert_eq!(found.name, "COOKIE 03");
    }

    #[test]
    fn ids_resolve() {
        let catalog = catalog();
        let target = &catalog.products()[7];
        let found = ProductSelector::Id(target.id).resolve(&catalog).unwrap();
        assert_eq!(found, target);
    }
}
