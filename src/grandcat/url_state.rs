//! # URL State
//!
//! Maps a [`FilterSpec`] to and from a page URL so a view can be shared,
//! bookmarked and restored.
//!
//! | key     | field    | omitted when  |
//! |---------|----------|---------------|
//! | `cat`   | category | `all`         |
//! | `shelf` | bucket   | `all`         |
//! | `q`     | search   | empty         |
//! | `sort`  | sort key | `relevance`   |
//!
//! Decoding is a partial update: keys missing from the query string keep
//! whatever the previous spec held. Separately, a fragment naming a category
//! (`products.html#Chikkis`) preselects that category on first load, unless
//! the query string names one explicitly.

use crate::model::Category;
use crate::query::{CategoryFilter, FilterSpec, ShelfBucket, SortKey};
use url::form_urlencoded;
use url::Url;

pub const CATEGORY_PARAM: &str = "cat";
pub const SHELF_PARAM: &str = "shelf";
pub const SEARCH_PARAM: &str = "q";
pub const SORT_PARAM: &str = "sort";

/// Encodes the non-default fields of `spec`, without a leading `?`.
pub fn to_query_string(spec: &FilterSpec) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let CategoryFilter::Only(category) = spec.category {
        serializer.append_pair(CATEGORY_PARAM, category.token());
    }
    if spec.shelf != ShelfBucket::All {
        serializer.append_pair(SHELF_PARAM, spec.shelf.token());
    }
    if !spec.search.is_empty() {
        serializer.append_pair(SEARCH_PARAM, &spec.search);
    }
    if spec.sort != SortKey::Relevance {
        serializer.append_pair(SORT_PARAM, spec.sort.token());
    }
    serializer.finish()
}

/// Applies the fields present in `query` on top of `previous`.
///
/// Unrecognised values for `cat`, `shelf` and `sort` are ignored and leave
/// the previous value in place. A present-but-empty `q` clears the search.
pub fn from_query_string(query: &str, previous: &FilterSpec) -> FilterSpec {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut spec = previous.clone();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            CATEGORY_PARAM => assign(&mut spec.category, &key, &value),
            SHELF_PARAM => assign(&mut spec.shelf, &key, &value),
            SORT_PARAM => assign(&mut spec.sort, &key, &value),
            SEARCH_PARAM => spec.search = value.into_owned(),
            _ => {}
        }
    }
    spec
}

fn assign<T: std::str::FromStr<Err = String>>(slot: &mut T, key: &str, value: &str) {
    match value.parse() {
        Ok(parsed) => *slot = parsed,
        Err(e) => tracing::debug!(key, "ignoring url parameter: {}", e),
    }
}

/// Reads a category preselection from a URL fragment (with or without `#`).
pub fn category_from_fragment(fragment: &str) -> Option<Category> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return None;
    }
    // Fragments are percent-encoded but, unlike queries, '+' is literal.
    let escaped = fragment.replace('+', "%2B").replace('&', "%26");
    let decoded: String = form_urlencoded::parse(format!("f={}", escaped).as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default();
    fragment_category(&decoded)
}

fn fragment_category(decoded: &str) -> Option<Category> {
    decoded
        .parse()
        .ok()
        .or_else(|| Category::parse_loose(decoded))
}

/// The spec to show on first load of a page.
///
/// Starts from the default spec, applies a fragment category if present, then
/// the query string, so an explicit `cat` parameter wins over the fragment.
pub fn initial_spec(query: Option<&str>, fragment: Option<&str>) -> FilterSpec {
    let mut spec = FilterSpec::default();
    if let Some(category) = fragment.and_then(category_from_fragment) {
        spec.category = CategoryFilter::Only(category);
    }
    match query {
        Some(query) => from_query_string(query, &spec),
        None => spec,
    }
}

/// [`initial_spec`] for a whole URL.
pub fn from_url(url: &Url) -> FilterSpec {
    initial_spec(url.query(), url.fragment())
}

/// A link to `base` showing `spec`. Any existing query and fragment on
/// `base` are replaced.
pub fn shareable_url(base: &Url, spec: &FilterSpec) -> Url {
    let mut url = base.clone();
    url.set_fragment(None);
    let query = to_query_string(spec);
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }
    url
}
