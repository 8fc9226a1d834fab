use serde::Serialize;

/// Fixed page size for every request
pub const PER_PAGE: u32 = 20;

/// Query parameter carrying the ingredient search text
pub const SEARCH_KEY: &str = "search_ingredients";
/// Query parameter carrying the 1-based page number
pub const PAGE_KEY: &str = "page";
/// Query parameter carrying the page size
pub const PER_PAGE_KEY: &str = "per_page";

/// Explicit request parameters for one page of search results.
///
/// Field order is the order the parameters appear in request and address
/// query strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub search_ingredients: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchParams {
    /// Parameters for `page` of the results for `query`. Page 0 becomes 1.
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            search_ingredients: query.into(),
            page: page.max(1),
            per_page: PER_PAGE,
        }
    }

    /// Read parameters from decoded query pairs.
    ///
    /// The first occurrence of a key wins. A page that is missing, not an
    /// integer, or not positive becomes 1. Any incoming `per_page` is
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = None;
        let mut page = None;

        for (key, value) in pairs {
            match key.as_ref() {
                SEARCH_KEY if query.is_none() => query = Some(value.as_ref().to_string()),
                PAGE_KEY if page.is_none() => page = Some(parse_page(value.as_ref())),
                _ => {}
            }
        }

        Self::new(query.unwrap_or_default(), page.unwrap_or(1))
    }

    /// Pairs in serialization order
    pub fn pairs(&self) -> Vec<(String, String)> {
        vec![
            (SEARCH_KEY.to_string(), self.search_ingredients.clone()),
            (PAGE_KEY.to_string(), self.page.to_string()),
            (PER_PAGE_KEY.to_string(), self.per_page.to_string()),
        ]
    }

    /// Rewrite an existing address query with these parameters.
    ///
    /// Pairs the browser does not own are kept in their original order,
    /// followed by the search parameters.
    pub fn apply_to(&self, current: &[(String, String)]) -> Vec<(String, String)> {
        current
            .iter()
            .filter(|(key, _)| !is_owned_key(key))
            .cloned()
            .chain(self.pairs())
            .collect()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(String::new(), 1)
    }
}

fn is_owned_key(key: &str) -> bool {
    matches!(key, SEARCH_KEY | PAGE_KEY | PER_PAGE_KEY)
}

fn parse_page(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|page| *page > 0)
        .unwrap_or(1)
}
