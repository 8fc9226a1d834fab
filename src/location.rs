use reqwest::Url;
use std::sync::{Mutex, PoisonError};

use crate::BrowserError;

/// The page address the browser reads its initial state from and keeps in
/// sync with every state change.
pub trait Location: Send + Sync {
    /// Decoded query pairs of the current address
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Replace the query string in place. Implementations must not navigate
    /// or add a history entry.
    fn replace_query_pairs(&self, pairs: &[(String, String)]);
}

/// In-process address bar backed by a parsed URL
#[derive(Debug)]
pub struct MemoryLocation {
    url: Mutex<Url>,
}

impl MemoryLocation {
    pub fn parse(address: &str) -> Result<Self, BrowserError> {
        let url = Url::parse(address)
            .map_err(|e| BrowserError::InvalidUrl(format!("{}: {}", address, e)))?;
        Ok(Self {
            url: Mutex::new(url),
        })
    }

    /// Full current address
    pub fn href(&self) -> String {
        self.url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .to_string()
    }
}

impl Location for MemoryLocation {
    fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .query_pairs()
            .into_owned()
            .collect()
    }

    fn replace_query_pairs(&self, pairs: &[(String, String)]) {
        let mut url = self.url.lock().unwrap_or_else(PoisonError::into_inner);
        if pairs.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_decoded_pairs() {
        let location =
            MemoryLocation::parse("http://localhost/?search_ingredients=green%20onion&page=2")
                .unwrap();
        let pairs = location.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search_ingredients".to_string(), "green onion".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_replace_keeps_origin_and_path() {
        let location = MemoryLocation::parse("https://recipes.example/browse?page=9").unwrap();
        location.replace_query_pairs(&[
            ("search_ingredients".to_string(), "egg".to_string()),
            ("page".to_string(), "1".to_string()),
        ]);
        assert_eq!(
            location.href(),
            "https://recipes.example/browse?search_ingredients=egg&page=1"
        );
    }

    #[test]
    fn test_replace_with_nothing_clears_query() {
        let location = MemoryLocation::parse("http://localhost/?page=2").unwrap();
        location.replace_query_pairs(&[]);
        assert_eq!(location.href(), "http://localhost/");
    }

    #[test]
    fn test_invalid_address() {
        let result = MemoryLocation::parse("not a url");
        assert!(matches!(result, Err(BrowserError::InvalidUrl(_))));
    }
}
