use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::BrowserConfig;
use crate::model::Recipe;
use crate::params::SearchParams;
use crate::BrowserError;

/// Path of the search endpoint relative to the API base URL
pub const READ_PATH: &str = "recipe/read";

/// Anything that can produce one page of recipes for a set of search
/// parameters
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Recipe>, BrowserError>;
}

/// Recipe API client over HTTP
pub struct HttpRecipeSource {
    client: Client,
    endpoint: Url,
}

impl HttpRecipeSource {
    /// Create a client for the API at `base_url`.
    ///
    /// Without a timeout, requests rely on the transport defaults.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, BrowserError> {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), READ_PATH);
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| BrowserError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn from_config(config: &BrowserConfig) -> Result<Self, BrowserError> {
        Self::new(&config.base_url, config.timeout())
    }

    /// Full request URL for `params`
    pub fn request_url(&self, params: &SearchParams) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params.pairs());
        url
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Recipe>, BrowserError> {
        let url = self.request_url(params);
        debug!("GET {}", url);

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let recipes: Vec<Recipe> = serde_json::from_str(&body)?;
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_shape() {
        let source = HttpRecipeSource::new("https://api.example.com/", None).unwrap();
        let url = source.request_url(&SearchParams::new("egg", 3));
        assert_eq!(
            url.as_str(),
            "https://api.example.com/recipe/read?search_ingredients=egg&page=3&per_page=20"
        );
    }

    #[test]
    fn test_request_url_encodes_search_text() {
        let source = HttpRecipeSource::new("https://api.example.com", None).unwrap();
        let url = source.request_url(&SearchParams::new("salt & pepper", 1));
        assert_eq!(
            url.query(),
            Some("search_ingredients=salt+%26+pepper&page=1&per_page=20")
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpRecipeSource::new("::not a url::", None);
        assert!(matches!(result, Err(BrowserError::InvalidUrl(_))));
    }
}
