//! Ingredient search over a remote recipe API.
//!
//! [`RecipeBrowser`] owns the view state (query, page, loading flag and
//! results), keeps a [`Location`] in sync with it, and fetches pages from a
//! [`RecipeSource`]. The [`render`] module turns that state into HTML.

pub mod config;
pub mod controller;
pub mod error;
pub mod location;
pub mod model;
pub mod pagination;
pub mod params;
pub mod render;
pub mod source;

pub use crate::config::BrowserConfig;
pub use controller::{RecipeBrowser, SearchState};
pub use error::BrowserError;
pub use location::{Location, MemoryLocation};
pub use model::Recipe;
pub use pagination::Pagination;
pub use params::{SearchParams, PER_PAGE};
pub use source::{HttpRecipeSource, RecipeSource};

/// Fetch one page of recipes from the API at `base_url`
///
/// # Example
/// ```no_run
/// # use recipe_browser::{search_recipes, SearchParams};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = search_recipes(
///     "https://dinner-time-test.fly.dev",
///     &SearchParams::new("egg", 1),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(
    base_url: &str,
    params: &SearchParams,
) -> Result<Vec<Recipe>, BrowserError> {
    let source = HttpRecipeSource::new(base_url, None)?;
    source.fetch(params).await
}
