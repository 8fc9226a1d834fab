use serde::{Deserialize, Serialize};

/// A recipe record as served by the recipe API.
///
/// The server owns these records; the browser only reads and renders them.
/// Only `id`, `title` and `ingredients` are required. Anything else missing
/// decodes to its default, so one sparse record never fails a whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    /// Cooking duration, in whatever unit the server uses
    #[serde(default)]
    pub cook_time: f64,
    /// Preparation duration, in whatever unit the server uses
    #[serde(default)]
    pub prep_time: f64,
    /// Opaque rating string, displayed or ignored but never parsed
    #[serde(default)]
    pub ratings: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    /// Image URL; empty renders as a broken image
    #[serde(default)]
    pub image: String,
    /// Ingredient lines in display order
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}
