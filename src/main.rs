use log::info;
use std::env;

use recipe_browser::render::render_page;
use recipe_browser::{BrowserConfig, HttpRecipeSource, MemoryLocation, RecipeBrowser};

const DEFAULT_ADDRESS: &str = "http://localhost/";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Page address whose query string seeds the search, e.g.
    // "http://localhost/?search_ingredients=egg&page=2"
    let address = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

    let config = BrowserConfig::load()?;
    let source = HttpRecipeSource::from_config(&config)?;
    let location = MemoryLocation::parse(&address)?;

    let browser = RecipeBrowser::new(source, location, config.debounce_delay());
    browser.initialize().await;

    info!("Address is now {}", browser.location().href());
    println!("{}", render_page(&browser.state()));

    Ok(())
}
