pub mod extract;
pub mod fetch;

pub use extract::extract_headlines;
pub use fetch::fetch_page;

use hl_core::Result;
use scraper::Html;
use tracing::info;

/// Fetches `url` and extracts the unique headlines from its HTML.
pub async fn scrape_headlines(url: &str) -> Result<Vec<String>> {
    let body = fetch::fetch_page(url).await?;
    let document = Html::parse_document(&body);
    info!("✅ HTML content parsed successfully!");

    info!("🔍 Searching for headlines...");
    let headlines = extract::extract_headlines(&document);
    info!("✅ Found {} unique headlines!", headlines.len());

    Ok(headlines)
}

pub mod prelude {
    pub use super::extract::extract_headlines;
    pub use super::fetch::fetch_page;
    pub use super::scrape_headlines;
    pub use hl_core::{Error, Result};
}
