use hl_core::{Error, Result};
use tracing::info;
use url::Url;

/// Browser impersonation string; some news sites refuse requests from
/// clients that identify as scripts.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
}

/// Fetches the page at `url` with a single GET request.
///
/// Returns the body only for a 200 response; any other status code is an
/// error carrying that code. No retries, no explicit timeout.
pub async fn fetch_page(url: &str) -> Result<String> {
    let url = parse_url(url)?;
    info!("Fetching data from: {}", url);

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::Status(status.as_u16()));
    }
    info!("✅ Successfully fetched the webpage!");

    Ok(response.text().await?)
}
