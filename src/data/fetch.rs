use anyhow::{Context, Result};
use thiserror::Error;

use super::loader::parse_csv;
use super::model::StockCatalog;

// ---------------------------------------------------------------------------
// HTTP fetch of the published catalog
// ---------------------------------------------------------------------------

/// Failure modes of the catalog download.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("only http and https URLs are supported: {0}")]
    UnsupportedScheme(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
}

/// GET `url` and parse the body as the consolidated CSV.
///
/// The catalog is published as a static `.csv` asset, so the body is
/// always treated as CSV regardless of content type.  The call blocks
/// until the download completes or fails; there is no timeout, retry,
/// or cancellation.
pub fn fetch_catalog(url: &str) -> Result<StockCatalog> {
    let text = fetch_text(url).context("fetching catalog")?;
    parse_csv(text.as_bytes())
}

fn fetch_text(url: &str) -> Result<String, FetchError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::UnsupportedScheme(url.to_string()));
    }

    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_urls() {
        let err = fetch_text("ftp://example.com/consolidado_datos.csv").unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(_)));

        let err = fetch_text("assets/consolidado_datos.csv").unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(_)));
    }
}
