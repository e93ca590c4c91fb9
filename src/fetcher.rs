use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::config::Settings;
use crate::error::ScrapeError;

/// Raw body on success, classified failure otherwise.
pub type FetchOutcome = Result<Vec<u8>, ScrapeError>;

/// One GET, bounded by the configured timeout. Non-2xx is an error; no retries.
pub async fn fetch(url: &Url, settings: &Settings) -> FetchOutcome {
    let client = Client::builder()
        .timeout(settings.timeout())
        .user_agent(settings.user_agent.as_str())
        .build()?;

    info!("Fetching {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify(e, url, settings))?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} returned {}", url, status);
        return Err(ScrapeError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| classify(e, url, settings))?;
    info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

fn classify(err: reqwest::Error, url: &Url, settings: &Settings) -> ScrapeError {
    if err.is_timeout() {
        warn!("Timed out fetching {}", url);
        ScrapeError::Timeout {
            url: url.to_string(),
            timeout: settings.timeout(),
        }
    } else {
        warn!("Request to {} failed: {}", url, err);
        ScrapeError::Transport(err)
    }
}
