use tracing::{info, warn};

use crate::aggregate::ExtractionResult;
use crate::config::Settings;
use crate::document;
use crate::error::{ErrorReport, ScrapeError};
use crate::extract;
use crate::fetcher;
use crate::rules::RuleSet;
use crate::validate;

/// Validate, fetch, parse and extract a single page.
///
/// Either the full result or one error report; never both. Relative image
/// URLs resolve against `url` as given, not against any redirect target.
pub async fn run_extraction(
    url: &str,
    rules: &RuleSet,
    settings: &Settings,
) -> Result<ExtractionResult, ErrorReport> {
    scrape(url, rules, settings).await.map_err(|e| {
        warn!(kind = ?e.kind(), "Extraction failed: {}", e);
        ErrorReport::from(e)
    })
}

async fn scrape(
    url: &str,
    rules: &RuleSet,
    settings: &Settings,
) -> Result<ExtractionResult, ScrapeError> {
    let target = validate::parse_target(url)?;
    let raw = fetcher::fetch(&target, settings).await?;
    let doc = document::parse(&raw)?;
    let result = extract::extract(&doc, rules, url);
    info!(
        kinds = result.len(),
        records = result.total_records(),
        "Extraction finished for {}",
        url
    );
    Ok(result)
}
