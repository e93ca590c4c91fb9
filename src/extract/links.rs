use tracing::trace;

use super::ExtractedRecord;
use crate::document::Document;

/// Every non-empty `href`, verbatim. Links are not resolved against the page.
pub fn extract(doc: &Document) -> Vec<ExtractedRecord> {
    doc.anchors()
        .filter_map(|a| match a.value().attr("href") {
            Some(href) if !href.is_empty() => Some(ExtractedRecord::Text(href.to_string())),
            _ => {
                trace!("Skipping anchor without href");
                None
            }
        })
        .collect()
}
