pub mod images;
pub mod links;
pub mod text;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{aggregate, ExtractionResult};
use crate::document::Document;
use crate::rules::{RuleKind, RuleSet};

pub const NO_ALT_TEXT: &str = "No alt text";

/// One extracted item. Images carry a resolved URL and alt text; everything
/// else is a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractedRecord {
    Text(String),
    Image(ImageRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    #[serde(rename = "URL")]
    pub absolute_url: String,
    #[serde(rename = "Alt Text")]
    pub alt_text: String,
}

impl ExtractedRecord {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtractedRecord::Text(s) => Some(s),
            ExtractedRecord::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageRecord> {
        match self {
            ExtractedRecord::Image(img) => Some(img),
            ExtractedRecord::Text(_) => None,
        }
    }
}

/// Run every enabled rule against the document.
pub fn extract(doc: &Document, rules: &RuleSet, base_url: &str) -> ExtractionResult {
    let raw: Vec<(RuleKind, Vec<ExtractedRecord>)> = rules
        .enabled()
        .map(|rule| {
            let records = match (rule.kind, rule.param()) {
                (RuleKind::Links, _) => links::extract(doc),
                (RuleKind::TagText, Some(tag)) => text::by_tag(doc, tag),
                (RuleKind::ClassText, Some(class)) => text::by_class(doc, class),
                (RuleKind::TagText | RuleKind::ClassText, None) => Vec::new(),
                (RuleKind::Images, _) => images::extract(doc, base_url),
            };
            debug!(rule = rule.kind.label(), records = records.len(), "Rule applied");
            (rule.kind, records)
        })
        .collect();

    aggregate(raw)
}
