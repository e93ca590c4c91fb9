use super::ExtractedRecord;
use crate::document::{element_text, Document};

/// Stripped text of every element named `tag`. Empty text is kept.
pub fn by_tag(doc: &Document, tag: &str) -> Vec<ExtractedRecord> {
    doc.elements_by_tag(tag)
        .map(|el| ExtractedRecord::Text(element_text(&el)))
        .collect()
}

/// Stripped text of every element carrying the class token.
pub fn by_class(doc: &Document, class: &str) -> Vec<ExtractedRecord> {
    doc.elements_by_class(class)
        .map(|el| ExtractedRecord::Text(element_text(&el)))
        .collect()
}
