//! HTML document adapter.
//!
//! Wraps `scraper::Html` and exposes the handful of queries the extraction
//! rules need. Parsing is html5ever's best-effort tree construction, so broken
//! markup still yields a tree.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;

static ANY_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("*").unwrap());
static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static IMG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

pub struct Document {
    html: Html,
}

/// Parse raw page bytes. Empty or whitespace-only content is rejected.
pub fn parse(raw: &[u8]) -> Result<Document, ScrapeError> {
    let text = String::from_utf8_lossy(raw);
    if text.trim().is_empty() {
        return Err(ScrapeError::EmptyContent);
    }

    let html = Html::parse_document(&text);
    if !html.errors.is_empty() {
        debug!(errors = html.errors.len(), "Recovered from malformed HTML");
    }
    Ok(Document { html })
}

impl Document {
    /// Elements whose tag name equals `tag`, ignoring ASCII case.
    pub fn elements_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .select(&ANY_SEL)
            .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
    }

    /// Elements carrying `class` as one of their whitespace-separated class tokens.
    pub fn elements_by_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .select(&ANY_SEL)
            .filter(move |el| el.value().classes().any(|c| c == class))
    }

    pub fn anchors(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.html.select(&ANCHOR_SEL)
    }

    pub fn images(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.html.select(&IMG_SEL)
    }
}

/// Concatenated descendant text with surrounding whitespace stripped.
///
/// Text nodes are joined untouched, so whitespace between them survives:
/// `<p><b>Nested</b> text </p>` gives `Nested text`.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
