//! Single-page extraction: fetch a URL, parse the HTML, and pull out links,
//! text by tag, text by class, and images with resolved URLs.

pub mod aggregate;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetcher;
pub mod normalize;
pub mod pipeline;
pub mod rules;
pub mod validate;

pub use aggregate::ExtractionResult;
pub use config::Settings;
pub use error::{ErrorKind, ErrorReport, ScrapeError};
pub use extract::{ExtractedRecord, ImageRecord};
pub use pipeline::run_extraction;
pub use rules::{ExtractionRule, RuleKind, RuleSet};
