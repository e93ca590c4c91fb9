use std::collections::BTreeMap;

use serde::Serialize;

use crate::extract::ExtractedRecord;
use crate::rules::RuleKind;

/// Per-kind record lists. A kind is present only when it has records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    entries: BTreeMap<RuleKind, Vec<ExtractedRecord>>,
}

impl ExtractionResult {
    pub fn get(&self, kind: RuleKind) -> Option<&[ExtractedRecord]> {
        self.entries.get(&kind).map(Vec::as_slice)
    }

    pub fn contains(&self, kind: RuleKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Present kinds in Links, Text, Custom Class, Images order.
    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &[ExtractedRecord])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Collect per-rule lists, dropping the empty ones.
pub fn aggregate(raw: Vec<(RuleKind, Vec<ExtractedRecord>)>) -> ExtractionResult {
    let entries = raw
        .into_iter()
        .filter(|(_, records)| !records.is_empty())
        .collect();
    ExtractionResult { entries }
}
