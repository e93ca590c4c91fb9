use serde::Serialize;

/// The four extraction modes, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleKind {
    #[serde(rename = "Links")]
    Links,
    #[serde(rename = "Text")]
    TagText,
    #[serde(rename = "Custom Class")]
    ClassText,
    #[serde(rename = "Images")]
    Images,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Links,
        RuleKind::TagText,
        RuleKind::ClassText,
        RuleKind::Images,
    ];

    /// Label used for headings, CSV headers and JSON keys.
    pub fn label(self) -> &'static str {
        match self {
            RuleKind::Links => "Links",
            RuleKind::TagText => "Text",
            RuleKind::ClassText => "Custom Class",
            RuleKind::Images => "Images",
        }
    }

    pub fn needs_param(self) -> bool {
        matches!(self, RuleKind::TagText | RuleKind::ClassText)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    pub kind: RuleKind,
    /// Tag name for `TagText`, class token for `ClassText`.
    pub param: Option<String>,
}

impl ExtractionRule {
    pub fn new(kind: RuleKind, param: Option<String>) -> Self {
        Self { kind, param }
    }

    pub fn links() -> Self {
        Self::new(RuleKind::Links, None)
    }

    pub fn tag_text(tag: impl Into<String>) -> Self {
        Self::new(RuleKind::TagText, Some(tag.into()))
    }

    pub fn class_text(class: impl Into<String>) -> Self {
        Self::new(RuleKind::ClassText, Some(class.into()))
    }

    pub fn images() -> Self {
        Self::new(RuleKind::Images, None)
    }

    /// Trimmed, non-empty parameter, if any.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn is_enabled(&self) -> bool {
        !self.kind.needs_param() || self.param().is_some()
    }
}

/// At most one rule per kind, iterated in `RuleKind` order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ExtractionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any existing rule of the same kind.
    pub fn insert(&mut self, rule: ExtractionRule) {
        match self.rules.binary_search_by_key(&rule.kind, |r| r.kind) {
            Ok(i) => self.rules[i] = rule,
            Err(i) => self.rules.insert(i, rule),
        }
    }

    pub fn with(mut self, rule: ExtractionRule) -> Self {
        self.insert(rule);
        self
    }

    pub fn get(&self, kind: RuleKind) -> Option<&ExtractionRule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractionRule> {
        self.rules.iter()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &ExtractionRule> {
        self.rules.iter().filter(|r| r.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<ExtractionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ExtractionRule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}
