use crate::types::{AnalysisResult, FraudKind};
use crate::utils::text::capitalize_first;
use serde::Serialize;

/// Display category of a verdict. Exactly one applies to any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// At least one fraud flag is set
    Risk,
    /// Fake news, no fraud
    Misinformation,
    /// Input was not something the service could analyze
    Informational,
    /// Nothing flagged
    Clean,
    /// There is no result to classify
    NoResult,
}

/// Presentation tier of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Category {
    /// Fixed title shown above the verdict
    pub fn title(&self) -> &'static str {
        match self {
            Category::Risk => "Potential fraud detected",
            Category::Misinformation => "Possible misinformation",
            Category::Informational => "Nothing to analyze",
            Category::Clean => "No threats found",
            Category::NoResult => "No analysis yet",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Category::Risk => Severity::Error,
            Category::Misinformation => Severity::Warning,
            Category::Informational | Category::NoResult => Severity::Info,
            Category::Clean => Severity::Success,
        }
    }
}

/// A classified verdict plus the fields a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub category: Category,
    pub title: &'static str,
    pub severity: Severity,
    /// Service summary with its first character capitalized
    pub summary: Option<String>,
    pub actions: Vec<String>,
    /// Which fraud flags fired; empty unless `category` is `Risk`
    pub fraud_kinds: Vec<FraudKind>,
}

impl Verdict {
    fn new(category: Category) -> Self {
        Self {
            category,
            title: category.title(),
            severity: category.severity(),
            summary: None,
            actions: Vec::new(),
            fraud_kinds: Vec::new(),
        }
    }
}

/// Map a payload to its verdict.
///
/// Fraud beats misinformation, which beats irrelevant input; anything else
/// is clean. `None` yields the `NoResult` sentinel.
pub fn classify(result: Option<&AnalysisResult>) -> Verdict {
    let Some(result) = result else {
        return Verdict::new(Category::NoResult);
    };

    let category = if result.has_fraud() {
        Category::Risk
    } else if result.is_fake_news {
        Category::Misinformation
    } else if result.is_irrelevant_input {
        Category::Informational
    } else {
        Category::Clean
    };

    let mut verdict = Verdict::new(category);
    verdict.summary = result
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize_first);
    verdict.actions = result.actions.clone();
    if category == Category::Risk {
        verdict.fraud_kinds = result.fraud_kinds();
    }
    verdict
}
