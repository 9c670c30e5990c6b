use serde::{Deserialize, Deserializer, Serialize};

/// Text submitted to the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty input text
    #[serde(rename = "user_query")]
    pub text: String,
}

impl AnalysisRequest {
    /// Build a request from raw input. Returns `None` when the input is
    /// empty or whitespace only.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }
}

/// Verdict payload returned by the analysis service.
///
/// Every field is optional on the wire. Missing or `null` flags read as
/// `false`, missing lists as empty, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_fraud_url: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_fraud_email: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_fraud_sms: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_fake_news: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_irrelevant_input: bool,
    /// Human readable explanation of the verdict
    #[serde(default, rename = "final_reasoning_summary", alias = "summary")]
    pub summary: Option<String>,
    /// Remediation or follow-up steps, in server order
    #[serde(
        default,
        rename = "actions_taken",
        alias = "actions",
        deserialize_with = "null_as_default"
    )]
    pub actions: Vec<String>,
}

/// The kind of content a fraud flag refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudKind {
    Url,
    Email,
    Sms,
}

impl FraudKind {
    pub fn label(&self) -> &'static str {
        match self {
            FraudKind::Url => "URL",
            FraudKind::Email => "email",
            FraudKind::Sms => "SMS",
        }
    }
}

impl std::fmt::Display for FraudKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl AnalysisResult {
    /// Fraud flags that are set, always in URL, email, SMS order
    pub fn fraud_kinds(&self) -> Vec<FraudKind> {
        [
            (self.is_fraud_url, FraudKind::Url),
            (self.is_fraud_email, FraudKind::Email),
            (self.is_fraud_sms, FraudKind::Sms),
        ]
        .into_iter()
        .filter_map(|(set, kind)| set.then_some(kind))
        .collect()
    }

    /// Check if any fraud flag is set
    pub fn has_fraud(&self) -> bool {
        self.is_fraud_url || self.is_fraud_email || self.is_fraud_sms
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
