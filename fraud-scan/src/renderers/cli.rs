//! Terminal renderer with icons and an actions table

use super::OutputRenderer;
use crate::analysis::{classify, Severity, Verdict};
use crate::state::RequestState;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};

/// CLI renderer producing plain terminal text
pub struct CliRenderer {
    /// Whether to list the service's actions
    pub show_actions: bool,
}

impl CliRenderer {
    /// Create a new CLI renderer
    pub fn new() -> Self {
        Self { show_actions: true }
    }

    /// Create a CLI renderer that omits the actions table
    pub fn without_actions() -> Self {
        Self {
            show_actions: false,
        }
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for CliRenderer {
    fn render(&self, state: &RequestState) -> String {
        match state {
            RequestState::Idle => "Enter some text to analyze.\n".to_string(),
            RequestState::Pending { .. } => "⏳ Analyzing...\n".to_string(),
            RequestState::Failed { message } => format!("❌ Analysis failed\n{}\n", message),
            RequestState::Succeeded { result } => {
                format_verdict(&classify(Some(result)), self.show_actions)
            }
        }
    }
}

/// Icon for a severity tier
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "🚨",
        Severity::Warning => "⚠️ ",
        Severity::Info => "ℹ️ ",
        Severity::Success => "✅",
    }
}

fn format_verdict(verdict: &Verdict, show_actions: bool) -> String {
    let mut output = format!("{} {}\n", severity_icon(verdict.severity), verdict.title);

    if !verdict.fraud_kinds.is_empty() {
        let kinds: Vec<&str> = verdict.fraud_kinds.iter().map(|k| k.label()).collect();
        output.push_str(&format!("Flagged as fraudulent: {}\n", kinds.join(", ")));
    }

    if let Some(summary) = &verdict.summary {
        output.push('\n');
        output.push_str(summary);
        output.push('\n');
    }

    if show_actions && !verdict.actions.is_empty() {
        output.push('\n');
        output.push_str(&actions_table(&verdict.actions).to_string());
        output.push('\n');
    }

    output
}

fn actions_table(actions: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Action").add_attribute(Attribute::Bold),
        ]);

    for (i, action) in actions.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(action)]);
    }
    table
}
