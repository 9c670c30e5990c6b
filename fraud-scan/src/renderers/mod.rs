//! Verdict renderers for different output formats
//!
//! Renderers read a [`RequestState`] and never change it. Classification
//! happens here on every render, so output always reflects the current state.

use crate::state::RequestState;

/// Simple trait for rendering request state in different formats
pub trait OutputRenderer {
    /// Render the state to a string in the specific format
    fn render(&self, state: &RequestState) -> String;
}

pub mod cli;
pub mod json;

pub use cli::CliRenderer;
pub use json::{JsonRenderer, Report};
