//! Shared utility modules

pub mod text;

pub use text::capitalize_first;
