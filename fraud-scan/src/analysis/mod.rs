//! Verdict classification
//!
//! Pure mapping from a service payload to one display category. No I/O and
//! no presentation concerns beyond the fixed title and severity tier.

pub mod classifier;

pub use classifier::{classify, Category, Severity, Verdict};
