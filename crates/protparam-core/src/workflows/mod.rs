//! # Workflows Module
//!
//! Entry points that run the complete analysis: normalization, composition,
//! and every calculator in [`crate::engine`], gathered into a
//! [`report::PropertyReport`].

pub mod analyze;
pub mod batch;
pub mod report;

pub use analyze::{analyze, analyze_sequence, analyze_with};
pub use report::PropertyReport;
