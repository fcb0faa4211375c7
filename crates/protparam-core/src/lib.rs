//! # ProtParam++ Core Library
//!
//! Computes physicochemical properties of a protein from its amino-acid
//! sequence: molecular weight, isoelectric point, molar extinction
//! coefficients at 280 nm, GRAVY hydropathy, and residue composition.
//!
//! Every analysis is a pure function of its input text. The library performs
//! no I/O of its own beyond optionally reading a custom pKa scale file, and
//! the constant tables it reads are immutable, so analyses may run on any
//! number of threads at once.
//!
//! ## Layers
//!
//! - **[`core`]**: The amino-acid alphabet, sequence normalization,
//!   composition, and the static chemistry tables.
//! - **[`engine`]**: The individual calculators (weight, extinction, GRAVY,
//!   isoelectric point) with their configuration and error types.
//! - **[`workflows`]**: The public entry points, [`analyze`] for one sequence
//!   and [`workflows::batch::run`] for many.
//!
//! ```
//! let report = protparam::analyze(">demo\nMKWVTFISLL", false).unwrap();
//! assert_eq!(report.length(), 10);
//! assert!(report.isoelectric_point() > 0.0 && report.isoelectric_point() < 14.0);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use engine::error::AnalysisError;
pub use workflows::{PropertyReport, analyze, analyze_with};
