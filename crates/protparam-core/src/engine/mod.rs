//! # Engine Module
//!
//! The calculators that turn a [`Composition`](crate::core::composition::Composition)
//! into physical properties, plus the configuration and error types they share.
//!
//! - [`weight`] - Molecular weight from residue masses
//! - [`extinction`] - Molar extinction coefficients at 280 nm
//! - [`gravy`] - Grand average of hydropathy
//! - [`isoelectric`] - Net-charge model and isoelectric point bisection
//! - [`config`] - Analysis options and their builder
//! - [`progress`] - Batch progress events
//! - [`error`] - The [`error::AnalysisError`] returned by every workflow

pub mod config;
pub mod error;
pub mod extinction;
pub mod gravy;
pub mod isoelectric;
pub mod progress;
pub mod weight;
