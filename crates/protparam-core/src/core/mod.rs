//! # Core Module
//!
//! Stateless data models and constant tables shared by every calculation.
//!
//! - [`amino_acid`] - The 20-letter standard alphabet and residue metadata
//! - [`sequence`] - Normalization of raw text into a validated [`sequence::Sequence`]
//! - [`composition`] - Per-residue occurrence counts and fractions
//! - [`tables`] - Residue masses, hydropathy indices, and 280 nm absorptivities
//! - [`pka`] - pKa scales for ionizable groups, built-in or loaded from TOML

pub mod amino_acid;
pub mod composition;
pub mod pka;
pub mod sequence;
pub mod tables;
