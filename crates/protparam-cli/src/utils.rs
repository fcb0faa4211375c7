pub mod fasta;
pub mod input;
pub mod progress;
