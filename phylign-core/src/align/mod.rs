pub mod engine;
pub mod matrix;
pub mod scoring;
pub mod types;

pub use engine::{align, fill_matrices, reconstruct, traceback, DpMatrices};
pub use matrix::{Direction, PathStep, ScoreMatrix, TracebackMatrix};
pub use scoring::{AffineGap, LinearGap, ScoringModel};
pub use types::{Alignment, GapModel, ScoringScheme, GAP};

#[cfg(test)]
mod tests;
