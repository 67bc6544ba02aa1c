//! DP matrix fill, traceback, and alignment reconstruction.
//!
//! i indexes seq1 (rows), j indexes seq2 (columns). Cells fill row by row,
//! left to right; row i reads only row i-1 and the already-computed cells of
//! row i (the affine model additionally reads the whole column/row ray above
//! and left of the cell).

use super::matrix::{Direction, PathStep, ScoreMatrix, TracebackMatrix};
use super::scoring::{AffineGap, LinearGap, ScoringModel};
use super::types::{Alignment, GapModel, ScoringScheme, GAP};

#[derive(Clone, Debug)]
pub struct DpMatrices {
    pub scores: ScoreMatrix,
    pub trace: TracebackMatrix,
}

/// Build the full (n+1) x (m+1) score and traceback matrices.
pub fn fill_matrices(seq1: &[u8], seq2: &[u8], scheme: &ScoringScheme) -> DpMatrices {
    match scheme.model {
        GapModel::Linear => fill_with(&LinearGap::new(*scheme), seq1, seq2),
        GapModel::Affine => fill_with(&AffineGap::new(*scheme), seq1, seq2),
    }
}

fn fill_with<M: ScoringModel>(model: &M, seq1: &[u8], seq2: &[u8]) -> DpMatrices {
    let n = seq1.len();
    let m = seq2.len();
    let mut scores = ScoreMatrix::new(n + 1, m + 1);
    let mut trace = TracebackMatrix::new(n + 1, m + 1);

    // [0,0] stays 0 / Stop; the edges follow the cumulative gap rule.
    for j in 1..=m {
        scores.set(0, j, model.boundary(j));
        trace.set(0, j, Direction::Left);
    }
    for i in 1..=n {
        scores.set(i, 0, model.boundary(i));
        trace.set(i, 0, Direction::Up);
    }

    for i in 1..=n {
        for j in 1..=m {
            let (score, dir) = model.score_cell(&scores, seq1, seq2, i, j);
            scores.set(i, j, score);
            trace.set(i, j, dir);
        }
    }

    DpMatrices { scores, trace }
}

/// Walk the stored markers from the bottom-right cell to the `Stop` at (0,0).
/// The path is returned origin-first and includes both endpoints.
pub fn traceback(trace: &TracebackMatrix) -> Vec<PathStep> {
    let mut i = trace.rows() - 1;
    let mut j = trace.cols() - 1;
    let mut path = Vec::with_capacity(i + j + 1);

    loop {
        let dir = trace.get(i, j);
        path.push(PathStep { row: i, col: j, dir });
        match dir {
            Direction::Stop => break,
            Direction::Diag => {
                i -= 1;
                j -= 1;
            }
            Direction::Up => i -= 1,
            Direction::Left => j -= 1,
        }
    }

    path.reverse();
    path
}

/// Emit the aligned rows by walking the path origin to end: Diag pairs two
/// symbols, Up pairs a seq1 symbol with a gap, Left a gap with a seq2 symbol.
pub fn reconstruct(path: &[PathStep], seq1: &[u8], seq2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let cols = path.len().saturating_sub(1);
    let mut out1 = Vec::with_capacity(cols);
    let mut out2 = Vec::with_capacity(cols);

    for step in path.iter().skip(1) {
        match step.dir {
            Direction::Diag => {
                out1.push(seq1[step.row - 1]);
                out2.push(seq2[step.col - 1]);
            }
            Direction::Up => {
                out1.push(seq1[step.row - 1]);
                out2.push(GAP);
            }
            Direction::Left => {
                out1.push(GAP);
                out2.push(seq2[step.col - 1]);
            }
            Direction::Stop => {}
        }
    }

    (out1, out2)
}

/// One optimal global alignment of two raw sequences under `scheme`.
/// Either sequence may be empty; the result degenerates to an all-gap row
/// against the other sequence.
pub fn align(seq1: &[u8], seq2: &[u8], scheme: &ScoringScheme) -> Alignment {
    let dp = fill_matrices(seq1, seq2, scheme);
    let score = dp.scores.get(seq1.len(), seq2.len());
    let path = traceback(&dp.trace);
    let (aligned1, aligned2) = reconstruct(&path, seq1, seq2);
    Alignment {
        seq1: aligned1,
        seq2: aligned2,
        score,
    }
}
