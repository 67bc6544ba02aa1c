use super::matrix::{Direction, ScoreMatrix};
use super::types::ScoringScheme;

/// Per-cell scoring contract shared by the two gap-cost models.
pub trait ScoringModel {
    /// Cumulative all-gap score at offset k >= 1 along row 0 / column 0.
    fn boundary(&self, k: usize) -> i32;

    /// Optimal score for cell (i, j) with i, j >= 1, and the neighbor it came from.
    fn score_cell(
        &self,
        scores: &ScoreMatrix,
        seq1: &[u8],
        seq2: &[u8],
        i: usize,
        j: usize,
    ) -> (i32, Direction);
}

/// Needleman-Wunsch recurrence: one penalty per gap symbol, similarity maximized.
pub struct LinearGap {
    scheme: ScoringScheme,
}

impl LinearGap {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }
}

impl ScoringModel for LinearGap {
    fn boundary(&self, k: usize) -> i32 {
        k as i32 * self.scheme.gap_extend
    }

    fn score_cell(
        &self,
        scores: &ScoreMatrix,
        seq1: &[u8],
        seq2: &[u8],
        i: usize,
        j: usize,
    ) -> (i32, Direction) {
        let diag = scores.get(i - 1, j - 1) + self.scheme.substitution(seq1[i - 1], seq2[j - 1]);
        let up = scores.get(i - 1, j) + self.scheme.gap_extend;
        let left = scores.get(i, j - 1) + self.scheme.gap_extend;

        // Tie-breaking policy: Diag > Up > Left (strict comparisons).
        let mut best = diag;
        let mut dir = Direction::Diag;
        if up > best {
            best = up;
            dir = Direction::Up;
        }
        if left > best {
            best = left;
            dir = Direction::Left;
        }
        (best, dir)
    }
}

/// Waterman-Smith-Beyer recurrence: a gap of length k costs open + k * extend,
/// found by scanning every gap length ending at the current cell. Models a
/// cost, so the optimum is the minimum, opposite to `LinearGap`.
pub struct AffineGap {
    scheme: ScoringScheme,
}

impl AffineGap {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }
}

impl ScoringModel for AffineGap {
    fn boundary(&self, k: usize) -> i32 {
        self.scheme.gap_open + k as i32 * self.scheme.gap_extend
    }

    fn score_cell(
        &self,
        scores: &ScoreMatrix,
        seq1: &[u8],
        seq2: &[u8],
        i: usize,
        j: usize,
    ) -> (i32, Direction) {
        let diag = scores.get(i - 1, j - 1) + self.scheme.substitution(seq1[i - 1], seq2[j - 1]);

        let mut up = i32::MAX;
        for k in 1..=i {
            let cand = scores.get(i - k, j) + self.scheme.gap_open + k as i32 * self.scheme.gap_extend;
            if cand < up {
                up = cand;
            }
        }
        let mut left = i32::MAX;
        for k in 1..=j {
            let cand = scores.get(i, j - k) + self.scheme.gap_open + k as i32 * self.scheme.gap_extend;
            if cand < left {
                left = cand;
            }
        }

        // Tie-breaking policy: Diag > Up > Left (strict comparisons).
        let mut best = diag;
        let mut dir = Direction::Diag;
        if up < best {
            best = up;
            dir = Direction::Up;
        }
        if left < best {
            best = left;
            dir = Direction::Left;
        }
        (best, dir)
    }
}
