/// Gap placeholder inserted into aligned rows.
pub const GAP: u8 = b'-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapModel {
    /// Needleman-Wunsch: one flat penalty per inserted/deleted symbol, similarity maximized.
    Linear,
    /// Waterman-Smith-Beyer: gap of length k costs open + k * extend, cost minimized.
    Affine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringScheme {
    pub model: GapModel,
    pub match_score: i32,
    pub mismatch_score: i32,
    /// Unused under `GapModel::Linear`.
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl ScoringScheme {
    pub fn linear(match_score: i32, mismatch_score: i32, gap_extend: i32) -> Self {
        Self {
            model: GapModel::Linear,
            match_score,
            mismatch_score,
            gap_open: 0,
            gap_extend,
        }
    }

    pub fn affine(match_score: i32, mismatch_score: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            model: GapModel::Affine,
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        }
    }

    /// Similarity defaults for linear-gap alignment: match 1, mismatch -1, gap -1.
    pub fn linear_default() -> Self {
        Self::linear(1, -1, -1)
    }

    /// Cost defaults used for evolutionary-distance estimation:
    /// match 0, mismatch 3, gap open 10, gap extend 1.
    pub fn distance_default() -> Self {
        Self::affine(0, 3, 10, 1)
    }

    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// One optimal global alignment: two equal-length gap-padded rows plus the DP score.
///
/// Multiple optimal alignments may exist; the engine picks one deterministically
/// (tie-break Diag > Up > Left per cell).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub seq1: Vec<u8>,
    pub seq2: Vec<u8>,
    pub score: i32,
}

impl Alignment {
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }

    /// Total gap symbols across both rows.
    pub fn gap_count(&self) -> usize {
        memchr::memchr_iter(GAP, &self.seq1).count() + memchr::memchr_iter(GAP, &self.seq2).count()
    }

    /// Fraction of columns where the two rows carry the same symbol.
    pub fn identity(&self) -> f64 {
        if self.seq1.is_empty() {
            return 0.0;
        }
        let matches = self
            .seq1
            .iter()
            .zip(&self.seq2)
            .filter(|(a, b)| a == b)
            .count();
        matches as f64 / self.seq1.len() as f64
    }
}
