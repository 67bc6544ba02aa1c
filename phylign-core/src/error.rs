use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhyloError {
    #[error("aligned sequences have unequal lengths ({len1} vs {len2})")]
    LengthMismatch { len1: usize, len2: usize },

    #[error("cannot estimate a distance over zero aligned positions")]
    EmptySequence,

    #[error("jukes-cantor undefined at mismatch rate {p} (requires p < 0.75)")]
    SaturatedDistance { p: f64 },

    #[error("distance matrix data length {len} does not match {n}x{n}")]
    MatrixNotSquare { len: usize, n: usize },

    #[error("distance matrix row {row} has {len} entries (expected {expected})")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance matrix asymmetric at ({i},{j}): {forward} vs {reverse}")]
    AsymmetricMatrix {
        i: usize,
        j: usize,
        forward: f64,
        reverse: f64,
    },

    #[error("clustering requires at least 2 taxa, got {n}")]
    TooFewTaxa { n: usize },

    #[error("label count mismatch (labels={labels}, taxa={taxa})")]
    LabelCountMismatch { labels: usize, taxa: usize },

    #[error("linkage csv error: {0}")]
    LinkageCsv(#[from] csv::Error),

    #[error("linkage io error: {0}")]
    LinkageIo(#[from] io::Error),

    #[error("linkage table row {row}: missing or invalid field '{field}'")]
    LinkageField { row: usize, field: &'static str },
}

pub type PhyloResult<T> = Result<T, PhyloError>;
