use crate::align::{align, ScoringScheme};
use crate::error::{PhyloError, PhyloResult};

/// Symmetric n x n distance matrix with zero diagonal, flat row-major.
/// Labels live with the caller; clustering receives them separately.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    pub fn new(n: usize, data: Vec<f64>) -> PhyloResult<Self> {
        if data.len() != n * n {
            return Err(PhyloError::MatrixNotSquare {
                len: data.len(),
                n,
            });
        }
        Ok(Self { data, n })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> PhyloResult<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(PhyloError::RaggedMatrix {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self { data, n })
    }

    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![0.0; n * n],
            n,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Mirrored write: sets both [i,j] and [j,i].
    pub fn set(&mut self, i: usize, j: usize, val: f64) {
        self.data[i * self.n + j] = val;
        self.data[j * self.n + i] = val;
    }

    pub(crate) fn check_symmetric(&self) -> PhyloResult<()> {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let forward = self.get(i, j);
                let reverse = self.get(j, i);
                if forward != reverse {
                    return Err(PhyloError::AsymmetricMatrix {
                        i,
                        j,
                        forward,
                        reverse,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Raw mismatch rate between two already-aligned (equal-length, gap-padded)
/// rows: differing positions / length. Gap columns count like any other
/// symbol comparison.
pub fn p_distance(a: &[u8], b: &[u8]) -> PhyloResult<f64> {
    if a.len() != b.len() {
        return Err(PhyloError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }
    if a.is_empty() {
        return Err(PhyloError::EmptySequence);
    }
    let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
    Ok(mismatches as f64 / a.len() as f64)
}

/// Jukes-Cantor correction of a raw mismatch rate. Exactly 0 for p <= 0
/// (avoids the negative-zero artifact of the ln formula); undefined for
/// p >= 0.75 where the ln argument drops to zero or below.
pub fn jukes_cantor(p: f64) -> PhyloResult<f64> {
    if p >= 0.75 {
        return Err(PhyloError::SaturatedDistance { p });
    }
    if p <= 0.0 {
        return Ok(0.0);
    }
    Ok(-0.75 * (1.0 - 4.0 * p / 3.0).ln())
}

fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

/// Evolutionary distance between two raw sequences: align, take the mismatch
/// rate of the aligned rows, apply Jukes-Cantor, round to 5 decimals for
/// reproducibility.
pub fn pair_distance(raw1: &[u8], raw2: &[u8], scheme: &ScoringScheme) -> PhyloResult<f64> {
    let aln = align(raw1, raw2, scheme);
    let p = p_distance(&aln.seq1, &aln.seq2)?;
    Ok(round5(jukes_cantor(p)?))
}

/// All-pairs distance matrix under the distance-estimation scoring defaults.
pub fn distance_matrix(seqs: &[&[u8]]) -> PhyloResult<DistanceMatrix> {
    distance_matrix_with(seqs, &ScoringScheme::distance_default())
}

pub fn distance_matrix_with(seqs: &[&[u8]], scheme: &ScoringScheme) -> PhyloResult<DistanceMatrix> {
    let n = seqs.len();

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let results: PhyloResult<Vec<(usize, usize, f64)>> = par_try_map!(&pairs, |&(i, j)| {
        pair_distance(seqs[i], seqs[j], scheme).map(|d| (i, j, d))
    });

    // Index-addressed assembly: completion order cannot affect the values.
    let mut data = vec![0.0f64; n * n];
    for (i, j, d) in results? {
        data[i * n + j] = d;
        data[j * n + i] = d;
    }

    DistanceMatrix::new(n, data)
}
