use super::*;

use proptest::prelude::*;

fn ungapped(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&b| b != GAP).collect()
}

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..max_len,
    )
}

// ─── boundary fill ──────────────────────────────────────────

#[test]
fn linear_top_row_cumulative_gap() {
    let dp = fill_matrices(b"ACG", b"ACGT", &ScoringScheme::linear_default());
    assert_eq!(dp.scores.row(0), &[0, -1, -2, -3, -4]);
    assert_eq!(dp.trace.get(0, 0), Direction::Stop);
    for j in 1..=4 {
        assert_eq!(dp.trace.get(0, j), Direction::Left);
    }
    for i in 1..=3 {
        assert_eq!(dp.scores.get(i, 0), -(i as i32));
        assert_eq!(dp.trace.get(i, 0), Direction::Up);
    }
}

#[test]
fn affine_boundary_open_plus_extend() {
    let dp = fill_matrices(b"AC", b"ACGT", &ScoringScheme::distance_default());
    assert_eq!(dp.scores.row(0), &[0, 11, 12, 13, 14]);
    assert_eq!(dp.scores.get(1, 0), 11);
    assert_eq!(dp.scores.get(2, 0), 12);
}

#[test]
fn matrices_share_dimensions() {
    let dp = fill_matrices(b"ACGTA", b"AC", &ScoringScheme::linear_default());
    assert_eq!(dp.scores.rows(), 6);
    assert_eq!(dp.scores.cols(), 3);
    assert_eq!(dp.trace.rows(), 6);
    assert_eq!(dp.trace.cols(), 3);
}

// ─── Needleman-Wunsch worked example ────────────────────────

#[test]
fn needleman_wunsch_gattaca() {
    // Classic worked example: match 1, mismatch -1, gap -1.
    let dp = fill_matrices(b"gattaca", b"gcatgcu", &ScoringScheme::linear_default());
    assert_eq!(dp.scores.get(7, 7), 0);
    assert_eq!(dp.scores.row(0), &[0, -1, -2, -3, -4, -5, -6, -7]);
    assert_eq!(dp.scores.row(1), &[-1, 1, 0, -1, -2, -3, -4, -5]);
    assert_eq!(dp.scores.row(2), &[-2, 0, 0, 1, 0, -1, -2, -3]);
    assert_eq!(dp.scores.row(3), &[-3, -1, -1, 0, 2, 1, 0, -1]);
    assert_eq!(dp.scores.row(7), &[-7, -5, -3, -1, -2, -2, 0, 0]);
}

#[test]
fn needleman_wunsch_gattaca_alignment() {
    let aln = align(b"gattaca", b"gcatgcu", &ScoringScheme::linear_default());
    assert_eq!(aln.score, 0);
    assert_eq!(aln.seq1, b"g-attaca");
    assert_eq!(aln.seq2, b"gca-tgcu");
}

#[test]
fn linear_identical_sequences() {
    let aln = align(b"ACGT", b"ACGT", &ScoringScheme::linear_default());
    assert_eq!(aln.score, 4);
    assert_eq!(aln.seq1, b"ACGT");
    assert_eq!(aln.seq2, b"ACGT");
    assert_eq!(aln.gap_count(), 0);
    assert_eq!(aln.identity(), 1.0);
}

// ─── affine gap model ───────────────────────────────────────

#[test]
fn affine_identical_sequences_cost_zero() {
    let aln = align(b"ACGT", b"ACGT", &ScoringScheme::distance_default());
    assert_eq!(aln.score, 0);
    assert_eq!(aln.seq1, b"ACGT");
    assert_eq!(aln.seq2, b"ACGT");
}

#[test]
fn affine_single_gap_block() {
    // One gap of length 3 costs open + 3*extend = 13; any split into shorter
    // blocks pays the opening cost again and loses.
    let aln = align(b"ATTTA", b"AA", &ScoringScheme::distance_default());
    assert_eq!(aln.score, 13);
    assert_eq!(aln.seq1, b"ATTTA");
    assert_eq!(aln.seq2, b"A---A");
}

#[test]
fn affine_mismatch_cost() {
    // No gaps: one mismatch at cost 3 beats any gap arrangement.
    let aln = align(b"AAAA", b"AAAT", &ScoringScheme::distance_default());
    assert_eq!(aln.score, 3);
    assert_eq!(aln.seq1, b"AAAA");
    assert_eq!(aln.seq2, b"AAAT");
}

// ─── tie-break policy ───────────────────────────────────────

#[test]
fn linear_tie_prefers_diag() {
    // All three candidates equal 1: diag = 0 + match(1), up/left = 2 - 1.
    let model = LinearGap::new(ScoringScheme::linear_default());
    let mut scores = ScoreMatrix::new(2, 2);
    scores.set(0, 1, 2);
    scores.set(1, 0, 2);
    let (best, dir) = model.score_cell(&scores, b"A", b"A", 1, 1);
    assert_eq!(best, 1);
    assert_eq!(dir, Direction::Diag);
}

#[test]
fn linear_tie_prefers_up_over_left() {
    // Diag loses (-5), up and left tie at -1.
    let model = LinearGap::new(ScoringScheme::linear(1, -5, -1));
    let scores = ScoreMatrix::new(2, 2);
    let (best, dir) = model.score_cell(&scores, b"A", b"C", 1, 1);
    assert_eq!(best, -1);
    assert_eq!(dir, Direction::Up);
}

#[test]
fn affine_tie_prefers_diag() {
    // Diag = 0 + match(0); up = left = 0 + open(0) + extend(0).
    let model = AffineGap::new(ScoringScheme::affine(0, 3, 0, 0));
    let scores = ScoreMatrix::new(2, 2);
    let (best, dir) = model.score_cell(&scores, b"A", b"A", 1, 1);
    assert_eq!(best, 0);
    assert_eq!(dir, Direction::Diag);
}

// ─── traceback path ─────────────────────────────────────────

#[test]
fn traceback_origin_first_with_endpoints() {
    let dp = fill_matrices(b"AC", b"AC", &ScoringScheme::linear_default());
    let path = traceback(&dp.trace);
    assert_eq!(path.len(), 3);
    assert_eq!(path[0].row, 0);
    assert_eq!(path[0].col, 0);
    assert_eq!(path[0].dir, Direction::Stop);
    assert_eq!(path[2].row, 2);
    assert_eq!(path[2].col, 2);
}

#[test]
fn reconstruct_length_is_path_minus_one() {
    let seq1 = b"ACGTAC";
    let seq2 = b"AGTC";
    let dp = fill_matrices(seq1, seq2, &ScoringScheme::linear_default());
    let path = traceback(&dp.trace);
    let (a1, a2) = reconstruct(&path, seq1, seq2);
    assert_eq!(a1.len(), path.len() - 1);
    assert_eq!(a2.len(), path.len() - 1);
}

// ─── degenerate inputs ──────────────────────────────────────

#[test]
fn empty_vs_nonempty_linear() {
    let aln = align(b"", b"ACGT", &ScoringScheme::linear_default());
    assert_eq!(aln.seq1, b"----");
    assert_eq!(aln.seq2, b"ACGT");
    assert_eq!(aln.score, -4);
}

#[test]
fn nonempty_vs_empty_affine() {
    let aln = align(b"ACGT", b"", &ScoringScheme::distance_default());
    assert_eq!(aln.seq1, b"ACGT");
    assert_eq!(aln.seq2, b"----");
    assert_eq!(aln.score, 14);
}

#[test]
fn both_empty() {
    let aln = align(b"", b"", &ScoringScheme::linear_default());
    assert!(aln.is_empty());
    assert_eq!(aln.score, 0);
    let dp = fill_matrices(b"", b"", &ScoringScheme::linear_default());
    let path = traceback(&dp.trace);
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].dir, Direction::Stop);
}

// ─── properties ─────────────────────────────────────────────

proptest! {
    #[test]
    fn ungap_roundtrip_linear(s1 in dna(12), s2 in dna(12)) {
        let aln = align(&s1, &s2, &ScoringScheme::linear_default());
        prop_assert_eq!(aln.seq1.len(), aln.seq2.len());
        prop_assert!(aln.len() >= s1.len().max(s2.len()));
        prop_assert_eq!(ungapped(&aln.seq1), s1);
        prop_assert_eq!(ungapped(&aln.seq2), s2);
    }

    #[test]
    fn ungap_roundtrip_affine(s1 in dna(10), s2 in dna(10)) {
        let aln = align(&s1, &s2, &ScoringScheme::distance_default());
        prop_assert_eq!(aln.seq1.len(), aln.seq2.len());
        prop_assert!(aln.len() >= s1.len().max(s2.len()));
        prop_assert_eq!(ungapped(&aln.seq1), s1);
        prop_assert_eq!(ungapped(&aln.seq2), s2);
    }

    #[test]
    fn align_is_deterministic(s1 in dna(10), s2 in dna(10)) {
        let a = align(&s1, &s2, &ScoringScheme::linear_default());
        let b = align(&s1, &s2, &ScoringScheme::linear_default());
        prop_assert_eq!(a, b);
    }
}
