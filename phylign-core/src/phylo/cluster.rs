//! Agglomerative and additive tree building over a distance matrix.
//!
//! All three algorithms share one shrink protocol: pick a pair (k, l) of live
//! clusters, record the merged node, then rebuild the working matrix one
//! dimension smaller with rows/columns k and l replaced by a single merged
//! row. Only the pair-selection rule, the merged-distance formula, and the
//! branch metadata differ per algorithm.

use crate::error::{PhyloError, PhyloResult};

use super::distance::DistanceMatrix;
use super::linkage::{linkage, LinkageRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterMethod {
    Wpgma,
    Upgma,
    NeighborJoining,
}

/// Arena node: leaves occupy ids 0..n-1 in taxon order; internal nodes are
/// appended in merge order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterNode {
    Leaf {
        taxon: usize,
        label: Box<str>,
    },
    Internal {
        left: usize,
        right: usize,
        height: f64,
        left_branch: f64,
        right_branch: f64,
        size: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterTree {
    nodes: Vec<ClusterNode>,
    root: usize,
}

impl ClusterTree {
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn node(&self, id: usize) -> &ClusterNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, ClusterNode::Leaf { .. }))
            .count()
    }

    pub fn num_internal(&self) -> usize {
        self.nodes.len() - self.num_leaves()
    }

    pub fn leaf_labels(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                ClusterNode::Leaf { label, .. } => Some(label.to_string()),
                ClusterNode::Internal { .. } => None,
            })
            .collect()
    }
}

/// The `cluster` return triple: tree, renderer-ready linkage table, labels.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub tree: ClusterTree,
    pub linkage: Vec<LinkageRow>,
    pub labels: Vec<Box<str>>,
}

pub fn cluster(
    dist: &DistanceMatrix,
    labels: &[&str],
    method: ClusterMethod,
) -> PhyloResult<Clustering> {
    let tree = match method {
        ClusterMethod::Wpgma => wpgma(dist, labels)?,
        ClusterMethod::Upgma => upgma(dist, labels)?,
        ClusterMethod::NeighborJoining => neighbor_joining(dist, labels)?,
    };
    let rows = linkage(&tree);
    Ok(Clustering {
        tree,
        linkage: rows,
        labels: labels.iter().map(|&s| s.into()).collect(),
    })
}

fn validate(dist: &DistanceMatrix, labels: &[&str]) -> PhyloResult<()> {
    let n = dist.n();
    if n < 2 {
        return Err(PhyloError::TooFewTaxa { n });
    }
    if labels.len() != n {
        return Err(PhyloError::LabelCountMismatch {
            labels: labels.len(),
            taxa: n,
        });
    }
    dist.check_symmetric()
}

fn leaf_arena(labels: &[&str]) -> Vec<ClusterNode> {
    labels
        .iter()
        .enumerate()
        .map(|(taxon, &label)| ClusterNode::Leaf {
            taxon,
            label: label.into(),
        })
        .collect()
}

fn node_height(nodes: &[ClusterNode], id: usize) -> f64 {
    match &nodes[id] {
        ClusterNode::Leaf { .. } => 0.0,
        ClusterNode::Internal { height, .. } => *height,
    }
}

fn node_size(nodes: &[ClusterNode], id: usize) -> usize {
    match &nodes[id] {
        ClusterNode::Leaf { .. } => 1,
        ClusterNode::Internal { size, .. } => *size,
    }
}

/// Globally smallest off-diagonal entry of a flat m x m matrix, row-major
/// scan with j > i; strict `<` keeps the first of equal candidates.
fn min_pair(d: &[f64], m: usize) -> (usize, usize) {
    let mut best = f64::INFINITY;
    let mut pair = (0, 1);
    for i in 0..m {
        for j in (i + 1)..m {
            if d[i * m + j] < best {
                best = d[i * m + j];
                pair = (i, j);
            }
        }
    }
    pair
}

/// Rebuild an m x m working matrix without rows/columns k and l, appending
/// one merged row/column whose entries come from `merged(i)` for each
/// surviving old index i. Fresh (m-1) x (m-1) allocation; the input is left
/// untouched.
fn shrink(d: &[f64], m: usize, k: usize, l: usize, merged: impl Fn(usize) -> f64) -> Vec<f64> {
    let keep: Vec<usize> = (0..m).filter(|&i| i != k && i != l).collect();
    let r = m - 1;
    let mut out = vec![0.0f64; r * r];
    for (a, &i) in keep.iter().enumerate() {
        for (b, &j) in keep.iter().enumerate() {
            out[a * r + b] = d[i * m + j];
        }
        let v = merged(i);
        out[a * r + (r - 1)] = v;
        out[(r - 1) * r + a] = v;
    }
    out
}

fn drop_merged(live: &[usize], k: usize, l: usize, new_id: usize) -> Vec<usize> {
    let mut next: Vec<usize> = live
        .iter()
        .enumerate()
        .filter(|&(pos, _)| pos != k && pos != l)
        .map(|(_, &id)| id)
        .collect();
    next.push(new_id);
    next
}

/// WPGMA when `weighted` is false (plain average of the two child rows),
/// UPGMA when true (average weighted by cumulative member counts).
fn agglomerative(
    dist: &DistanceMatrix,
    labels: &[&str],
    weighted: bool,
) -> PhyloResult<ClusterTree> {
    validate(dist, labels)?;
    let n = dist.n();
    let mut nodes = leaf_arena(labels);
    let mut d = dist.data().to_vec();
    let mut live: Vec<usize> = (0..n).collect();

    while live.len() > 1 {
        let m = live.len();
        let (k, l) = min_pair(&d, m);
        let dkl = d[k * m + l];
        let height = dkl / 2.0;
        let (id_k, id_l) = (live[k], live[l]);
        let (size_k, size_l) = (node_size(&nodes, id_k), node_size(&nodes, id_l));

        let next = shrink(&d, m, k, l, |i| {
            if weighted {
                (size_k as f64 * d[i * m + k] + size_l as f64 * d[i * m + l])
                    / (size_k + size_l) as f64
            } else {
                (d[i * m + k] + d[i * m + l]) / 2.0
            }
        });

        let new_id = nodes.len();
        nodes.push(ClusterNode::Internal {
            left: id_k,
            right: id_l,
            height,
            left_branch: height - node_height(&nodes, id_k),
            right_branch: height - node_height(&nodes, id_l),
            size: size_k + size_l,
        });
        live = drop_merged(&live, k, l, new_id);
        d = next;
    }

    let root = live[0];
    Ok(ClusterTree { nodes, root })
}

pub fn wpgma(dist: &DistanceMatrix, labels: &[&str]) -> PhyloResult<ClusterTree> {
    agglomerative(dist, labels, false)
}

pub fn upgma(dist: &DistanceMatrix, labels: &[&str]) -> PhyloResult<ClusterTree> {
    agglomerative(dist, labels, true)
}

pub fn neighbor_joining(dist: &DistanceMatrix, labels: &[&str]) -> PhyloResult<ClusterTree> {
    validate(dist, labels)?;
    let n = dist.n();
    let mut nodes = leaf_arena(labels);
    let mut d = dist.data().to_vec();
    let mut live: Vec<usize> = (0..n).collect();

    while live.len() > 2 {
        let m = live.len();
        let mf = m as f64;

        // Divergence vector: per-cluster row sums.
        let r: Vec<f64> = (0..m)
            .map(|i| (0..m).map(|j| d[i * m + j]).sum())
            .collect();

        // Pick the pair minimizing Q, same scan discipline as min_pair.
        let mut best_q = f64::INFINITY;
        let (mut k, mut l) = (0, 1);
        for i in 0..m {
            for j in (i + 1)..m {
                let q = (mf - 2.0) * d[i * m + j] - r[i] - r[j];
                if q < best_q {
                    best_q = q;
                    k = i;
                    l = j;
                }
            }
        }

        let dkl = d[k * m + l];
        let k_branch = 0.5 * (dkl + (r[k] - r[l]) / (mf - 2.0));
        let l_branch = dkl - k_branch;
        let (id_k, id_l) = (live[k], live[l]);

        let next = shrink(&d, m, k, l, |i| (d[i * m + k] + d[i * m + l] - dkl) / 2.0);

        let new_id = nodes.len();
        nodes.push(ClusterNode::Internal {
            left: id_k,
            right: id_l,
            height: dkl / 2.0,
            left_branch: k_branch,
            right_branch: l_branch,
            size: node_size(&nodes, id_k) + node_size(&nodes, id_l),
        });
        live = drop_merged(&live, k, l, new_id);
        d = next;
    }

    // Final join: the last two clusters split their mutual distance in half.
    let dab = d[1];
    let (id_a, id_b) = (live[0], live[1]);
    let root = nodes.len();
    nodes.push(ClusterNode::Internal {
        left: id_a,
        right: id_b,
        height: dab / 2.0,
        left_branch: dab / 2.0,
        right_branch: dab / 2.0,
        size: node_size(&nodes, id_a) + node_size(&nodes, id_b),
    });

    Ok(ClusterTree { nodes, root })
}
