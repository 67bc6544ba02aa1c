use super::cluster::{ClusterNode, ClusterTree};

/// One internal node in dendrogram-renderer order: child ids reference either
/// original taxa (0..n-1) or previously emitted rows (n..).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkageRow {
    pub left: usize,
    pub right: usize,
    pub height: f64,
    pub size: usize,
}

impl LinkageRow {
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.left as f64,
            self.right as f64,
            self.height,
            self.size as f64,
        ]
    }
}

/// Flatten a cluster tree into linkage rows via an iterative post-order
/// traversal. Leaves keep their taxon index; each internal node gets the
/// synthetic id n_taxa + order-of-emission, so children ids always precede
/// their parent's. Emission order is post-order, which can differ from merge
/// order.
pub fn linkage(tree: &ClusterTree) -> Vec<LinkageRow> {
    let n = tree.num_leaves();
    let mut rows = Vec::with_capacity(tree.num_internal());
    // Renderer id per arena node, written before any parent reads it.
    let mut ids = vec![0usize; tree.nodes().len()];
    let mut stack = vec![(tree.root(), false)];

    while let Some((id, visited)) = stack.pop() {
        match tree.node(id) {
            ClusterNode::Leaf { taxon, .. } => ids[id] = *taxon,
            ClusterNode::Internal {
                left,
                right,
                height,
                size,
                ..
            } => {
                if visited {
                    rows.push(LinkageRow {
                        left: ids[*left],
                        right: ids[*right],
                        height: *height,
                        size: *size,
                    });
                    ids[id] = n + rows.len() - 1;
                } else {
                    stack.push((id, true));
                    stack.push((*right, false));
                    stack.push((*left, false));
                }
            }
        }
    }

    rows
}
