use super::cluster::{ClusterNode, ClusterTree};

pub fn to_newick(tree: &ClusterTree) -> String {
    let mut s = String::new();
    write_subtree(tree, tree.root(), &mut s);
    s.push(';');
    s
}

fn needs_quoting(label: &str) -> bool {
    label.chars().any(|ch| {
        ch.is_whitespace() || matches!(ch, ':' | ',' | '(' | ')' | ';' | '[' | ']' | '\'')
    })
}

fn write_label(out: &mut String, label: &str) {
    if label.is_empty() {
        return;
    }
    if needs_quoting(label) {
        out.push('\'');
        for ch in label.chars() {
            if ch == '\'' {
                out.push_str("''");
            } else {
                out.push(ch);
            }
        }
        out.push('\'');
    } else {
        out.push_str(label);
    }
}

fn write_subtree(tree: &ClusterTree, id: usize, out: &mut String) {
    match tree.node(id) {
        ClusterNode::Leaf { label, .. } => write_label(out, label),
        ClusterNode::Internal {
            left,
            right,
            left_branch,
            right_branch,
            ..
        } => {
            out.push('(');
            write_subtree(tree, *left, out);
            out.push_str(&format!(":{:.5}", left_branch));
            out.push(',');
            write_subtree(tree, *right, out);
            out.push_str(&format!(":{:.5}", right_branch));
            out.push(')');
        }
    }
}
