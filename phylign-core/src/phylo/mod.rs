pub mod cluster;
pub mod distance;
pub mod linkage;
pub mod newick;

pub use cluster::{
    cluster, neighbor_joining, upgma, wpgma, ClusterMethod, ClusterNode, ClusterTree, Clustering,
};
pub use distance::{
    distance_matrix, distance_matrix_with, jukes_cantor, p_distance, pair_distance, DistanceMatrix,
};
pub use linkage::{linkage, LinkageRow};
pub use newick::to_newick;
