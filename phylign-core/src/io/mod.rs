pub mod linkage;

pub use linkage::{read_linkage, write_linkage};
