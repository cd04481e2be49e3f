// Tree module - FP-Tree data structures and operations

mod tree;
mod tree_ops;

// Re-export the main types
pub use tree::{AttributeNodes, FPNode, FPTree, ROOT_NODE_ID};
