pub mod builder;
pub mod cache;
pub mod mining;

pub use builder::{build_conditional_tree, build_fp_tree};
pub use cache::TreeCache;
pub use mining::{fp_growth, SupportThreshold};
