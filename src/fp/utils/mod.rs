pub mod storage;

pub use storage::ItemsetStorage;
