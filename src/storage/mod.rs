pub mod cache;

pub use cache::{FileCache, MemoryCache, SnapshotCache};
