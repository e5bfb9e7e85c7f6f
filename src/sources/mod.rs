pub mod csv;
pub mod data_source;
pub mod loader;
pub mod ndjson;
pub mod parquet;

pub use loader::{FrameLoader, LoadMode, LoadOptions, ResolvedSource};
