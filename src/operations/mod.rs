pub mod data_operation;
pub mod null_count;
pub mod sample;
pub mod select;
pub mod summary;
pub mod top_values;

pub use data_operation::DataOperation;
