pub mod columns;
pub mod convert;
pub mod info;
pub mod preview;
pub mod sample;
pub mod schema;
pub mod stats;
