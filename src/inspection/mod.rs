//! Format detection, delimiter sniffing and text rendering.

pub mod cell;
pub mod delimiter;
pub mod format;
pub mod kind;
pub mod report;
pub mod style;
pub mod table;

pub use delimiter::{Delimiter, sniff_delimiter};
pub use format::{Format, detect_format};
pub use kind::ColumnKind;
pub use report::report;
pub use style::{Console, NoticeLevel};
pub use table::TableRenderer;
