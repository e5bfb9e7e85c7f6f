//! File-level facts without materializing the rows.

use std::io::Write;

use anyhow::Result;
use arrow::array::RecordBatch;
use tracing::{debug, warn};

use crate::{
    InfoArgs,
    inspection::{Console, report},
    sources::{FrameLoader, LoadMode, LoadOptions, ResolvedSource},
    utils::filesystem::display_name,
};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Arrow memory held by the column peek, in bytes. `None` when there is
/// nothing to measure.
pub fn column_memory(peek: &[RecordBatch]) -> Option<usize> {
    if peek.is_empty() || peek.iter().all(|b| b.num_columns() == 0) {
        return None;
    }
    Some(peek.iter().map(RecordBatch::get_array_memory_size).sum())
}

pub fn format_memory_estimate(bytes: Option<usize>) -> String {
    match bytes {
        #[allow(clippy::cast_precision_loss)]
        Some(bytes) => format!("{:.2} MiB (columns only)", bytes as f64 / BYTES_PER_MIB),
        None => "--".to_string(),
    }
}

pub async fn run<W: Write>(args: InfoArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let options = LoadOptions::from(&args.source);
    let resolved = ResolvedSource::resolve(path, options.format.as_deref(), options.delimiter);

    let df = FrameLoader::new()
        .load_resolved(path, &resolved, options.infer_limit, LoadMode::Lazy)
        .await?;

    let schema = df.schema().inner().clone();
    let mut peek = df.clone().limit(0, Some(0))?.collect().await?;
    if peek.is_empty() {
        peek.push(RecordBatch::new_empty(schema.clone()));
    }
    let rows = df.count().await?;
    debug!("Counted {rows} rows in {}", path.display());

    let memory = column_memory(&peek);
    if memory.is_none() {
        warn!("Memory estimate unavailable for {}", path.display());
    }

    let delimiter = resolved
        .delimiter
        .map_or_else(|| "—".to_string(), |d| d.to_string());
    report(
        console,
        "Info",
        [
            ("file", display_name(path)),
            ("format", resolved.format.to_string()),
            ("delimiter", delimiter),
            ("rows", rows.to_string()),
            ("columns", schema.fields().len().to_string()),
            ("mem_est", format_memory_estimate(memory)),
        ],
    )
}
