use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use arrow::{array::RecordBatch, datatypes::SchemaRef};
use async_trait::async_trait;
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};

use crate::sinks::data_sink::{DataSink, SinkResult};

pub const DEFAULT_MAX_ROW_GROUP_SIZE: usize = 1_048_576;

pub struct ParquetSinkOptions {
    /// Rows per row group.
    pub max_row_group_size: usize,
    pub compression: Compression,
}

impl Default for ParquetSinkOptions {
    fn default() -> Self {
        Self {
            max_row_group_size: DEFAULT_MAX_ROW_GROUP_SIZE,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetSinkOptions {
    pub fn with_max_row_group_size(mut self, max_row_group_size: usize) -> Self {
        self.max_row_group_size = max_row_group_size;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

pub struct ParquetSink {
    path: PathBuf,
    rows_written: u64,
    writer: Option<ArrowWriter<File>>,
}

impl ParquetSink {
    pub fn create(path: PathBuf, schema: &SchemaRef, options: ParquetSinkOptions) -> Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let props = WriterProperties::builder()
            .set_max_row_group_size(options.max_row_group_size)
            .set_compression(options.compression)
            .build();
        let writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

        Ok(Self {
            path,
            rows_written: 0,
            writer: Some(writer),
        })
    }
}

#[async_trait]
impl DataSink for ParquetSink {
    async fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            anyhow!("Parquet sink for {} is already finished", self.path.display())
        })?;
        writer.write(&batch)?;
        self.rows_written += batch.num_rows() as u64;
        Ok(())
    }

    async fn finish(&mut self) -> Result<SinkResult> {
        let writer = self.writer.take().ok_or_else(|| {
            anyhow!("Parquet sink for {} is already finished", self.path.display())
        })?;
        writer.close()?;

        Ok(SinkResult {
            path: self.path.clone(),
            rows_written: self.rows_written,
        })
    }
}
