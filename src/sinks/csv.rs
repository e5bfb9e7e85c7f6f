use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use arrow::{
    array::RecordBatch,
    csv::{Writer, WriterBuilder},
    datatypes::SchemaRef,
};
use async_trait::async_trait;

use crate::{
    inspection::Delimiter,
    sinks::data_sink::{DataSink, SinkResult},
};

/// Delimited text with a header row.
pub struct CsvSink {
    path: PathBuf,
    schema: SchemaRef,
    rows_written: u64,
    batches_written: usize,
    writer: Option<Writer<BufWriter<File>>>,
}

impl CsvSink {
    pub fn create(path: PathBuf, schema: &SchemaRef, delimiter: Delimiter) -> Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let writer = WriterBuilder::new()
            .with_header(true)
            .with_delimiter(delimiter.as_byte())
            .build(BufWriter::new(file));

        Ok(Self {
            path,
            schema: schema.clone(),
            rows_written: 0,
            batches_written: 0,
            writer: Some(writer),
        })
    }

    fn writer(&mut self) -> Result<&mut Writer<BufWriter<File>>> {
        self.writer
            .as_mut()
            .ok_or_else(|| anyhow!("CSV sink for {} is already finished", self.path.display()))
    }
}

#[async_trait]
impl DataSink for CsvSink {
    async fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        self.writer()?.write(&batch)?;
        self.rows_written += batch.num_rows() as u64;
        self.batches_written += 1;
        Ok(())
    }

    async fn finish(&mut self) -> Result<SinkResult> {
        // the header is emitted with the first batch
        if self.batches_written == 0 {
            let empty = RecordBatch::new_empty(self.schema.clone());
            self.writer()?.write(&empty)?;
        }

        let writer = self
            .writer
            .take()
            .ok_or_else(|| anyhow!("CSV sink for {} is already finished", self.path.display()))?;
        writer.into_inner().flush()?;

        Ok(SinkResult {
            path: self.path.clone(),
            rows_written: self.rows_written,
        })
    }
}
