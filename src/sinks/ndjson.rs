use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use arrow::{array::RecordBatch, json::LineDelimitedWriter};
use async_trait::async_trait;

use crate::sinks::data_sink::{DataSink, SinkResult};

/// One JSON object per row, one row per line.
pub struct NdjsonSink {
    path: PathBuf,
    rows_written: u64,
    writer: Option<LineDelimitedWriter<BufWriter<File>>>,
}

impl NdjsonSink {
    pub fn create(path: PathBuf) -> Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(Self {
            path,
            rows_written: 0,
            writer: Some(LineDelimitedWriter::new(BufWriter::new(file))),
        })
    }
}

#[async_trait]
impl DataSink for NdjsonSink {
    async fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| anyhow!("NDJSON sink for {} is already finished", self.path.display()))?;
        writer.write(&batch)?;
        self.rows_written += batch.num_rows() as u64;
        Ok(())
    }

    async fn finish(&mut self) -> Result<SinkResult> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| anyhow!("NDJSON sink for {} is already finished", self.path.display()))?;
        writer.finish()?;
        writer.into_inner().flush()?;

        Ok(SinkResult {
            path: self.path.clone(),
            rows_written: self.rows_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::test_data;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_one_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ndjson");
        let schema = test_data::people_schema();

        let mut sink = NdjsonSink::create(path.clone()).unwrap();
        sink.write_batch(test_data::people_batch(&schema, 0, 2))
            .await
            .unwrap();
        let result = sink.finish().await.unwrap();
        assert_eq!(result.rows_written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        // null values are omitted from the object
        assert_eq!(lines[0], r#"{"id":0,"name":"person_0"}"#);
        assert_eq!(lines[1], r#"{"id":1,"name":"person_1","score":1.5}"#);
    }

    #[tokio::test]
    async fn test_create_fails_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ndjson");
        let err = NdjsonSink::create(path).err().unwrap();
        assert!(err.to_string().contains("Failed to create"));
    }
}
