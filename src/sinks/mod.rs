pub mod csv;
pub mod data_sink;
pub mod ndjson;
pub mod parquet;

use std::path::PathBuf;

use anyhow::Result;
use arrow::datatypes::SchemaRef;

use crate::{
    PeekError,
    inspection::{Delimiter, Format},
    sinks::{
        csv::CsvSink,
        data_sink::DataSink,
        ndjson::NdjsonSink,
        parquet::{ParquetSink, ParquetSinkOptions},
    },
};

pub use data_sink::SinkResult;

/// Open the writer for `format` at `path`. `delimiter` only applies to
/// delimited text.
pub fn create_sink(
    path: PathBuf,
    format: &Format,
    schema: &SchemaRef,
    delimiter: Delimiter,
) -> Result<Box<dyn DataSink + Send>> {
    Ok(match format {
        Format::Csv => Box::new(CsvSink::create(path, schema, delimiter)?),
        Format::Ndjson => Box::new(NdjsonSink::create(path)?),
        Format::Parquet => Box::new(ParquetSink::create(
            path,
            schema,
            ParquetSinkOptions::default(),
        )?),
        Format::Unsupported(token) => {
            return Err(PeekError::UnsupportedDestinationFormat(token.clone()).into());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::test_data;
    use tempfile::tempdir;

    #[test]
    fn test_unsupported_destination_creates_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let schema = test_data::people_schema();

        let err = create_sink(
            path.clone(),
            &Format::Unsupported("xlsx".to_string()),
            &schema,
            Delimiter::COMMA,
        )
        .err()
        .unwrap();
        assert_eq!(
            err.downcast_ref::<PeekError>(),
            Some(&PeekError::UnsupportedDestinationFormat("xlsx".to_string()))
        );
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_sink_per_format() {
        let dir = tempdir().unwrap();
        let schema = test_data::people_schema();

        for (name, format) in [
            ("out.csv", Format::Csv),
            ("out.ndjson", Format::Ndjson),
            ("out.parquet", Format::Parquet),
        ] {
            let path = dir.path().join(name);
            let mut sink = create_sink(path.clone(), &format, &schema, Delimiter::COMMA).unwrap();
            sink.write_batch(test_data::people_batch(&schema, 0, 3))
                .await
                .unwrap();
            let result = sink.finish().await.unwrap();
            assert_eq!(result.rows_written, 3, "{name}");
            assert_eq!(result.path, path);
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
