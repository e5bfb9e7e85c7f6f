use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use datafusion::prelude::{DataFrame, ParquetReadOptions, SessionContext};

use crate::{
    sources::data_source::DataSource,
    utils::filesystem::{dotted_extension, file_url},
};

pub struct ParquetDataSource {
    path: PathBuf,
}

impl ParquetDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for ParquetDataSource {
    fn name(&self) -> &str {
        "parquet"
    }

    async fn scan(&self, ctx: &SessionContext) -> Result<DataFrame> {
        let extension = dotted_extension(&self.path);
        let options = ParquetReadOptions {
            file_extension: &extension,
            ..Default::default()
        };

        ctx.read_parquet(file_url(&self.path)?.as_str(), options)
            .await
            .with_context(|| format!("Failed to read Parquet {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::test_data;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_scan_reads_embedded_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.parquet");
        let schema = test_data::people_schema();
        test_data::write_parquet_file(
            &path,
            &schema,
            vec![
                test_data::people_batch(&schema, 0, 10),
                test_data::people_batch(&schema, 10, 5),
            ],
        );

        let ctx = SessionContext::new();
        let df = ParquetDataSource::new(&path).scan(&ctx).await.unwrap();
        assert_eq!(df.schema().fields().len(), 3);
        assert_eq!(df.count().await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_scan_fails_on_non_parquet_content() {
        let dir = tempdir().unwrap();
        let path = test_data::write_text(dir.path(), "fake.parquet", "a,b\n1,2\n");

        let ctx = SessionContext::new();
        assert!(ParquetDataSource::new(&path).scan(&ctx).await.is_err());
    }

    #[tokio::test]
    async fn test_scan_bracketed_file_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people[v2].parquet");
        let schema = test_data::people_schema();
        test_data::write_parquet_file(&path, &schema, vec![test_data::people_batch(&schema, 0, 4)]);

        let ctx = SessionContext::new();
        let df = ParquetDataSource::new(&path).scan(&ctx).await.unwrap();
        assert_eq!(df.schema().fields().len(), 3);
        assert_eq!(df.count().await.unwrap(), 4);
    }
}
