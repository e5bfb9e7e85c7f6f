use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use datafusion::prelude::{CsvReadOptions, DataFrame, SessionContext};

use crate::{
    DEFAULT_INFER_LIMIT,
    inspection::Delimiter,
    sources::data_source::DataSource,
    utils::filesystem::{dotted_extension, file_url},
};

pub struct CsvDataSource {
    path: PathBuf,
    delimiter: Delimiter,
    infer_limit: usize,
}

impl CsvDataSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: Delimiter) -> Self {
        Self {
            path: path.into(),
            delimiter,
            infer_limit: DEFAULT_INFER_LIMIT,
        }
    }

    pub fn with_infer_limit(mut self, infer_limit: usize) -> Self {
        self.infer_limit = infer_limit;
        self
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    fn name(&self) -> &str {
        "csv"
    }

    async fn scan(&self, ctx: &SessionContext) -> Result<DataFrame> {
        let extension = dotted_extension(&self.path);
        let options = CsvReadOptions::new()
            .has_header(true)
            .delimiter(self.delimiter.as_byte())
            .schema_infer_max_records(self.infer_limit)
            .file_extension(&extension);

        ctx.read_csv(file_url(&self.path)?.as_str(), options)
            .await
            .with_context(|| format!("Failed to read delimited text {}", self.path.display()))
    }
}
