use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use datafusion::prelude::{DataFrame, NdJsonReadOptions, SessionContext};

use crate::{
    DEFAULT_INFER_LIMIT,
    sources::data_source::DataSource,
    utils::filesystem::{dotted_extension, file_url},
};

/// One JSON object per line.
pub struct NdjsonDataSource {
    path: PathBuf,
    infer_limit: usize,
}

impl NdjsonDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            infer_limit: DEFAULT_INFER_LIMIT,
        }
    }

    pub fn with_infer_limit(mut self, infer_limit: usize) -> Self {
        self.infer_limit = infer_limit;
        self
    }
}

#[async_trait]
impl DataSource for NdjsonDataSource {
    fn name(&self) -> &str {
        "ndjson"
    }

    async fn scan(&self, ctx: &SessionContext) -> Result<DataFrame> {
        let extension = dotted_extension(&self.path);
        let options = NdJsonReadOptions {
            schema_infer_max_records: self.infer_limit,
            file_extension: &extension,
            ..Default::default()
        };

        ctx.read_json(file_url(&self.path)?.as_str(), options)
            .await
            .with_context(|| format!("Failed to read NDJSON {}", self.path.display()))
    }
}
