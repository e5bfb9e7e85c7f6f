use anyhow::Result;
use async_trait::async_trait;
use datafusion::prelude::DataFrame;

/// A single selection or aggregation step applied to a frame.
#[async_trait]
pub trait DataOperation {
    async fn apply(&self, df: DataFrame) -> Result<DataFrame>;
}
