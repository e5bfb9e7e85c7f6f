use anyhow::Result;
use async_trait::async_trait;
use datafusion::prelude::{DataFrame, SessionContext};

#[async_trait]
pub trait DataSource {
    fn name(&self) -> &str;

    /// Register the file with `ctx` and return an unexecuted frame over it.
    async fn scan(&self, ctx: &SessionContext) -> Result<DataFrame>;
}
