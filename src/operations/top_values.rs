use anyhow::Result;
use async_trait::async_trait;
use datafusion::{
    functions_aggregate::expr_fn::count,
    prelude::{DataFrame, ident, lit},
};

use crate::operations::data_operation::DataOperation;

/// Name of the frequency column in top-value frames.
pub const COUNT_COLUMN: &str = "len";

/// The `k` most frequent non-null values of one column, most frequent first.
/// Equal counts are ordered by value.
pub struct TopValuesOperation {
    column: String,
    k: usize,
}

impl TopValuesOperation {
    pub fn new(column: impl Into<String>, k: usize) -> Self {
        Self {
            column: column.into(),
            k,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

#[async_trait]
impl DataOperation for TopValuesOperation {
    async fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let value = ident(&self.column);
        Ok(df
            .filter(value.clone().is_not_null())?
            .aggregate(vec![value.clone()], vec![count(lit(1)).alias(COUNT_COLUMN)])?
            .sort(vec![
                ident(COUNT_COLUMN).sort(false, false),
                value.sort(true, false),
            ])?
            .limit(0, Some(self.k))?)
    }
}
