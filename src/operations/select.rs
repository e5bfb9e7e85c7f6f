use anyhow::Result;
use async_trait::async_trait;
use datafusion::prelude::{DataFrame, ident};

use crate::operations::data_operation::DataOperation;

/// Split a comma-separated column list, trimming names and dropping empty
/// entries.
pub fn parse_column_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Project a frame onto the named columns, in the order given. An empty list
/// keeps every column.
pub struct SelectColumnsOperation {
    columns: Vec<String>,
}

impl SelectColumnsOperation {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn from_list(list: &str) -> Self {
        Self::new(parse_column_list(list))
    }
}

#[async_trait]
impl DataOperation for SelectColumnsOperation {
    async fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        if self.columns.is_empty() {
            return Ok(df);
        }
        Ok(df.select(self.columns.iter().map(|c| ident(c.as_str())).collect::<Vec<_>>())?)
    }
}
