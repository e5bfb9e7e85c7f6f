use anyhow::Result;
use arrow::datatypes::{DataType, Schema};
use async_trait::async_trait;
use datafusion::{
    functions_aggregate::expr_fn::{avg, count, max, min, stddev},
    prelude::{DataFrame, Expr, cast, ident, lit},
};

use crate::{inspection::ColumnKind, operations::data_operation::DataOperation};

/// One-row numeric summary: the row count, then mean, standard deviation,
/// minimum and maximum for every column, grouped by statistic.
pub struct NumericSummaryOperation {
    columns: Vec<String>,
}

impl NumericSummaryOperation {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Summarize every numeric column of `schema`.
    pub fn for_schema(schema: &Schema) -> Self {
        Self::new(
            schema
                .fields()
                .iter()
                .filter(|f| ColumnKind::from(f.data_type()).is_numeric())
                .map(|f| f.name().clone())
                .collect(),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn exprs(&self) -> Vec<Expr> {
        // mean and deviation are computed in f64; extremes keep the column type
        let stats: [(&str, fn(Expr) -> Expr, bool); 4] = [
            ("mean", avg, false),
            ("std", stddev, false),
            ("min", min, true),
            ("max", max, true),
        ];

        let mut exprs = vec![count(lit(1)).alias("count")];
        for (suffix, stat, keep_type) in stats {
            exprs.extend(self.columns.iter().map(|c| {
                let input = if keep_type {
                    ident(c.as_str())
                } else {
                    cast(ident(c.as_str()), DataType::Float64)
                };
                stat(input).alias(format!("{c}_{suffix}"))
            }));
        }
        exprs
    }
}

#[async_trait]
impl DataOperation for NumericSummaryOperation {
    async fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        Ok(df.aggregate(vec![], self.exprs())?)
    }
}
