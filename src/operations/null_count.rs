use anyhow::Result;
use arrow::{
    array::{Array, AsArray},
    datatypes::{DataType, Int64Type},
};
use async_trait::async_trait;
use datafusion::{
    functions_aggregate::expr_fn::sum,
    prelude::{DataFrame, cast, ident},
};
use tracing::debug;

use crate::operations::data_operation::DataOperation;

/// Collapse a frame to one row holding the null count of every column,
/// keeping column names and order.
pub struct NullCountOperation;

#[async_trait]
impl DataOperation for NullCountOperation {
    async fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let exprs = df
            .schema()
            .fields()
            .iter()
            .map(|f| sum(cast(ident(f.name()).is_null(), DataType::Int64)).alias(f.name()))
            .collect::<Vec<_>>();
        Ok(df.aggregate(vec![], exprs)?)
    }
}

/// Null count per column, in schema order, from one aggregation pass.
pub async fn null_counts(df: DataFrame) -> Result<Vec<u64>> {
    let width = df.schema().fields().len();
    if width == 0 {
        return Ok(Vec::new());
    }

    debug!("Counting nulls in {width} columns");
    let batches = NullCountOperation.apply(df).await?.collect().await?;
    let mut counts = vec![0u64; width];
    if let Some(batch) = batches.iter().find(|b| b.num_rows() > 0) {
        for (i, count) in counts.iter_mut().enumerate() {
            let column = batch.column(i).as_primitive::<Int64Type>();
            // the sum over zero rows is null
            if column.is_valid(0) {
                *count = column.value(0).unsigned_abs();
            }
        }
    }
    Ok(counts)
}
