use anyhow::Result;
use arrow::{
    array::{RecordBatch, UInt64Array},
    compute::{concat_batches, take_record_batch},
};
use datafusion::prelude::DataFrame;
use rand::{SeedableRng, rngs::StdRng, seq::index};
use tracing::debug;

use crate::PeekError;

/// Draws `size` distinct rows, or every row when the frame is smaller.
pub struct SampleOperation {
    size: usize,
    seed: Option<u64>,
}

impl SampleOperation {
    /// `seed: None` draws from fresh OS entropy.
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        Self { size, seed }
    }

    /// Materialize the frame and gather the sampled rows in draw order.
    pub async fn draw(&self, df: DataFrame) -> Result<RecordBatch> {
        let schema = df.schema().inner().clone();
        let batches = df.collect().await?;
        let schema = batches.first().map(|b| b.schema()).unwrap_or(schema);
        let rows = concat_batches(&schema, &batches)?;

        let size = self.size.min(rows.num_rows());
        if size == 0 {
            return Err(PeekError::EmptySample.into());
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let picked = index::sample(&mut rng, rows.num_rows(), size);
        debug!("Sampling {size} of {} rows", rows.num_rows());

        let indices = UInt64Array::from_iter_values(picked.iter().map(|i| i as u64));
        Ok(take_record_batch(&rows, &indices)?)
    }
}
