//! Aligned text tables for record batches.

use std::io::Write;

use anyhow::Result;
use arrow::{array::RecordBatch, datatypes::Schema};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style as TableStyle, Width},
};

use super::{cell::CellFormatter, style::Console};
use crate::{DEFAULT_MAX_WIDTH, DEFAULT_PREVIEW_ROWS};

/// Renders at most `max_rows` rows of a frame, folding cell content so the
/// whole table fits in `max_width` columns.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    max_rows: usize,
    max_width: usize,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_ROWS)
    }
}

impl TableRenderer {
    pub fn new(max_rows: usize) -> Self {
        Self {
            max_rows,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Format the first `max_rows` rows across `batches`, in order.
    pub fn rows(&self, batches: &[RecordBatch]) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();
        for batch in batches {
            if rows.len() >= self.max_rows {
                break;
            }
            let formatters = batch
                .columns()
                .iter()
                .map(|c| CellFormatter::try_new(c.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            let take = batch.num_rows().min(self.max_rows - rows.len());
            for row in 0..take {
                rows.push(formatters.iter().map(|f| f.format(row)).collect());
            }
        }
        Ok(rows)
    }

    pub fn table<W: Write>(
        &self,
        console: &Console<W>,
        schema: &Schema,
        batches: &[RecordBatch],
    ) -> Result<Table> {
        let rows = self.rows(batches)?;
        let empty = rows.is_empty();

        let mut builder = Builder::default();
        builder.push_record(schema.fields().iter().map(|f| console.header(f.name())));
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        if empty {
            // header only: no separator, so the box still closes
            table.with(TableStyle::rounded().remove_horizontals());
        } else {
            table.with(TableStyle::rounded());
        }
        table
            .with(Alignment::left())
            .with(Width::wrap(self.max_width));
        Ok(table)
    }

    /// Write the optional title line, in the header style, followed by the
    /// table.
    pub fn render<W: Write>(
        &self,
        console: &mut Console<W>,
        schema: &Schema,
        batches: &[RecordBatch],
        title: Option<&str>,
    ) -> Result<()> {
        let table = self.table(console, schema, batches)?;
        if let Some(title) = title {
            let title = console.header(title);
            console.line(title)?;
        }
        console.line(table)?;
        Ok(())
    }
}
