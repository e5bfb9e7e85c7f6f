//! Head of a file as a table.

use std::io::Write;

use anyhow::Result;

use crate::{
    ShowArgs,
    inspection::{Console, TableRenderer},
    operations::{DataOperation, select::SelectColumnsOperation},
    sources::{FrameLoader, LoadMode, LoadOptions},
    utils::filesystem::display_name,
};

pub async fn run<W: Write>(args: ShowArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let loader = FrameLoader::new();
    let mut df = loader
        .load(path, &LoadOptions::from(&args.source), LoadMode::Lazy)
        .await?;

    if let Some(cols) = &args.cols {
        df = SelectColumnsOperation::from_list(cols).apply(df).await?;
    }

    let schema = df.schema().inner().clone();
    let batches = df.limit(0, Some(args.rows))?.collect().await?;
    let shown: usize = batches.iter().map(|b| b.num_rows()).sum();

    TableRenderer::new(args.rows)
        .with_max_width(console.width())
        .render(
            console,
            &schema,
            &batches,
            Some(&format!("Preview • {}", display_name(path))),
        )?;
    let footer = console.dim(format!(
        "rows shown: {} (file preview) | columns: {}",
        shown,
        schema.fields().len()
    ));
    console.line(footer)?;
    Ok(())
}
