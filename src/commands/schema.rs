use std::io::Write;

use anyhow::Result;

use crate::{
    SCHEMA_INFER_LIMIT, SchemaArgs,
    inspection::{ColumnKind, Console, report},
    operations::null_count::null_counts,
    sources::{FrameLoader, LoadMode, LoadOptions},
    utils::filesystem::display_name,
};

pub async fn run<W: Write>(args: SchemaArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let options = LoadOptions::from(&args.source).with_infer_limit(SCHEMA_INFER_LIMIT);
    let df = FrameLoader::new()
        .load(path, &options, LoadMode::Eager)
        .await?;

    let schema = df.schema().inner().clone();
    let counts = null_counts(df).await?;

    let pairs = schema.fields().iter().zip(counts).map(|(field, nulls)| {
        (
            field.name().clone(),
            format!("{} · nulls={}", ColumnKind::from(field.data_type()), nulls),
        )
    });
    report(console, &format!("Schema • {}", display_name(path)), pairs)
}
