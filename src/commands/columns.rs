use std::io::Write;

use anyhow::Result;

use crate::{
    ColumnsArgs, SCHEMA_INFER_LIMIT,
    inspection::{ColumnKind, Console, report},
    sources::{FrameLoader, LoadMode, LoadOptions},
    utils::filesystem::display_name,
};

pub async fn run<W: Write>(args: ColumnsArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let options = LoadOptions::from(&args.source).with_infer_limit(SCHEMA_INFER_LIMIT);
    let df = FrameLoader::new()
        .load(path, &options, LoadMode::Eager)
        .await?;

    let pairs = df
        .schema()
        .fields()
        .iter()
        .map(|f| (f.name().clone(), ColumnKind::from(f.data_type())))
        .collect::<Vec<_>>();
    report(console, &format!("Columns • {}", display_name(path)), pairs)
}
