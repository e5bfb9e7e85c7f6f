use std::io::Write;

use anyhow::Result;

use crate::{
    SampleArgs,
    inspection::{Console, TableRenderer},
    operations::sample::SampleOperation,
    sources::{FrameLoader, LoadMode, LoadOptions},
    utils::filesystem::display_name,
};

pub async fn run<W: Write>(args: SampleArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let df = FrameLoader::new()
        .load(path, &LoadOptions::from(&args.source), LoadMode::Eager)
        .await?;

    let sample = SampleOperation::new(args.n, args.effective_seed())
        .draw(df)
        .await?;

    let size = sample.num_rows();
    TableRenderer::new(size)
        .with_max_width(console.width())
        .render(
            console,
            &sample.schema(),
            std::slice::from_ref(&sample),
            Some(&format!("Random sample ({size}) • {}", display_name(path))),
        )
}
