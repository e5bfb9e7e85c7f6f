//! Rewrite a file in another format.

use std::{io::Write, path::Path};

use anyhow::Result;
use tracing::debug;

use crate::{
    ConvertArgs,
    inspection::{Console, Delimiter, Format, format::extension_token},
    sinks::create_sink,
    sources::{FrameLoader, LoadMode, LoadOptions},
};

/// Where a conversion writes to, and the delimiter used when none is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub format: Format,
    pub default_delimiter: Delimiter,
}

impl Destination {
    /// Resolve from the explicit token, else the path's extension. Unknown
    /// tokens stay unsupported rather than falling back to delimited text.
    pub fn resolve(path: &Path, explicit: Option<&str>) -> Self {
        let token = match explicit {
            Some(token) if !token.is_empty() => token.to_lowercase(),
            _ => extension_token(path),
        };
        let default_delimiter = if token == "tsv" {
            Delimiter::TAB
        } else {
            Delimiter::COMMA
        };
        Self {
            format: Format::from_token(&token),
            default_delimiter,
        }
    }
}

pub async fn run<W: Write>(args: ConvertArgs, console: &mut Console<W>) -> Result<()> {
    let src = args.src.as_std_path();
    let dst = args.dst.as_std_path();

    let options = LoadOptions::default().with_format(args.from_format.clone());
    let df = FrameLoader::new()
        .load(src, &options, LoadMode::Eager)
        .await?;

    let destination = Destination::resolve(dst, args.to_format.as_deref());
    let delimiter = args.delimiter.unwrap_or(destination.default_delimiter);
    debug!("Converting {} to {} as {}", src.display(), dst.display(), destination.format);

    let stream = df.execute_stream().await?;
    let mut sink = create_sink(dst.to_path_buf(), &destination.format, &stream.schema(), delimiter)?;
    let result = sink.write_stream(stream).await?;
    debug!("Wrote {} rows to {}", result.rows_written, result.path.display());

    let message = format!("{} {}", console.value("Wrote"), args.dst);
    console.line(message)?;
    Ok(())
}
