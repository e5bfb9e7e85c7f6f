use std::path::Path;

use anyhow::Result;
use datafusion::prelude::{DataFrame, SessionConfig, SessionContext};
use tracing::debug;

use crate::{
    DEFAULT_INFER_LIMIT, PeekError, SourceArgs,
    inspection::{Delimiter, Format, detect_format, sniff_delimiter},
    sources::{
        csv::CsvDataSource, data_source::DataSource, ndjson::NdjsonDataSource,
        parquet::ParquetDataSource,
    },
    utils::filesystem::ensure_readable,
};

/// Whether a load is a deferred query plan or fully materialized rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    #[default]
    Lazy,
    Eager,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub format: Option<String>,
    pub delimiter: Option<Delimiter>,
    pub infer_limit: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: None,
            infer_limit: DEFAULT_INFER_LIMIT,
        }
    }
}

impl From<&SourceArgs> for LoadOptions {
    fn from(args: &SourceArgs) -> Self {
        Self {
            format: args.format.clone(),
            delimiter: args.delimiter,
            ..Self::default()
        }
    }
}

impl LoadOptions {
    pub fn with_format(mut self, format: Option<String>) -> Self {
        self.format = format;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Option<Delimiter>) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_infer_limit(mut self, infer_limit: usize) -> Self {
        self.infer_limit = infer_limit;
        self
    }
}

/// The format a file will be read as, plus the delimiter for delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub format: Format,
    pub delimiter: Option<Delimiter>,
}

impl ResolvedSource {
    /// Detect the format and, for delimited text only, settle the delimiter:
    /// an explicit one wins, otherwise it is sniffed from the file.
    pub fn resolve(path: &Path, format: Option<&str>, delimiter: Option<Delimiter>) -> Self {
        let format = detect_format(path, format);
        let delimiter = match format {
            Format::Csv => Some(delimiter.unwrap_or_else(|| sniff_delimiter(path))),
            _ => None,
        };
        Self { format, delimiter }
    }
}

/// Opens files as DataFusion frames. One loader owns one session.
pub struct FrameLoader {
    ctx: SessionContext,
}

impl Default for FrameLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoader {
    pub fn new() -> Self {
        // one partition keeps rows in file order for previews, samples and
        // conversions
        let mut config = SessionConfig::new().with_target_partitions(1);
        // plain Utf8 columns rather than view types, so written files and
        // reported types stay the same across formats
        config.options_mut().execution.parquet.schema_force_view_types = false;
        Self {
            ctx: SessionContext::new_with_config(config),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub async fn load(
        &self,
        path: &Path,
        options: &LoadOptions,
        mode: LoadMode,
    ) -> Result<DataFrame> {
        let resolved = ResolvedSource::resolve(path, options.format.as_deref(), options.delimiter);
        self.load_resolved(path, &resolved, options.infer_limit, mode)
            .await
    }

    pub async fn load_resolved(
        &self,
        path: &Path,
        resolved: &ResolvedSource,
        infer_limit: usize,
        mode: LoadMode,
    ) -> Result<DataFrame> {
        let source = Self::source_for(path, resolved, infer_limit)?;
        ensure_readable(path)?;

        debug!(
            "Loading {} as {} ({:?})",
            path.display(),
            source.name(),
            mode
        );
        let df = source.scan(&self.ctx).await?;

        match mode {
            LoadMode::Lazy => Ok(df),
            LoadMode::Eager => Ok(df.cache().await?),
        }
    }

    fn source_for(
        path: &Path,
        resolved: &ResolvedSource,
        infer_limit: usize,
    ) -> Result<Box<dyn DataSource + Send + Sync>> {
        Ok(match &resolved.format {
            Format::Csv => Box::new(
                CsvDataSource::new(path, resolved.delimiter.unwrap_or_default())
                    .with_infer_limit(infer_limit),
            ),
            Format::Ndjson => Box::new(NdjsonDataSource::new(path).with_infer_limit(infer_limit)),
            Format::Parquet => Box::new(ParquetDataSource::new(path)),
            Format::Unsupported(token) => {
                return Err(PeekError::UnsupportedFormat(token.clone()).into());
            }
        })
    }
}
