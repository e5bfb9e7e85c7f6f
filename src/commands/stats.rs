//! Numeric summary plus the most frequent values of every text column.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::{
    StatsArgs,
    inspection::{ColumnKind, Console, NoticeLevel, TableRenderer},
    operations::{
        DataOperation, summary::NumericSummaryOperation, top_values::TopValuesOperation,
    },
    sources::{FrameLoader, LoadMode, LoadOptions},
};

pub async fn run<W: Write>(args: StatsArgs, console: &mut Console<W>) -> Result<()> {
    let path = args.source.path.as_std_path();
    let df = FrameLoader::new()
        .load(path, &LoadOptions::from(&args.source), LoadMode::Eager)
        .await?;
    let schema = df.schema().inner().clone();

    let summary = NumericSummaryOperation::for_schema(&schema);
    if summary.is_empty() {
        console.notice(NoticeLevel::Warning, "No numeric columns detected.")?;
    } else {
        debug!("Summarizing {} numeric columns", summary.columns().len());
        let summarized = summary.apply(df.clone()).await?;
        let summary_schema = summarized.schema().inner().clone();
        let batches = summarized.collect().await?;
        TableRenderer::new(1)
            .with_max_width(console.width())
            .render(console, &summary_schema, &batches, Some("Numeric summary"))?;
    }

    let text_columns = schema
        .fields()
        .iter()
        .filter(|f| ColumnKind::from(f.data_type()).is_text())
        .map(|f| f.name().clone());
    for column in text_columns {
        let top = TopValuesOperation::new(column.as_str(), args.topk)
            .apply(df.clone())
            .await?;
        let top_schema = top.schema().inner().clone();
        let batches = top.collect().await?;
        if batches.iter().all(|b| b.num_rows() == 0) {
            debug!("No values to rank in {column}");
            continue;
        }
        TableRenderer::default()
            .with_max_width(console.width())
            .render(
                console,
                &top_schema,
                &batches,
                Some(&format!("Top {} values • {}", args.topk, column)),
            )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SourceArgs,
        inspection::style::{console_output, plain_console},
        utils::test_helpers::test_data,
    };
    use camino::Utf8PathBuf;
    use tempfile::tempdir;

    fn args(path: std::path::PathBuf, topk: usize) -> StatsArgs {
        StatsArgs {
            source: SourceArgs {
                path: Utf8PathBuf::from_path_buf(path).unwrap(),
                format: None,
                delimiter: None,
            },
            topk,
        }
    }

    #[tokio::test]
    async fn test_stats_numeric_and_text() {
        let dir = tempdir().unwrap();
        let path = test_data::write_text(
            dir.path(),
            "pets.csv",
            "pet,age\ncat,2\ndog,4\ncat,6\nbird,\ncat,8\ndog,10\n",
        );

        let mut console = plain_console();
        run(args(path, 2), &mut console).await.unwrap();
        let out = console_output(console);

        assert!(out.contains("Numeric summary"));
        assert!(out.contains("age_mean"));
        assert!(out.contains("age_std"));
        // count is the row count, missing values included
        assert!(out.contains("│ 6 "));
        assert!(out.contains("Top 2 values • pet"));
        assert!(out.contains("cat"));
        assert!(out.contains("dog"));
        assert!(!out.contains("bird"));
        assert!(!out.contains("No numeric columns detected."));
    }

    #[tokio::test]
    async fn test_stats_without_numeric_columns_warns() {
        let dir = tempdir().unwrap();
        let path = test_data::write_text(dir.path(), "words.csv", "word\nalpha\nbeta\nalpha\n");

        let mut console = plain_console();
        run(args(path, 5), &mut console).await.unwrap();
        let out = console_output(console);

        assert!(out.contains("No numeric columns detected."));
        assert!(!out.contains("Numeric summary"));
        assert!(out.contains("Top 5 values • word"));
        assert!(out.contains("alpha"));
    }

    #[tokio::test]
    async fn test_stats_top_values_capped_at_preview_rows() {
        let dir = tempdir().unwrap();
        let mut contents = String::from("code\n");
        for i in 0..30 {
            contents.push_str(&format!("c{i:02}\n"));
        }
        let path = test_data::write_text(dir.path(), "codes.csv", &contents);

        let mut console = plain_console();
        run(args(path, 30), &mut console).await.unwrap();
        let out = console_output(console);

        assert!(out.contains("Top 30 values • code"));
        assert!(out.contains("c19"));
        assert!(!out.contains("c20"));
    }

    #[tokio::test]
    async fn test_stats_integer_extremes_are_exact() {
        let dir = tempdir().unwrap();
        let path = test_data::write_text(
            dir.path(),
            "ids.csv",
            "id\n1234567\n9007199254740993\n",
        );

        let mut console = plain_console();
        run(args(path, 5), &mut console).await.unwrap();
        let out = console_output(console);

        assert!(out.contains("1234567"));
        assert!(out.contains("9007199254740993"));
        assert!(!out.contains("1.23457e+06"));
    }
}
