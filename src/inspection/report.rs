//! Titled label/value reports.

use std::{fmt::Display, io::Write};

use anyhow::Result;
use tabled::{builder::Builder, settings::Style as TableStyle};

use super::style::Console;

/// Write a rule with `title`, then one borderless row per pair in input
/// order. Labels are styled, values plain.
pub fn report<W, K, V, I>(console: &mut Console<W>, title: &str, pairs: I) -> Result<()>
where
    W: Write,
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let mut builder = Builder::default();
    for (k, v) in pairs {
        builder.push_record([console.label(k), v.to_string()]);
    }
    let mut table = builder.build();
    table.with(TableStyle::blank());

    console.rule(title)?;
    console.line(table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::style::{Console, console_output, plain_console};

    #[test]
    fn test_report_keeps_input_order_and_duplicates() {
        let mut console = plain_console().with_width(40);
        report(
            &mut console,
            "Info",
            [("rows", "3"), ("columns", "2"), ("rows", "again")],
        )
        .unwrap();
        let out = console_output(console);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains(" Info "));
        let body: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(body.len(), 3);
        assert!(body[0].starts_with("rows"));
        assert!(body[0].ends_with('3'));
        assert!(body[1].starts_with("columns"));
        assert!(body[2].ends_with("again"));
    }

    #[test]
    fn test_report_styles_labels_only() {
        let mut console = Console::new(Vec::new(), true);
        report(&mut console, "Columns", [("id", "i64")]).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("i64"));
    }

    #[test]
    fn test_report_without_pairs_prints_rule() {
        let mut console = plain_console();
        let pairs: Vec<(String, String)> = Vec::new();
        report(&mut console, "Schema • empty.csv", pairs).unwrap();
        let out = console_output(console);
        assert!(out.contains("Schema • empty.csv"));
    }
}
