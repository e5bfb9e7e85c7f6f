//! Output styling and the console sink every command writes to.

use std::{
    fmt::Display,
    io::{self, Write},
};

use owo_colors::{OwoColorize, Style};
use tabled::{builder::Builder, settings::Style as TableStyle};

use crate::DEFAULT_MAX_WIDTH;

/// Styles for output text.
pub struct Styles;

impl Styles {
    pub fn header() -> Style {
        Style::new().bold()
    }

    pub fn label() -> Style {
        Style::new().bold().cyan()
    }

    pub fn value() -> Style {
        Style::new().green()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

impl NoticeLevel {
    fn style(self) -> Style {
        match self {
            NoticeLevel::Warning => Styles::warning(),
            NoticeLevel::Error => Styles::error(),
        }
    }
}

/// Output sink passed explicitly to every reporting call.
///
/// Whether styling is emitted is a property of the sink, so the same
/// rendering code produces plain text for pipes and tests.
pub struct Console<W: Write> {
    out: W,
    color: bool,
    width: usize,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            width: DEFAULT_MAX_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Apply `style` when color is enabled, otherwise return the plain text.
    pub fn paint<T: Display>(&self, v: T, style: Style) -> String {
        if self.color {
            v.style(style).to_string()
        } else {
            v.to_string()
        }
    }

    pub fn header<T: Display>(&self, v: T) -> String {
        self.paint(v, Styles::header())
    }

    pub fn label<T: Display>(&self, v: T) -> String {
        self.paint(v, Styles::label())
    }

    pub fn value<T: Display>(&self, v: T) -> String {
        self.paint(v, Styles::value())
    }

    pub fn dim<T: Display>(&self, v: T) -> String {
        self.paint(v, Styles::dim())
    }

    pub fn line<T: Display>(&mut self, v: T) -> io::Result<()> {
        writeln!(self.out, "{v}")
    }

    /// Horizontal rule spanning the console width with a bold title in the middle.
    pub fn rule(&mut self, title: &str) -> io::Result<()> {
        let title_width = title.chars().count() + 2;
        let line = if title_width + 2 > self.width {
            self.header(title)
        } else {
            let left = (self.width - title_width) / 2;
            let right = self.width - title_width - left;
            format!(
                "{} {} {}",
                "─".repeat(left),
                self.header(title),
                "─".repeat(right)
            )
        };
        self.line(line)
    }

    /// Boxed single-line notice, colored by level.
    pub fn notice(&mut self, level: NoticeLevel, text: &str) -> io::Result<()> {
        let mut builder = Builder::default();
        builder.push_record([text.to_string()]);
        let mut table = builder.build();
        // a lone record would otherwise close with the header separator
        table.with(TableStyle::rounded().remove_horizontals());
        let panel = self.paint(table, level.style());
        self.line(panel)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
pub(crate) fn plain_console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), false)
}

#[cfg(test)]
pub(crate) fn console_output(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).unwrap()
}
