//! CSV delimiter model and sniffing.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::PeekError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(b',');
    pub const TAB: Delimiter = Delimiter(b'\t');
    pub const SEMICOLON: Delimiter = Delimiter(b';');

    /// Candidates in tie-break priority order.
    const CANDIDATES: [Delimiter; 3] = [Delimiter::COMMA, Delimiter::TAB, Delimiter::SEMICOLON];

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl FromStr for Delimiter {
    type Err = PeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\\t" | "tab" => Ok(Delimiter::TAB),
            _ => match s.as_bytes() {
                [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(Delimiter(*b)),
                _ => Err(PeekError::InvalidDelimiter(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Delimiter::TAB {
            write!(f, "\\t")
        } else {
            write!(f, "{}", char::from(self.0))
        }
    }
}

/// Pick the most frequent candidate in `line`.
///
/// Ties keep the earlier candidate (comma, then tab, then semicolon). A line
/// without any candidate yields comma.
pub fn pick_delimiter(line: &str) -> Delimiter {
    let mut best = Delimiter::COMMA;
    let mut best_count = 0;
    for candidate in Delimiter::CANDIDATES {
        let count = line.bytes().filter(|b| *b == candidate.0).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Guess the delimiter from the first non-blank line of `path`.
///
/// Never fails: unreadable files and invalid UTF-8 degrade to the comma
/// default.
pub fn sniff_delimiter(path: &Path) -> Delimiter {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("cannot open {} for sniffing: {e}", path.display());
            return Delimiter::COMMA;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                debug!("stopped sniffing {}: {e}", path.display());
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let delimiter = pick_delimiter(line);
        debug!("sniffed delimiter '{delimiter}' from {}", path.display());
        return delimiter;
    }

    Delimiter::COMMA
}
