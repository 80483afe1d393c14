use std::cmp::Ordering;
use std::fmt;

use bstr::ByteSlice;

use crate::config::Config;

/// The part of a record that orders it before the last-resort comparison
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    /// Raw or case-folded bytes, compared as unsigned bytes
    Bytes(Vec<u8>),
    /// Parsed numeric value
    Number(f64),
}

impl SortKey {
    /// Build the key for a line under the active options
    ///
    /// `-g` wins over `-n`, which wins over `-f`.
    pub fn from_line(line: &[u8], config: &Config) -> Self {
        if config.general_numeric {
            SortKey::Number(parse_general_number(line))
        } else if config.numeric {
            SortKey::Number(parse_leading_number(line))
        } else if config.fold_case {
            SortKey::Bytes(line.to_ascii_uppercase())
        } else {
            SortKey::Bytes(line.to_vec())
        }
    }

    fn partial_cmp_key(&self, other: &SortKey) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Bytes(a), SortKey::Bytes(b)) => Some(a.cmp(b)),
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// One input line with its precomputed sort key
///
/// Records order by key, then by whole-line bytes when keys tie, so two
/// records compare equal only when their lines are identical. A NaN key
/// makes a record uncomparable with any other numeric record.
#[derive(Clone, Debug)]
pub struct Record {
    line: Vec<u8>,
    key: SortKey,
}

impl Record {
    pub fn new(line: Vec<u8>, config: &Config) -> Self {
        let key = SortKey::from_line(&line, config);
        Self { line, key }
    }

    pub fn line(&self) -> &[u8] {
        &self.line
    }

    pub fn key(&self) -> &SortKey {
        &self.key
    }

    /// Whether two records tie on key alone (used by `-u`)
    pub fn same_key(&self, other: &Record) -> bool {
        self.key.partial_cmp_key(&other.key) == Some(Ordering::Equal)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.key.partial_cmp_key(&other.key)? {
            Ordering::Equal => Some(self.line.cmp(&other.line)),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line.as_bstr())
    }
}

/// Parse leading number from bytes (GNU sort -n compatible)
///
/// - Skips leading whitespace (space and tab only)
/// - Handles optional sign and one decimal point
/// - Stops at first non-numeric character
/// - Returns 0.0 for non-numeric input
pub fn parse_leading_number(s: &[u8]) -> f64 {
    let s = trim_leading_blanks(s);

    let mut end = 0;
    let mut has_dot = false;

    if end < s.len() && (s[end] == b'-' || s[end] == b'+') {
        end += 1;
    }

    while end < s.len() {
        if s[end].is_ascii_digit() {
            end += 1;
        } else if s[end] == b'.' && !has_dot {
            has_dot = true;
            end += 1;
        } else {
            break;
        }
    }

    // Prefix is ASCII, so it is valid UTF-8; a lone sign or dot fails to parse.
    std::str::from_utf8(&s[..end])
        .ok()
        .and_then(|num| num.parse().ok())
        .unwrap_or(0.0)
}

/// Parse a whole line as a float (`-g`)
///
/// Accepts anything `f64::from_str` does, including `inf` and `nan`.
/// Lines that are not numbers sort before every number.
pub fn parse_general_number(s: &[u8]) -> f64 {
    s.to_str()
        .ok()
        .map(str::trim)
        .and_then(|num| num.parse().ok())
        .unwrap_or(f64::NEG_INFINITY)
}

fn trim_leading_blanks(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(s.len());
    &s[start..]
}
