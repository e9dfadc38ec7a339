use std::fmt;
use std::num::IntErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input had no header row at all.
    MissingHeader,
    /// Required header names absent from the source, in `REQUIRED_COLUMNS` order.
    MissingColumns(Vec<String>),
    InvalidInteger {
        field: &'static str,
        row: usize,
        value: String,
    },
    /// Well-formed integer outside the signed 64-bit range.
    IntegerOutOfRange {
        field: &'static str,
        row: usize,
        value: String,
    },
    /// Data row too short to carry a required column.
    MissingField { field: &'static str, row: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingHeader => {
                write!(f, "CSV file is empty or missing a header row.")
            }
            ValidationError::MissingColumns(columns) => {
                write!(f, "Missing required columns: {}", columns.join(", "))
            }
            ValidationError::InvalidInteger { field, row, value } => write!(
                f,
                "Invalid {field} at row {row}: {}. Must be an integer.",
                quote_value(value)
            ),
            ValidationError::IntegerOutOfRange { field, row, value } => write!(
                f,
                "Invalid {field} at row {row}: {}. Must be between {} and {}.",
                quote_value(value),
                i64::MIN,
                i64::MAX
            ),
            ValidationError::MissingField { field, row } => {
                write!(f, "Missing {field} at row {row}.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerError {
    Malformed,
    OutOfRange,
}

/// Parses a base-10 integer field.
///
/// Accepts surrounding whitespace, a leading sign and single underscores
/// between digits (`" +1_000 "` is 1000). Values must fit in an `i64`.
pub fn parse_integer_field(
    field: &'static str,
    row: usize,
    raw: &str,
) -> Result<i64, ValidationError> {
    parse_integer(raw).map_err(|err| {
        let value = raw.to_string();
        match err {
            IntegerError::Malformed => ValidationError::InvalidInteger { field, row, value },
            IntegerError::OutOfRange => ValidationError::IntegerOutOfRange { field, row, value },
        }
    })
}

fn parse_integer(raw: &str) -> Result<i64, IntegerError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first().copied() {
        None => return Err(IntegerError::Malformed),
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        Some(_) => (false, trimmed),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(IntegerError::Malformed);
    }
    if digits.contains("__") {
        return Err(IntegerError::Malformed);
    }

    let mut cleaned = String::with_capacity(digits.len() + 1);
    if negative {
        cleaned.push('-');
    }
    for ch in digits.chars() {
        match ch {
            '0'..='9' => cleaned.push(ch),
            '_' => {}
            _ => return Err(IntegerError::Malformed),
        }
    }
    cleaned.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => IntegerError::OutOfRange,
        _ => IntegerError::Malformed,
    })
}

/// Quotes a raw cell value for error messages: single quotes unless the
/// value itself contains one and no double quote.
fn quote_value(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
