/*!
 * Record readers for the three fixed-layout TextGrid blocks.
 *
 * - Interval: `intervals [k]:`, `xmin`, `xmax`, `text` (4 lines)
 * - Point:    `points [k]:`, `number`, `mark` (3 lines)
 * - Tier header: `item [n]:`, `class`, `name`, `xmin`, `xmax`, `<kind>: size`
 *
 * Interval and point readers always consume their full block, even when an
 * early line is bad, so the cursor stays aligned on the next record.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::cursor::LineCursor;
use super::fields::{count_field, has_field, numeric_field, text_field};
use super::model::{Entry, TierKind};
use crate::errors::TextGridError;

static INTERVAL_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"intervals \[\d+\]").unwrap());
static POINT_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"points \[\d+\]").unwrap());
static TIER_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"item \[\d+\]").unwrap());

const INTERVAL_LINES: usize = 4;
const POINT_LINES: usize = 3;

/// Why a record could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    /// 1-based line number of the first offending line
    pub line: usize,
    pub reason: String,
    /// The input ran out inside the record
    pub truncated: bool,
}

impl RecordFailure {
    pub fn into_error(self, tier: &str, index: usize) -> TextGridError {
        TextGridError::MalformedRecord {
            line: self.line,
            tier: tier.to_string(),
            index,
            reason: self.reason,
        }
    }
}

/// Header of one tier block
#[derive(Debug, Clone, PartialEq)]
pub struct TierHeader {
    pub kind: TierKind,
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub declared_count: usize,
}

/// Read one `intervals [k]:` block into (xmin, text)
pub fn read_interval(cursor: &mut LineCursor<'_>) -> Result<Entry, RecordFailure> {
    let first_line = cursor.next_line_number();
    let lines = take_block(cursor, INTERVAL_LINES, "interval")?;
    let (header, xmin, xmax, text) = (lines[0], lines[1], lines[2], lines[3]);

    if !INTERVAL_HEADER.is_match(header) {
        return Err(failure(first_line, "expected `intervals [k]:`"));
    }
    let boundary = numeric_field("xmin", xmin)
        .ok_or_else(|| failure(first_line + 1, "missing numeric `xmin`"))?;
    if !has_field("xmax", xmax) {
        return Err(failure(first_line + 2, "missing `xmax`"));
    }
    let label = text_field("text", text)
        .ok_or_else(|| failure(first_line + 3, "missing quoted `text`"))?;

    Ok(Entry::new(boundary, label))
}

/// Read one `points [k]:` block into (number, mark)
pub fn read_point(cursor: &mut LineCursor<'_>) -> Result<Entry, RecordFailure> {
    let first_line = cursor.next_line_number();
    let lines = take_block(cursor, POINT_LINES, "point")?;
    let (header, number, mark) = (lines[0], lines[1], lines[2]);

    if !POINT_HEADER.is_match(header) {
        return Err(failure(first_line, "expected `points [k]:`"));
    }
    let boundary = numeric_field("number", number)
        .ok_or_else(|| failure(first_line + 1, "missing numeric `number`"))?;
    let label = text_field("mark", mark)
        .ok_or_else(|| failure(first_line + 2, "missing quoted `mark`"))?;

    Ok(Entry::new(boundary, label))
}

/// Read one tier header block
pub fn read_tier_header(cursor: &mut LineCursor<'_>) -> Result<TierHeader, TextGridError> {
    let line = expect_line(cursor, "`item [n]:`")?;
    if !TIER_HEADER.is_match(line) {
        return Err(header_error(cursor, "expected `item [n]:`"));
    }

    let line = expect_line(cursor, "`class`")?;
    let class = text_field("class", line)
        .ok_or_else(|| header_error(cursor, "missing quoted `class`"))?;
    let kind = TierKind::from_class(class).ok_or_else(|| TextGridError::UnrecognizedTierClass {
        line: cursor.line_number(),
        class: class.to_string(),
    })?;

    let line = expect_line(cursor, "`name`")?;
    let name = text_field("name", line)
        .ok_or_else(|| header_error(cursor, "missing quoted `name`"))?
        .to_string();

    let line = expect_line(cursor, "`xmin`")?;
    let start = numeric_field("xmin", line)
        .ok_or_else(|| header_error(cursor, "missing numeric `xmin`"))?;

    let line = expect_line(cursor, "`xmax`")?;
    let end = numeric_field("xmax", line)
        .ok_or_else(|| header_error(cursor, "missing numeric `xmax`"))?;

    let size_field = format!("{}: size", kind.record_field());
    let line = expect_line(cursor, &format!("`{}`", size_field))?;
    let declared_count = count_field(&size_field, line)
        .ok_or_else(|| header_error(cursor, &format!("missing whole-number `{}`", size_field)))?;

    Ok(TierHeader {
        kind,
        name,
        start,
        end,
        declared_count,
    })
}

fn take_block<'a>(
    cursor: &mut LineCursor<'a>,
    count: usize,
    what: &str,
) -> Result<Vec<&'a str>, RecordFailure> {
    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        match cursor.next_line() {
            Some(line) => lines.push(line),
            None => {
                return Err(RecordFailure {
                    line: cursor.next_line_number(),
                    reason: format!("unexpected end of input inside {}", what),
                    truncated: true,
                });
            }
        }
    }
    Ok(lines)
}

fn failure(line: usize, reason: &str) -> RecordFailure {
    RecordFailure {
        line,
        reason: reason.to_string(),
        truncated: false,
    }
}

fn expect_line<'a>(cursor: &mut LineCursor<'a>, expected: &str) -> Result<&'a str, TextGridError> {
    cursor.next_line().ok_or_else(|| TextGridError::MalformedTierHeader {
        line: cursor.next_line_number(),
        reason: format!("unexpected end of input, expected {}", expected),
    })
}

fn header_error(cursor: &LineCursor<'_>, reason: &str) -> TextGridError {
    TextGridError::MalformedTierHeader {
        line: cursor.line_number(),
        reason: reason.to_string(),
    }
}
