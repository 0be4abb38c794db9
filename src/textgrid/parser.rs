/*!
 * Document and tier parsers for the long TextGrid text format.
 *
 * The parser walks the preamble checkpoints in order, then reads each
 * declared tier through the record readers. A document is only returned when
 * the whole input parsed; tier-level failures never leave a partial document.
 */

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cursor::LineCursor;
use super::fields::{count_field, numeric_field};
use super::model::{ParseWarning, TextGrid, Tier, TierKind};
use super::records::{read_interval, read_point, read_tier_header};
use crate::errors::TextGridError;

static FILE_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"File type").unwrap());
static OBJECT_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"Object class").unwrap());
static TIERS_EXIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"tiers\? <exists>").unwrap());
static ITEM_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"item \[\]").unwrap());

/// Caps the up-front allocation for a tier so a bogus size cannot exhaust memory
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// What to do with an interval or point that cannot be read
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Skip the record, keep a warning and continue with the tier
    #[default]
    Lenient,
    /// Abort the whole parse on the first bad record
    Strict,
}

/// TextGrid parser configured with a record policy
#[derive(Debug, Clone, Default)]
pub struct TextGridParser {
    policy: RecordPolicy,
}

impl TextGridParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RecordPolicy) -> Self {
        TextGridParser { policy }
    }

    pub fn policy(&self) -> RecordPolicy {
        self.policy
    }

    /// Parse a TextGrid file. The file is only held open while it is read.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<TextGrid, TextGridError> {
        let path = path.as_ref();
        debug!("Reading TextGrid file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse TextGrid content held in memory
    pub fn parse_str(&self, content: &str) -> Result<TextGrid, TextGridError> {
        let mut cursor = LineCursor::new(content);
        self.parse_document(&mut cursor)
    }

    fn parse_document(&self, cursor: &mut LineCursor<'_>) -> Result<TextGrid, TextGridError> {
        expect_marker(cursor, &FILE_TYPE, "`File type` marker")?;
        expect_marker(cursor, &OBJECT_CLASS, "`Object class` marker")?;

        // Separator line, content irrelevant
        cursor.next_line();

        let global_start = expect_numeric(cursor, "xmin")?;
        let global_end = expect_numeric(cursor, "xmax")?;
        if global_start > global_end {
            return Err(preamble_error(
                cursor.line_number(),
                format!("xmin {} is greater than xmax {}", global_start, global_end),
            ));
        }

        match cursor.next_line() {
            Some(line) if TIERS_EXIST.is_match(line) => {}
            _ => {
                info!("TextGrid declares no tiers");
                return TextGrid::assemble(global_start, global_end, Vec::new(), Vec::new());
            }
        }

        let line = expect_line(cursor, "tier count")?;
        let tier_count = count_field("size", line).ok_or_else(|| {
            preamble_error(cursor.line_number(), "missing whole-number `size`".to_string())
        })?;

        expect_marker(cursor, &ITEM_SECTION, "`item []` marker")?;

        let mut tiers = Vec::with_capacity(tier_count.min(MAX_PREALLOCATED_ENTRIES));
        let mut warnings = Vec::new();
        for _ in 0..tier_count {
            let tier = self.parse_tier(cursor, &mut warnings)?;
            debug!("Tier \"{}\" processed with {} entries", tier.name(), tier.len());
            tiers.push(tier);
        }

        if !warnings.is_empty() {
            warn!("{} record(s) were skipped while parsing", warnings.len());
        }
        info!(
            "Parsed TextGrid with {} tier(s) spanning {} to {}",
            tiers.len(),
            global_start,
            global_end
        );

        TextGrid::assemble(global_start, global_end, tiers, warnings)
    }

    fn parse_tier(
        &self,
        cursor: &mut LineCursor<'_>,
        warnings: &mut Vec<ParseWarning>,
    ) -> Result<Tier, TextGridError> {
        let header = read_tier_header(cursor)?;
        debug!(
            "Processing {} {} of tier \"{}\"...",
            header.declared_count,
            header.kind.record_field(),
            header.name
        );

        let mut entries = Vec::with_capacity(header.declared_count.min(MAX_PREALLOCATED_ENTRIES));
        for index in 1..=header.declared_count {
            let record = match header.kind {
                TierKind::IntervalTier => read_interval(cursor),
                TierKind::PointTier => read_point(cursor),
            };

            match record {
                Ok(entry) => entries.push(entry),
                Err(failure) if failure.truncated || self.policy == RecordPolicy::Strict => {
                    return Err(failure.into_error(&header.name, index));
                }
                Err(failure) => {
                    let warning = ParseWarning {
                        line: failure.line,
                        tier: header.name.clone(),
                        index,
                        reason: failure.reason,
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(Tier::new(header.name, header.kind, header.start, header.end, entries))
    }
}

impl TextGrid {
    /// Parse a TextGrid file with the lenient record policy
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TextGridError> {
        TextGridParser::default().parse_path(path)
    }

    /// Parse in-memory TextGrid content with the lenient record policy
    pub fn parse_str(content: &str) -> Result<Self, TextGridError> {
        TextGridParser::default().parse_str(content)
    }
}

impl std::str::FromStr for TextGrid {
    type Err = TextGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

fn expect_line<'a>(cursor: &mut LineCursor<'a>, expected: &str) -> Result<&'a str, TextGridError> {
    cursor.next_line().ok_or_else(|| {
        preamble_error(
            cursor.next_line_number(),
            format!("unexpected end of input, expected {}", expected),
        )
    })
}

fn expect_marker(cursor: &mut LineCursor<'_>, marker: &Regex, expected: &str) -> Result<(), TextGridError> {
    let line = expect_line(cursor, expected)?;
    if marker.is_match(line) {
        Ok(())
    } else {
        Err(preamble_error(cursor.line_number(), format!("expected {}", expected)))
    }
}

fn expect_numeric(cursor: &mut LineCursor<'_>, name: &str) -> Result<f64, TextGridError> {
    let line = expect_line(cursor, &format!("`{}`", name))?;
    numeric_field(name, line).ok_or_else(|| {
        preamble_error(cursor.line_number(), format!("missing numeric `{}`", name))
    })
}

fn preamble_error(line: usize, reason: String) -> TextGridError {
    TextGridError::MalformedPreamble { line, reason }
}
