/*!
 * In-memory annotation model built by the TextGrid parser.
 *
 * A `TextGrid` owns its tiers in declaration order. Each tier owns its own
 * ordered entry list, and the document keeps a name index so queries never
 * scan the whole file. The model is immutable once the parser hands it out.
 */

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::errors::TextGridError;

/// Shape of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TierKind {
    /// Labeled spans (`class = "IntervalTier"`)
    IntervalTier,
    /// Labeled instants (`class = "TextTier"`)
    PointTier,
}

impl TierKind {
    /// Map the `class` text of a tier header to a kind
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "IntervalTier" => Some(Self::IntervalTier),
            "TextTier" => Some(Self::PointTier),
            _ => None,
        }
    }

    // @returns: Class name as written in TextGrid files
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::IntervalTier => "IntervalTier",
            Self::PointTier => "TextTier",
        }
    }

    // @returns: Field prefix used by the tier's records
    pub fn record_field(&self) -> &'static str {
        match self {
            Self::IntervalTier => "intervals",
            Self::PointTier => "points",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// A labeled boundary: interval start or point instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub boundary: f64,
    pub label: String,
}

impl Entry {
    pub fn new(boundary: f64, label: impl Into<String>) -> Self {
        Entry {
            boundary,
            label: label.into(),
        }
    }
}

/// An entry with its derived end time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span<'a> {
    pub label: &'a str,
    pub start: f64,
    pub end: f64,
}

impl Span<'_> {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// One named tier and its entries in file order
#[derive(Debug, Clone, Serialize)]
pub struct Tier {
    name: String,
    kind: TierKind,
    start: f64,
    end: f64,
    entries: Vec<Entry>,
}

impl Tier {
    pub(crate) fn new(name: String, kind: TierKind, start: f64, end: f64, entries: Vec<Entry>) -> Self {
        Tier {
            name,
            kind,
            start,
            end,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TierKind {
        self.kind
    }

    /// Declared lower time bound of the tier (its `xmin`)
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Declared upper time bound of the tier (its `xmax`)
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End time of the entry at `index`.
    ///
    /// This is the next entry's boundary, or the tier end for the last entry.
    pub fn end_of(&self, index: usize) -> f64 {
        self.entries
            .get(index + 1)
            .map(|next| next.boundary)
            .unwrap_or(self.end)
    }

    /// Every entry paired with its derived end time
    pub fn spans(&self) -> Vec<Span<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Span {
                label: &entry.label,
                start: entry.boundary,
                end: self.end_of(i),
            })
            .collect()
    }
}

/// A record skipped by the lenient parser
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number of the offending line
    pub line: usize,
    /// Tier the record belonged to
    pub tier: String,
    /// 1-based position of the record in the tier
    pub index: usize,
    /// Why the record was dropped
    pub reason: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: skipped record {} of tier \"{}\": {}",
            self.line, self.index, self.tier, self.reason
        )
    }
}

/// Occurrences of a label within one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelOccurrences {
    pub label: String,
    pub tier: String,
    /// Boundary of each match, in file order
    pub boundaries: Vec<f64>,
    /// Duration of each match, parallel to `boundaries`
    pub durations: Vec<f64>,
}

impl LabelOccurrences {
    pub fn count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn total_duration(&self) -> f64 {
        self.durations.iter().sum()
    }

    // @returns: (boundary, duration) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.boundaries.iter().copied().zip(self.durations.iter().copied())
    }
}

/// Parsed TextGrid annotation document
#[derive(Debug, Clone, Serialize)]
pub struct TextGrid {
    global_start: f64,
    global_end: f64,
    tiers: Vec<Tier>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<ParseWarning>,
}

impl TextGrid {
    /// Assemble a document from fully parsed tiers.
    ///
    /// Fails if two tiers share a name.
    pub(crate) fn assemble(
        global_start: f64,
        global_end: f64,
        tiers: Vec<Tier>,
        warnings: Vec<ParseWarning>,
    ) -> Result<Self, TextGridError> {
        let mut index = HashMap::with_capacity(tiers.len());
        for (position, tier) in tiers.iter().enumerate() {
            if index.insert(tier.name.clone(), position).is_some() {
                return Err(TextGridError::DuplicateTier(tier.name.clone()));
            }
        }

        Ok(TextGrid {
            global_start,
            global_end,
            tiers,
            index,
            warnings,
        })
    }

    /// Lower time bound of the whole document
    pub fn global_start(&self) -> f64 {
        self.global_start
    }

    /// Upper time bound of the whole document
    pub fn global_end(&self) -> f64 {
        self.global_end
    }

    /// Tiers in declaration order
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Records skipped while parsing (lenient policy only)
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Flattened `(tier_name, boundary, label)` view in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64, &str)> + '_ {
        self.tiers.iter().flat_map(|tier| {
            tier.entries
                .iter()
                .map(move |entry| (tier.name.as_str(), entry.boundary, entry.label.as_str()))
        })
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&Tier> {
        self.index.get(name).map(|&position| &self.tiers[position])
    }
}
