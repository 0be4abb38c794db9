/*!
 * Read-only queries over a parsed `TextGrid`.
 */

use super::model::{Entry, LabelOccurrences, Span, TextGrid, Tier, TierKind};
use crate::errors::TextGridError;

impl TextGrid {
    /// Tier names with their kinds, in declaration order
    pub fn list_tiers(&self) -> Vec<(&str, TierKind)> {
        self.tiers()
            .iter()
            .map(|tier| (tier.name(), tier.kind()))
            .collect()
    }

    /// Look up a tier by name
    pub fn tier(&self, name: &str) -> Result<&Tier, TextGridError> {
        self.lookup(name)
            .ok_or_else(|| TextGridError::UnknownTier(name.to_string()))
    }

    /// All (boundary, label) entries of a tier, in file order
    pub fn tier_entries(&self, name: &str) -> Result<&[Entry], TextGridError> {
        Ok(self.tier(name)?.entries())
    }

    /// Declared upper bound of a tier
    pub fn tier_end(&self, name: &str) -> Result<f64, TextGridError> {
        Ok(self.tier(name)?.end())
    }

    pub fn tier_kind(&self, name: &str) -> Result<TierKind, TextGridError> {
        Ok(self.tier(name)?.kind())
    }

    /// Entries of a tier paired with their derived end times
    pub fn tier_spans(&self, name: &str) -> Result<Vec<Span<'_>>, TextGridError> {
        Ok(self.tier(name)?.spans())
    }

    /// Find every entry of `tier_name` labeled exactly `label`.
    ///
    /// The duration of a match runs to the next entry of the same tier, or to
    /// the tier end for the last entry. Returns `Ok(None)` when nothing
    /// matches.
    pub fn label_occurrences(
        &self,
        label: &str,
        tier_name: &str,
    ) -> Result<Option<LabelOccurrences>, TextGridError> {
        let tier = self.tier(tier_name)?;

        let (boundaries, durations): (Vec<f64>, Vec<f64>) = tier
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.label == label)
            .map(|(i, entry)| (entry.boundary, tier.end_of(i) - entry.boundary))
            .unzip();

        if boundaries.is_empty() {
            return Ok(None);
        }

        Ok(Some(LabelOccurrences {
            label: label.to_string(),
            tier: tier_name.to_string(),
            boundaries,
            durations,
        }))
    }

    /// First (label, boundary) of a tier
    pub fn first_entry(&self, tier_name: &str) -> Result<(&str, f64), TextGridError> {
        let tier = self.tier(tier_name)?;
        tier.entries()
            .first()
            .map(|entry| (entry.label.as_str(), entry.boundary))
            .ok_or_else(|| TextGridError::EmptyTier(tier_name.to_string()))
    }

    /// Last (label, boundary) of a tier
    pub fn last_entry(&self, tier_name: &str) -> Result<(&str, f64), TextGridError> {
        let tier = self.tier(tier_name)?;
        tier.entries()
            .last()
            .map(|entry| (entry.label.as_str(), entry.boundary))
            .ok_or_else(|| TextGridError::EmptyTier(tier_name.to_string()))
    }
}
