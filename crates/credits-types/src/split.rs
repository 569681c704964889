//! Split entries and ordered split sets.

use serde::{Deserialize, Serialize};

use crate::participant::{ParticipantId, Role};

/// One participant's share of a split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct SplitEntry {
    pub participant_id: ParticipantId,
    pub role: Role,
    /// Whole percent. Raw user input is stored unclamped, so this may sit
    /// outside `[0, 100]` until the split is validated.
    #[ts(type = "number")]
    pub percentage: i64,
}

impl SplitEntry {
    pub fn new(participant_id: ParticipantId, role: Role, percentage: i64) -> Self {
        Self {
            participant_id,
            role,
            percentage,
        }
    }
}

/// Ordered split, unique by participant.
///
/// Order is significant: the first entry absorbs the rounding remainder
/// whenever the split is recomputed evenly.
///
/// Deserialization rejects duplicate participants. The in-memory
/// constructors do not check; [`SplitSet::duplicates`] reports offenders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(try_from = "UncheckedEntries")]
pub struct SplitSet(Vec<SplitEntry>);

/// A participant listed more than once in a split.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("participant {0} appears more than once in the split")]
pub struct DuplicateEntry(pub ParticipantId);

impl SplitSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[SplitEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<SplitEntry> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SplitEntry> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SplitEntry> {
        self.0.get(index)
    }

    pub fn contains(&self, participant_id: &ParticipantId) -> bool {
        self.position(participant_id).is_some()
    }

    /// Index of the participant's entry, if present.
    pub fn position(&self, participant_id: &ParticipantId) -> Option<usize> {
        self.0
            .iter()
            .position(|e| &e.participant_id == participant_id)
    }

    /// Sum of all percentages, or `None` if unclamped input overflows it.
    pub fn total(&self) -> Option<i64> {
        self.0
            .iter()
            .try_fold(0i64, |acc, e| acc.checked_add(e.percentage))
    }

    /// Participants holding more than one entry, each listed once in order
    /// of first appearance.
    pub fn duplicates(&self) -> Vec<ParticipantId> {
        let mut seen: Vec<&ParticipantId> = Vec::with_capacity(self.0.len());
        let mut dups: Vec<ParticipantId> = Vec::new();
        for id in self.participants() {
            if seen.contains(&id) {
                if !dups.contains(id) {
                    dups.push(id.clone());
                }
            } else {
                seen.push(id);
            }
        }
        dups
    }

    pub fn percentages(&self) -> Vec<i64> {
        self.0.iter().map(|e| e.percentage).collect()
    }

    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.0.iter().map(|e| &e.participant_id)
    }
}

impl From<Vec<SplitEntry>> for SplitSet {
    fn from(entries: Vec<SplitEntry>) -> Self {
        Self(entries)
    }
}

/// Raw deserialized entries, checked for duplicates before becoming a
/// [`SplitSet`].
#[derive(Deserialize)]
#[serde(transparent)]
struct UncheckedEntries(Vec<SplitEntry>);

impl TryFrom<UncheckedEntries> for SplitSet {
    type Error = DuplicateEntry;

    fn try_from(UncheckedEntries(entries): UncheckedEntries) -> Result<Self, Self::Error> {
        let set = Self(entries);
        match set.duplicates().into_iter().next() {
            Some(id) => Err(DuplicateEntry(id)),
            None => Ok(set),
        }
    }
}

impl FromIterator<SplitEntry> for SplitSet {
    fn from_iter<I: IntoIterator<Item = SplitEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SplitSet {
    type Item = &'a SplitEntry;
    type IntoIter = std::slice::Iter<'a, SplitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, pct: i64) -> SplitEntry {
        SplitEntry::new(ParticipantId::from(id), Role::Main, pct)
    }

    #[test]
    fn test_total_and_lookup() {
        let set = SplitSet::from(vec![entry("a", 60), entry("b", 40)]);
        assert_eq!(set.total(), Some(100));
        assert_eq!(set.position(&"b".into()), Some(1));
        assert!(!set.contains(&"c".into()));
        assert_eq!(set.percentages(), vec![60, 40]);
    }

    #[test]
    fn test_total_with_unclamped_values() {
        let set = SplitSet::from(vec![entry("a", 250), entry("b", -150)]);
        assert_eq!(set.total(), Some(100));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let set = SplitSet::from(vec![entry("a", i64::MAX), entry("b", i64::MAX), entry("c", 102)]);
        assert_eq!(set.total(), None);

        let set = SplitSet::from(vec![entry("a", i64::MIN), entry("b", -1)]);
        assert_eq!(set.total(), None);
    }

    #[test]
    fn test_duplicates() {
        let set = SplitSet::from(vec![entry("a", 10), entry("b", 10), entry("a", 40), entry("a", 40)]);
        assert_eq!(set.duplicates(), vec![ParticipantId::from("a")]);
        assert!(SplitSet::from(vec![entry("a", 100)]).duplicates().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = serde_json::json!([
            {"participant_id": "a", "role": "main", "percentage": 50},
            {"participant_id": "a", "role": "featured", "percentage": 50}
        ]);
        let err = serde_json::from_value::<SplitSet>(json).expect_err("duplicate participant");
        assert!(err.to_string().contains("participant a appears more than once"));
    }

    #[test]
    fn test_serializes_as_array() {
        let set = SplitSet::from(vec![entry("a", 100)]);
        let json = serde_json::to_value(&set).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([{"participant_id": "a", "role": "main", "percentage": 100}])
        );
        let back: SplitSet = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, set);
    }
}
