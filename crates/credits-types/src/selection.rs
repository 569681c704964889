//! Upstream contributor selection.

use serde::{Deserialize, Serialize};

use crate::participant::{ParticipantId, Role};

/// Participants currently chosen as contributors, bucketed by role.
///
/// The selection control keeps the buckets disjoint, but nothing here
/// relies on that: a participant listed in both counts as main.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct SelectionSet {
    #[serde(default)]
    pub main: Vec<ParticipantId>,
    #[serde(default)]
    pub featured: Vec<ParticipantId>,
}

impl SelectionSet {
    pub fn new(main: Vec<ParticipantId>, featured: Vec<ParticipantId>) -> Self {
        Self { main, featured }
    }

    /// Selection order: main artists, then featured, first occurrence wins.
    pub fn ordered(&self) -> Vec<ParticipantId> {
        let mut out: Vec<ParticipantId> = Vec::with_capacity(self.main.len() + self.featured.len());
        for id in self.main.iter().chain(self.featured.iter()) {
            if !out.contains(id) {
                out.push(id.clone());
            }
        }
        out
    }

    /// Role the participant was selected under. Main wins over featured.
    pub fn role_of(&self, participant_id: &ParticipantId) -> Option<Role> {
        if self.main.contains(participant_id) {
            Some(Role::Main)
        } else if self.featured.contains(participant_id) {
            Some(Role::Featured)
        } else {
            None
        }
    }

    pub fn contains(&self, participant_id: &ParticipantId) -> bool {
        self.role_of(participant_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.featured.is_empty()
    }

    /// Number of distinct selected participants.
    pub fn len(&self) -> usize {
        self.ordered().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ParticipantId> {
        raw.iter().map(|s| ParticipantId::from(*s)).collect()
    }

    #[test]
    fn test_ordered_main_then_featured() {
        let sel = SelectionSet::new(ids(&["m1", "m2"]), ids(&["f1"]));
        assert_eq!(sel.ordered(), ids(&["m1", "m2", "f1"]));
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_ordered_dedups_overlap() {
        let sel = SelectionSet::new(ids(&["a", "b"]), ids(&["b", "c"]));
        assert_eq!(sel.ordered(), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_role_main_takes_precedence() {
        let sel = SelectionSet::new(ids(&["a"]), ids(&["a", "b"]));
        assert_eq!(sel.role_of(&"a".into()), Some(Role::Main));
        assert_eq!(sel.role_of(&"b".into()), Some(Role::Featured));
        assert_eq!(sel.role_of(&"z".into()), None);
    }

    #[test]
    fn test_missing_buckets_default_empty() {
        let sel: SelectionSet = serde_json::from_str(r#"{"main": ["a"]}"#).expect("deserialize");
        assert!(sel.featured.is_empty());
        assert!(!sel.is_empty());
        assert!(SelectionSet::default().is_empty());
    }
}
