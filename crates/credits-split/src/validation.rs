//! Submission-time checks.
//!
//! Three rules gate a submission:
//!
//! - each non-empty split totals exactly 100, without overflow
//! - no participant holds two entries in the same split
//! - every selected participant appears in the work or the recording split
//!
//! Failures are values, never errors: the caller decides whether to block
//! or warn.

use std::fmt;

use serde::{Deserialize, Serialize};

use credits_types::{ParticipantId, SelectionSet, SplitCategory, SplitSet, FULL_ALLOCATION};

/// Message carried by a failed [`validate`].
pub const SUM_MESSAGE: &str = "sum must equal 100";

/// Outcome of checking a single split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// A reason a submission cannot go through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionIssue {
    /// A non-empty split does not total 100. `total` is `None` when the
    /// sum overflows.
    InvalidTotal {
        category: SplitCategory,
        total: Option<i64>,
    },
    /// A participant holds more than one entry in the same split.
    DuplicateParticipant {
        category: SplitCategory,
        participant_id: ParticipantId,
    },
    /// A selected participant has no entry in either split.
    Uncredited { participant_id: ParticipantId },
}

impl fmt::Display for SubmissionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionIssue::InvalidTotal {
                category,
                total: Some(total),
            } => write!(f, "{category} split: {SUM_MESSAGE}, got {total}"),
            SubmissionIssue::InvalidTotal {
                category,
                total: None,
            } => write!(f, "{category} split: {SUM_MESSAGE}, total overflows"),
            SubmissionIssue::DuplicateParticipant {
                category,
                participant_id,
            } => write!(f, "{category} split: {participant_id} is listed more than once"),
            SubmissionIssue::Uncredited { participant_id } => {
                write!(f, "{participant_id} is not credited in any split")
            }
        }
    }
}

/// Check the 100-sum rule for one split. An empty split passes; a sum that
/// overflows never does.
pub fn validate(split: &SplitSet) -> ValidationResult {
    if split.is_empty() || split.total() == Some(FULL_ALLOCATION) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(SUM_MESSAGE.to_string())
    }
}

/// Selected participants missing from both splits, in selection order.
pub fn uncredited(
    selection: &SelectionSet,
    work: &SplitSet,
    recording: &SplitSet,
) -> Vec<ParticipantId> {
    selection
        .ordered()
        .into_iter()
        .filter(|id| !work.contains(id) && !recording.contains(id))
        .collect()
}

/// Every issue that blocks submitting these splits.
pub fn submission_issues(
    selection: &SelectionSet,
    work: &SplitSet,
    recording: &SplitSet,
) -> Vec<SubmissionIssue> {
    let mut issues = Vec::new();

    for (category, split) in [(SplitCategory::Work, work), (SplitCategory::Recording, recording)] {
        if !validate(split).is_valid() {
            issues.push(SubmissionIssue::InvalidTotal {
                category,
                total: split.total(),
            });
        }
        issues.extend(split.duplicates().into_iter().map(|participant_id| {
            SubmissionIssue::DuplicateParticipant {
                category,
                participant_id,
            }
        }));
    }

    issues.extend(
        uncredited(selection, work, recording)
            .into_iter()
            .map(|participant_id| SubmissionIssue::Uncredited { participant_id }),
    );

    issues
}

/// Whether dropping `participant_id` from one split keeps it credited.
///
/// `other` is the parallel split. Participants outside the selection carry
/// no coverage requirement and may always be removed.
pub fn can_remove(
    participant_id: &ParticipantId,
    selection: &SelectionSet,
    other: &SplitSet,
) -> bool {
    !selection.contains(participant_id) || other.contains(participant_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use credits_types::{Role, SplitEntry};

    fn split(entries: &[(&str, i64)]) -> SplitSet {
        entries
            .iter()
            .map(|(id, pct)| SplitEntry::new((*id).into(), Role::Main, *pct))
            .collect()
    }

    fn selection(main: &[&str]) -> SelectionSet {
        SelectionSet::new(main.iter().map(|s| (*s).into()).collect(), Vec::new())
    }

    #[test]
    fn test_validate_short_sum() {
        let result = validate(&split(&[("a", 40), ("b", 40)]));
        assert_eq!(result, ValidationResult::Invalid("sum must equal 100".to_string()));
    }

    #[test]
    fn test_validate_exact_sum() {
        assert!(validate(&split(&[("a", 60), ("b", 40)])).is_valid());
    }

    #[test]
    fn test_validate_empty() {
        assert!(validate(&SplitSet::new()).is_valid());
    }

    #[test]
    fn test_validate_over_allocated() {
        assert!(!validate(&split(&[("a", 100), ("b", 1)])).is_valid());
    }

    #[test]
    fn test_validate_overflowing_sum() {
        // Wrapping would land on exactly 100.
        let overflowing = split(&[("a", i64::MAX), ("b", i64::MAX), ("c", 102)]);
        assert_eq!(
            validate(&overflowing),
            ValidationResult::Invalid("sum must equal 100".to_string())
        );

        let sel = selection(&["a", "b", "c"]);
        let issues = submission_issues(&sel, &overflowing, &SplitSet::new());
        assert_eq!(
            issues,
            vec![SubmissionIssue::InvalidTotal {
                category: SplitCategory::Work,
                total: None
            }]
        );
        assert_eq!(issues[0].to_string(), "work split: sum must equal 100, total overflows");
    }

    #[test]
    fn test_duplicate_participant_blocks_submission() {
        let sel = selection(&["a"]);
        let work = split(&[("a", 50), ("a", 50)]);
        let issues = submission_issues(&sel, &work, &SplitSet::new());
        assert_eq!(
            issues,
            vec![SubmissionIssue::DuplicateParticipant {
                category: SplitCategory::Work,
                participant_id: "a".into()
            }]
        );
        assert_eq!(issues[0].to_string(), "work split: a is listed more than once");
    }

    #[test]
    fn test_uncredited_in_selection_order() {
        let sel = selection(&["c", "a", "b"]);
        let work = split(&[("a", 100)]);
        let recording = SplitSet::new();
        let missing = uncredited(&sel, &work, &recording);
        assert_eq!(missing, vec![ParticipantId::from("c"), ParticipantId::from("b")]);
    }

    #[test]
    fn test_credit_in_either_split_is_enough() {
        let sel = selection(&["a", "b"]);
        let work = split(&[("a", 100)]);
        let recording = split(&[("b", 100)]);
        assert!(submission_issues(&sel, &work, &recording).is_empty());
    }

    #[test]
    fn test_submission_issues_collects_all() {
        let sel = selection(&["a", "b", "c"]);
        let work = split(&[("a", 50)]);
        let recording = split(&[("b", 90), ("a", 20)]);
        let issues = submission_issues(&sel, &work, &recording);
        assert_eq!(
            issues,
            vec![
                SubmissionIssue::InvalidTotal {
                    category: SplitCategory::Work,
                    total: Some(50)
                },
                SubmissionIssue::InvalidTotal {
                    category: SplitCategory::Recording,
                    total: Some(110)
                },
                SubmissionIssue::Uncredited {
                    participant_id: "c".into()
                },
            ]
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = SubmissionIssue::InvalidTotal {
            category: SplitCategory::Recording,
            total: Some(80),
        };
        assert_eq!(issue.to_string(), "recording split: sum must equal 100, got 80");
        let issue = SubmissionIssue::Uncredited {
            participant_id: "a".into(),
        };
        assert_eq!(issue.to_string(), "a is not credited in any split");
    }

    #[test]
    fn test_issue_serializes_tagged() {
        let issue = SubmissionIssue::Uncredited {
            participant_id: "a".into(),
        };
        let json = serde_json::to_value(&issue).expect("serialize");
        assert_eq!(json, serde_json::json!({"kind": "uncredited", "participant_id": "a"}));
    }

    #[test]
    fn test_can_remove() {
        let sel = selection(&["a"]);
        assert!(!can_remove(&"a".into(), &sel, &SplitSet::new()));
        assert!(can_remove(&"a".into(), &sel, &split(&[("a", 100)])));
        assert!(can_remove(&"guest".into(), &sel, &SplitSet::new()));
    }
}
