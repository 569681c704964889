//! # credits-split
//!
//! Percentage allocation for track credits.
//!
//! Splits are recomputed evenly whenever the contributor selection changes,
//! then edited by hand until submission. A committed split must total 100,
//! and every selected participant must be credited in at least one of the
//! work and recording splits.
//!
//! ## Modules
//!
//! - [`allocator`] — Pure split transformations (initialize, add, remove, edit)
//! - [`validation`] — Sum and cross-split coverage checks
//! - [`input`] — Coercion of raw percentage text
//! - [`policy`] — When per-entry validation runs
//! - [`credits`] — Owned credit state for one work

pub mod allocator;
pub mod credits;
pub mod input;
pub mod policy;
pub mod validation;

use credits_types::{ParticipantId, SplitCategory};

pub use credits::TrackCredits;
pub use policy::ValidationPolicy;
pub use validation::{SubmissionIssue, ValidationResult};

/// Error types for split operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Participant already has an entry in this split.
    #[error("participant {participant_id} is already in the split")]
    DuplicateParticipant {
        /// The duplicated participant.
        participant_id: ParticipantId,
    },

    /// Entry index past the end of the split.
    #[error("split index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of entries in the split.
        len: usize,
    },

    /// Percentage outside `[0, 100]` under the eager policy.
    #[error("percentage {value} is outside 0..=100")]
    PercentageOutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// The participant would no longer be credited in any split.
    #[error("{participant_id} is only credited in the {category} split and cannot be removed from it")]
    SoleCredit {
        /// The participant that would lose its last credit.
        participant_id: ParticipantId,
        /// The split the removal was attempted on.
        category: SplitCategory,
    },

    /// Submission blocked by validation.
    #[error("submission rejected with {} issue(s)", .0.len())]
    Rejected(Vec<SubmissionIssue>),
}

/// Convenience result type for split operations.
pub type Result<T> = std::result::Result<T, SplitError>;
