//! # credits-types
//!
//! Shared domain types for track credit allocation.
//!
//! A creative work credits its contributors in two parallel splits: the
//! songwriting ("work") split and the performance ("recording") split. Each
//! split is an ordered list of participants with an integer percentage.

pub mod participant;
pub mod selection;
pub mod split;
pub mod submission;

pub use participant::{ParticipantId, Role, SplitCategory};
pub use selection::SelectionSet;
pub use split::{DuplicateEntry, SplitEntry, SplitSet};
pub use submission::CreditSubmission;

/// Total a committed split must add up to.
pub const FULL_ALLOCATION: i64 = 100;
