//! Frozen credit payload handed to the submission sink.

use serde::{Deserialize, Serialize};

use crate::selection::SelectionSet;
use crate::split::SplitSet;
use crate::participant::SplitCategory;

/// Validated credits for a work, ready to be attached to a creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct CreditSubmission {
    pub selection: SelectionSet,
    pub work_split: SplitSet,
    pub recording_split: SplitSet,
}

impl CreditSubmission {
    pub fn split(&self, category: SplitCategory) -> &SplitSet {
        match category {
            SplitCategory::Work => &self.work_split,
            SplitCategory::Recording => &self.recording_split,
        }
    }
}
