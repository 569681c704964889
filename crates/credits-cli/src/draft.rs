//! Credit drafts: a selection plus the edits made on top of it.
//!
//! ```json
//! {
//!   "selection": { "main": ["a"], "featured": ["b"] },
//!   "edits": [
//!     { "op": "set_percentage", "category": "work", "index": 0, "input": "70" },
//!     { "op": "set_percentage", "category": "work", "index": 1, "input": "30" }
//!   ]
//! }
//! ```

use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use credits_split::{TrackCredits, ValidationPolicy};
use credits_types::{ParticipantId, Role, SelectionSet, SplitCategory};

/// A selection and an ordered list of edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub selection: SelectionSet,
    #[serde(default)]
    pub edits: Vec<Edit>,
}

/// One user edit against a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    Add {
        category: SplitCategory,
        participant_id: ParticipantId,
        #[serde(default = "default_role")]
        role: Role,
    },
    Remove {
        category: SplitCategory,
        index: usize,
    },
    SetPercentage {
        category: SplitCategory,
        index: usize,
        /// Raw field text; coerced the same way the form does.
        input: String,
    },
    Replace {
        category: SplitCategory,
        index: usize,
        participant_id: ParticipantId,
        #[serde(default = "default_role")]
        role: Role,
    },
    Rebalance {
        category: SplitCategory,
    },
}

fn default_role() -> Role {
    Role::Featured
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Add {
                category,
                participant_id,
                ..
            } => write!(f, "add {participant_id} to {category}"),
            Edit::Remove { category, index } => write!(f, "remove {category}[{index}]"),
            Edit::SetPercentage {
                category,
                index,
                input,
            } => write!(f, "set {category}[{index}] to {input:?}"),
            Edit::Replace {
                category,
                index,
                participant_id,
                ..
            } => write!(f, "replace {category}[{index}] with {participant_id}"),
            Edit::Rebalance { category } => write!(f, "rebalance {category}"),
        }
    }
}

impl Edit {
    /// Apply this edit to the credits.
    pub fn apply(&self, credits: &mut TrackCredits) -> credits_split::Result<()> {
        match self {
            Edit::Add {
                category,
                participant_id,
                role,
            } => credits.add_participant(*category, participant_id.clone(), *role),
            Edit::Remove { category, index } => credits.remove_participant(*category, *index),
            Edit::SetPercentage {
                category,
                index,
                input,
            } => credits.set_percentage_input(*category, *index, input),
            Edit::Replace {
                category,
                index,
                participant_id,
                role,
            } => credits.replace_participant(*category, *index, participant_id.clone(), *role),
            Edit::Rebalance { category } => {
                credits.rebalance(*category);
                Ok(())
            }
        }
    }
}

impl Draft {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parsing credit draft")
    }

    /// Build credits from the selection and replay every edit in order.
    ///
    /// Stops at the first edit that fails.
    pub fn replay(&self, policy: ValidationPolicy) -> anyhow::Result<TrackCredits> {
        let mut credits = TrackCredits::new(policy);
        credits.set_selection(self.selection.clone());

        for (n, edit) in self.edits.iter().enumerate() {
            tracing::debug!(index = n, %edit, "applying edit");
            edit.apply(&mut credits)
                .with_context(|| format!("edit #{n} ({edit}) failed"))?;
        }

        Ok(credits)
    }
}
