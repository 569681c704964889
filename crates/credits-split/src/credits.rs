//! Owned credit state for one work.
//!
//! [`TrackCredits`] holds the selection and both parallel splits together so
//! that every transition sees, and preserves, a consistent view. All edits go
//! through the methods here; the splits are never mutated from outside.

use credits_types::{
    CreditSubmission, ParticipantId, Role, SelectionSet, SplitCategory, SplitSet,
};

use crate::allocator;
use crate::input::parse_percentage_input;
use crate::policy::ValidationPolicy;
use crate::validation::{self, SubmissionIssue};
use crate::{Result, SplitError};

/// Selection plus work and recording splits for a single work.
#[derive(Clone, Debug, Default)]
pub struct TrackCredits {
    selection: SelectionSet,
    work: SplitSet,
    recording: SplitSet,
    policy: ValidationPolicy,
}

impl TrackCredits {
    /// Empty credits with the given validation policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn split(&self, category: SplitCategory) -> &SplitSet {
        match category {
            SplitCategory::Work => &self.work,
            SplitCategory::Recording => &self.recording,
        }
    }

    /// Replace the selection and reset both splits to an even allocation.
    ///
    /// Manual edits made before the change are discarded.
    pub fn set_selection(&mut self, selection: SelectionSet) {
        let split = allocator::initialize_from_selection(&selection);
        self.work = split.clone();
        self.recording = split;
        self.selection = selection;

        tracing::info!(
            participants = self.work.len(),
            "credits reset from selection"
        );
    }

    /// Append a participant at 0% to one split.
    ///
    /// # Errors
    ///
    /// - [`SplitError::DuplicateParticipant`] if already present in that split
    pub fn add_participant(
        &mut self,
        category: SplitCategory,
        participant_id: ParticipantId,
        role: Role,
    ) -> Result<()> {
        let next = allocator::add_entry(self.split(category), participant_id, role)?;
        self.commit(category, next);
        Ok(())
    }

    /// Remove the entry at `index` and recompute that split evenly.
    ///
    /// # Errors
    ///
    /// - [`SplitError::IndexOutOfRange`] if `index` is past the end
    /// - [`SplitError::SoleCredit`] if the participant is selected and has no
    ///   entry in the parallel split
    pub fn remove_participant(&mut self, category: SplitCategory, index: usize) -> Result<()> {
        if let Some(entry) = self.split(category).get(index) {
            self.ensure_credited_elsewhere(category, &entry.participant_id)?;
        }
        let next = allocator::redistribute_after_removal(self.split(category), index)?;
        self.commit(category, next);
        Ok(())
    }

    /// Swap the participant at `index` for another, keeping its share.
    ///
    /// # Errors
    ///
    /// - [`SplitError::IndexOutOfRange`] if `index` is past the end
    /// - [`SplitError::DuplicateParticipant`] if the incoming participant holds
    ///   another entry in that split
    /// - [`SplitError::SoleCredit`] if the outgoing participant would lose its
    ///   only credit
    pub fn replace_participant(
        &mut self,
        category: SplitCategory,
        index: usize,
        participant_id: ParticipantId,
        role: Role,
    ) -> Result<()> {
        if let Some(entry) = self.split(category).get(index) {
            if entry.participant_id != participant_id {
                self.ensure_credited_elsewhere(category, &entry.participant_id)?;
            }
        }
        let next =
            allocator::replace_participant(self.split(category), index, participant_id, role)?;
        self.commit(category, next);
        Ok(())
    }

    /// Store a percentage for the entry at `index`.
    ///
    /// # Errors
    ///
    /// - [`SplitError::PercentageOutOfRange`] under the eager policy
    /// - [`SplitError::IndexOutOfRange`] if `index` is past the end
    pub fn set_percentage(&mut self, category: SplitCategory, index: usize, value: i64) -> Result<()> {
        self.policy.check_percentage(value)?;
        let next = allocator::set_percentage(self.split(category), index, value)?;
        self.commit(category, next);
        Ok(())
    }

    /// Store a percentage typed into a text field.
    ///
    /// See [`parse_percentage_input`] for the coercion rules.
    pub fn set_percentage_input(
        &mut self,
        category: SplitCategory,
        index: usize,
        raw: &str,
    ) -> Result<()> {
        self.set_percentage(category, index, parse_percentage_input(raw))
    }

    /// Reset one split to an even allocation over its current entries.
    pub fn rebalance(&mut self, category: SplitCategory) {
        let next = allocator::rebalance(self.split(category));
        self.commit(category, next);
    }

    /// Everything that currently blocks submission.
    pub fn issues(&self) -> Vec<SubmissionIssue> {
        validation::submission_issues(&self.selection, &self.work, &self.recording)
    }

    /// Validate and freeze the credits into a submission payload.
    ///
    /// # Errors
    ///
    /// - [`SplitError::Rejected`] carrying every outstanding issue
    pub fn submit(&self) -> Result<CreditSubmission> {
        let issues = self.issues();
        if !issues.is_empty() {
            tracing::warn!(issues = issues.len(), "credit submission rejected");
            return Err(SplitError::Rejected(issues));
        }

        tracing::info!(
            work = self.work.len(),
            recording = self.recording.len(),
            "credits submitted"
        );

        Ok(CreditSubmission {
            selection: self.selection.clone(),
            work_split: self.work.clone(),
            recording_split: self.recording.clone(),
        })
    }

    fn ensure_credited_elsewhere(
        &self,
        category: SplitCategory,
        participant_id: &ParticipantId,
    ) -> Result<()> {
        let other = self.split(category.other());
        if validation::can_remove(participant_id, &self.selection, other) {
            Ok(())
        } else {
            Err(SplitError::SoleCredit {
                participant_id: participant_id.clone(),
                category,
            })
        }
    }

    fn commit(&mut self, category: SplitCategory, next: SplitSet) {
        if self.policy == ValidationPolicy::Eager {
            tracing::debug!(
                %category,
                total = ?next.total(),
                valid = validation::validate(&next).is_valid(),
                "split updated"
            );
        }
        match category {
            SplitCategory::Work => self.work = next,
            SplitCategory::Recording => self.recording = next,
        }
    }
}
