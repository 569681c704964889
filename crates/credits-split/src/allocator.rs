//! Split allocation.
//!
//! Every recompute is an even split with the rounding remainder awarded to
//! the first entry:
//!
//! ```text
//! base      = 100 / n
//! remainder = 100 - base * n
//! shares    = [base + remainder, base, base, ...]
//! ```
//!
//! The result always totals exactly 100 and depends only on entry order.
//! All functions here are pure: they take a split and return a new one.

use credits_types::{ParticipantId, Role, SelectionSet, SplitEntry, SplitSet, FULL_ALLOCATION};

use crate::{Result, SplitError};

/// Even shares of [`FULL_ALLOCATION`] for `n` entries, remainder first.
///
/// Returns an empty vector for `n == 0`.
pub fn even_split(n: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    let count = n as i64;
    let base = FULL_ALLOCATION / count;
    let remainder = FULL_ALLOCATION - base * count;

    let mut shares = vec![base; n];
    shares[0] += remainder;
    shares
}

/// Build an evenly split set over `participants` in the given order.
///
/// `role_of` supplies each entry's role.
pub fn initialize_from_ids<F>(participants: &[ParticipantId], role_of: F) -> SplitSet
where
    F: Fn(&ParticipantId) -> Role,
{
    even_split(participants.len())
        .into_iter()
        .zip(participants)
        .map(|(pct, id)| SplitEntry::new(id.clone(), role_of(id), pct))
        .collect()
}

/// Reset a split from the current selection.
///
/// Entries follow [`SelectionSet::ordered`]; roles come from
/// [`SelectionSet::role_of`], so a participant in both buckets is main.
pub fn initialize_from_selection(selection: &SelectionSet) -> SplitSet {
    let participants = selection.ordered();
    let split = initialize_from_ids(&participants, |id| {
        selection.role_of(id).unwrap_or(Role::Featured)
    });

    tracing::debug!(
        participants = split.len(),
        shares = ?split.percentages(),
        "split initialized from selection"
    );

    split
}

/// Drop the entry at `removed_index` and recompute the remainder evenly.
///
/// This is a full recompute, not a proportional hand-off of the removed
/// share. Removing the last entry yields an empty split.
///
/// # Errors
///
/// - [`SplitError::IndexOutOfRange`] if `removed_index` is past the end
pub fn redistribute_after_removal(current: &SplitSet, removed_index: usize) -> Result<SplitSet> {
    check_index(current, removed_index)?;

    let mut remaining = current.clone().into_entries();
    let removed = remaining.remove(removed_index);

    let split = reassign_evenly(remaining);

    tracing::debug!(
        removed = %removed.participant_id,
        remaining = split.len(),
        shares = ?split.percentages(),
        "split redistributed after removal"
    );

    Ok(split)
}

/// Append a participant with a 0% share.
///
/// The split is left unbalanced; callers follow up with [`rebalance`] or
/// manual edits.
///
/// # Errors
///
/// - [`SplitError::DuplicateParticipant`] if the participant is already present
pub fn add_entry(current: &SplitSet, participant_id: ParticipantId, role: Role) -> Result<SplitSet> {
    check_absent(current, &participant_id)?;

    tracing::debug!(participant = %participant_id, %role, "split entry added");

    let mut entries = current.clone().into_entries();
    entries.push(SplitEntry::new(participant_id, role, 0));
    Ok(SplitSet::from(entries))
}

/// Overwrite the percentage at `index` with `value`, unclamped.
///
/// # Errors
///
/// - [`SplitError::IndexOutOfRange`] if `index` is past the end
pub fn set_percentage(current: &SplitSet, index: usize, value: i64) -> Result<SplitSet> {
    check_index(current, index)?;

    let mut entries = current.clone().into_entries();
    entries[index].percentage = value;

    tracing::debug!(
        participant = %entries[index].participant_id,
        value,
        "split percentage set"
    );

    Ok(SplitSet::from(entries))
}

/// Recompute an even split over the existing entries, keeping order and roles.
pub fn rebalance(current: &SplitSet) -> SplitSet {
    let split = reassign_evenly(current.clone().into_entries());
    tracing::debug!(shares = ?split.percentages(), "split rebalanced");
    split
}

/// Swap the participant at `index` for another, keeping the share.
///
/// Replacing a participant with itself only updates the role.
///
/// # Errors
///
/// - [`SplitError::IndexOutOfRange`] if `index` is past the end
/// - [`SplitError::DuplicateParticipant`] if the incoming participant already
///   holds a different entry
pub fn replace_participant(
    current: &SplitSet,
    index: usize,
    participant_id: ParticipantId,
    role: Role,
) -> Result<SplitSet> {
    check_index(current, index)?;
    if let Some(existing) = current.position(&participant_id) {
        if existing != index {
            return Err(SplitError::DuplicateParticipant { participant_id });
        }
    }

    let mut entries = current.clone().into_entries();
    let outgoing = std::mem::replace(&mut entries[index].participant_id, participant_id);
    entries[index].role = role;

    tracing::debug!(
        outgoing = %outgoing,
        incoming = %entries[index].participant_id,
        percentage = entries[index].percentage,
        "split participant replaced"
    );

    Ok(SplitSet::from(entries))
}

fn reassign_evenly(mut entries: Vec<SplitEntry>) -> SplitSet {
    let shares = even_split(entries.len());
    for (entry, share) in entries.iter_mut().zip(shares) {
        entry.percentage = share;
    }
    SplitSet::from(entries)
}

fn check_index(current: &SplitSet, index: usize) -> Result<()> {
    if index >= current.len() {
        return Err(SplitError::IndexOutOfRange {
            index,
            len: current.len(),
        });
    }
    Ok(())
}

fn check_absent(current: &SplitSet, participant_id: &ParticipantId) -> Result<()> {
    if current.contains(participant_id) {
        return Err(SplitError::DuplicateParticipant {
            participant_id: participant_id.clone(),
        });
    }
    Ok(())
}
