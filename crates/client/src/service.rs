//! Scheduling facade: loads a group's weekly schedule into an editable
//! session, validates it, and replays the edits against the storage service.

use termtable_core::draft::ScheduleDraft;
use termtable_core::errors::{ScheduleError, ScheduleResult};
use termtable_core::models::calendar;
use termtable_core::models::slot::ScheduleSlot;
use termtable_core::sync::{SyncOperation, plan_sync};

use crate::stores::{AcademicYearStore, SlotStore};

/// One editing session over a group's persisted weekly schedule.
///
/// Holds the draft being mutated and the snapshot the next save will be
/// diffed against. Dropping the session cancels the edit; nothing has been
/// sent yet.
#[derive(Debug)]
pub struct EditSession {
    group_id: i64,
    pub draft: ScheduleDraft,
    snapshot: Vec<ScheduleSlot>,
}

impl EditSession {
    pub fn group_id(&self) -> i64 {
        self.group_id
    }

    /// Last known persisted state.
    pub fn snapshot(&self) -> &[ScheduleSlot] {
        &self.snapshot
    }

    /// True when saving would delete every persisted slot for the group.
    /// Callers are expected to confirm with the user before saving such a
    /// session; the save itself will not refuse it.
    pub fn clears_existing_schedule(&self) -> bool {
        self.draft.is_empty() && !self.snapshot.is_empty()
    }
}

/// Counts of executed operations from a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveSummary {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

/// Orchestrates the quarter calendar, the schedule draft, and the sync
/// planner against the remote stores.
pub struct ScheduleService<S, Y> {
    slots: S,
    years: Y,
}

impl<S: SlotStore, Y: AcademicYearStore> ScheduleService<S, Y> {
    pub fn new(slots: S, years: Y) -> Self {
        Self { slots, years }
    }

    /// Opens an edit session for `group_id` from the persisted slots.
    ///
    /// When none of the loaded slots is scoped to a quarter, the current
    /// quarter (if the calendar yields one) becomes the session default and
    /// is filled into every slot; an explicitly scoped slot always keeps its
    /// quarter. An unreachable or unconfigured calendar leaves the slots
    /// unscoped and is only logged.
    pub async fn load_for_group(&self, group_id: i64) -> ScheduleResult<EditSession> {
        let persisted = self
            .slots
            .list_slots(group_id)
            .await
            .map_err(ScheduleError::Storage)?;
        tracing::debug!("Loaded {} slot(s) for group {}", persisted.len(), group_id);

        let mut draft = ScheduleDraft::from_slots(persisted.clone());
        if draft.slots().iter().all(|slot| slot.quarter.is_none()) {
            match self.years.current_year().await {
                Ok(year) => {
                    if let Some(quarter) = calendar::current_quarter(year.as_ref()) {
                        draft.fill_missing_quarter(quarter);
                    }
                }
                Err(err) => {
                    tracing::warn!("Academic year unavailable, leaving slots unscoped: {err}");
                }
            }
        }

        Ok(EditSession {
            group_id,
            draft,
            snapshot: persisted,
        })
    }

    /// Checks every draft slot's time range. On failure the error names each
    /// offending slot, and no network call is made.
    pub fn validate(&self, draft: &ScheduleDraft) -> ScheduleResult<()> {
        let invalid = draft.invalid_time_ranges();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidTimeRanges(invalid))
        }
    }

    /// Persists the session's edits.
    ///
    /// Operations run strictly in sequence, every delete before any create
    /// or update. The batch is not transactional: when operation `k` fails,
    /// operations before it stand, none after it are attempted, and the
    /// error identifies `k`; callers should reload rather than assume a
    /// consistent result. On full success the snapshot and draft are
    /// replaced with the canonical records the store returned, keeping the
    /// sticky defaults.
    pub async fn save(&self, session: &mut EditSession) -> ScheduleResult<SaveSummary> {
        self.validate(&session.draft)?;

        let operations = plan_sync(&session.snapshot, &session.draft.snapshot());
        tracing::debug!(
            "Syncing group {}: {} operation(s)",
            session.group_id,
            operations.len()
        );

        let mut summary = SaveSummary::default();
        let mut persisted = Vec::new();
        for (index, operation) in operations.into_iter().enumerate() {
            let result = match &operation {
                SyncOperation::Delete { id } => self.slots.delete_slot(*id).await.map(|()| None),
                SyncOperation::Create(slot) => self
                    .slots
                    .create_slot(session.group_id, slot)
                    .await
                    .map(Some),
                SyncOperation::Update { id, slot } => {
                    self.slots.update_slot(*id, slot).await.map(Some)
                }
            };
            match result {
                Ok(Some(record)) => {
                    if matches!(operation, SyncOperation::Create(_)) {
                        summary.created += 1;
                    } else {
                        summary.updated += 1;
                    }
                    persisted.push(record);
                }
                Ok(None) => summary.deleted += 1,
                Err(source) => {
                    return Err(ScheduleError::SyncFailed {
                        index,
                        operation: operation.describe(),
                        source,
                    });
                }
            }
        }

        // Re-seed the session so a follow-up edit reconciles against what
        // the store now holds.
        let default_room = session.draft.default_room().map(str::to_string);
        let default_quarter = session.draft.default_quarter();
        session.snapshot = persisted.clone();
        session.draft = ScheduleDraft::from_slots(persisted);
        session.draft.set_default_room(default_room);
        session.draft.set_default_quarter(default_quarter);

        Ok(summary)
    }
}
