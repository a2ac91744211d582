use std::collections::HashSet;

use crate::models::slot::{ScheduleSlot, day_name};

/// One outbound mutation needed to bring the stored schedule in line with an
/// edited draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOperation {
    Create(ScheduleSlot),
    Update { id: i64, slot: ScheduleSlot },
    Delete { id: i64 },
}

impl SyncOperation {
    /// Short identity used in logs and failure reports.
    pub fn describe(&self) -> String {
        match self {
            SyncOperation::Create(slot) => format!(
                "create {} {}-{}",
                day_name(slot.day_of_week),
                slot.start_time,
                slot.end_time
            ),
            SyncOperation::Update { id, .. } => format!("update slot {id}"),
            SyncOperation::Delete { id } => format!("delete slot {id}"),
        }
    }
}

/// Diffs the edited slot list against the last persisted state.
///
/// Slots are matched by id only, never by content, so editing every field of
/// a slot while keeping its id stays an update. Id-bearing slots are always
/// re-sent as updates rather than field-diffed; an unchanged update is
/// idempotent. All deletes come first so a room or time swap between two
/// slots cannot transiently collide with a store-side uniqueness rule.
///
/// An empty `current` against a non-empty `previous` plans one delete per
/// previous slot; callers confirm that with the user before executing.
pub fn plan_sync(previous: &[ScheduleSlot], current: &[ScheduleSlot]) -> Vec<SyncOperation> {
    let current_ids: HashSet<i64> = current.iter().filter_map(|slot| slot.id).collect();

    let mut operations: Vec<SyncOperation> = previous
        .iter()
        .filter_map(|slot| slot.id)
        .filter(|id| !current_ids.contains(id))
        .map(|id| SyncOperation::Delete { id })
        .collect();

    for slot in current {
        match slot.id {
            Some(id) => operations.push(SyncOperation::Update {
                id,
                slot: slot.clone(),
            }),
            None => operations.push(SyncOperation::Create(slot.clone())),
        }
    }

    operations
}
