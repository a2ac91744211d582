use crate::errors::{InvalidSlot, ScheduleError, ScheduleResult};
use crate::models::slot::ScheduleSlot;
use crate::models::time::TimeOfDay;

/// Partial update for a single slot in a [`ScheduleDraft`].
///
/// `room` and `quarter` are doubly optional: the outer `Option` says whether
/// the patch touches the field at all, the inner one is the new value.
#[derive(Debug, Clone, Default)]
pub struct SlotPatch {
    pub day_of_week: Option<u8>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub room: Option<Option<String>>,
    pub quarter: Option<Option<u8>>,
}

/// In-memory weekly schedule for one teaching group while it is being edited.
///
/// Instantiated from the persisted snapshot when an edit session opens,
/// mutated freely, then diffed against that snapshot on save. Slot order is
/// insertion order and carries no meaning; grouping by day is a projection.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDraft {
    slots: Vec<ScheduleSlot>,
    default_room: Option<String>,
    default_quarter: Option<u8>,
}

impl ScheduleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<ScheduleSlot>) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn default_room(&self) -> Option<&str> {
        self.default_room.as_deref()
    }

    pub fn default_quarter(&self) -> Option<u8> {
        self.default_quarter
    }

    /// Changes the sticky room default without touching existing slots.
    pub fn set_default_room(&mut self, room: Option<String>) {
        self.default_room = room;
    }

    /// Changes the sticky quarter default without touching existing slots.
    pub fn set_default_quarter(&mut self, quarter: Option<u8>) {
        self.default_quarter = quarter;
    }

    /// Appends an unsaved slot for `day_of_week`, pre-filled with the sticky
    /// defaults and the baseline 09:00-10:30 window. Returns its index.
    pub fn add_slot(&mut self, day_of_week: u8) -> usize {
        self.slots.push(ScheduleSlot {
            id: None,
            day_of_week,
            start_time: TimeOfDay::DEFAULT_START,
            end_time: TimeOfDay::DEFAULT_END,
            room: self.default_room.clone(),
            quarter: self.default_quarter,
        });
        self.slots.len() - 1
    }

    /// Applies `patch` to the slot at `index`.
    ///
    /// Times and room are scoped to that slot alone. Setting `quarter` is
    /// different: the editor exposes a single term picker for the whole
    /// schedule, so a quarter change rewrites the quarter on every slot and
    /// on the sticky default, not just the indexed one.
    pub fn update_slot(&mut self, index: usize, patch: SlotPatch) -> ScheduleResult<()> {
        let Some(slot) = self.slots.get_mut(index) else {
            return Err(ScheduleError::NotFound(format!(
                "schedule slot at index {index}"
            )));
        };
        if let Some(day) = patch.day_of_week {
            slot.day_of_week = day;
        }
        if let Some(start) = patch.start_time {
            slot.start_time = start;
        }
        if let Some(end) = patch.end_time {
            slot.end_time = end;
        }
        if let Some(room) = patch.room {
            slot.room = room;
        }
        if let Some(quarter) = patch.quarter {
            self.apply_quarter_to_all(quarter);
        }
        Ok(())
    }

    /// Removes and returns the slot at `index`; other slots are untouched.
    pub fn remove_slot(&mut self, index: usize) -> ScheduleResult<ScheduleSlot> {
        if index >= self.slots.len() {
            return Err(ScheduleError::NotFound(format!(
                "schedule slot at index {index}"
            )));
        }
        Ok(self.slots.remove(index))
    }

    /// Sets every slot's room and makes it the sticky default for new slots.
    pub fn apply_room_to_all(&mut self, room: Option<String>) {
        for slot in &mut self.slots {
            slot.room = room.clone();
        }
        self.default_room = room;
    }

    /// Sets every slot's quarter and makes it the sticky default for new
    /// slots.
    pub fn apply_quarter_to_all(&mut self, quarter: Option<u8>) {
        for slot in &mut self.slots {
            slot.quarter = quarter;
        }
        self.default_quarter = quarter;
    }

    /// Assigns `quarter` to every slot that has none and makes it the sticky
    /// default. Slots with an explicit quarter keep it.
    pub fn fill_missing_quarter(&mut self, quarter: u8) {
        for slot in &mut self.slots {
            if slot.quarter.is_none() {
                slot.quarter = Some(quarter);
            }
        }
        self.default_quarter = Some(quarter);
    }

    /// Detached copy of the slot list for diffing against later edits.
    pub fn snapshot(&self) -> Vec<ScheduleSlot> {
        self.slots.clone()
    }

    /// Slots meeting on `day_of_week`, with their draft indexes, in insertion
    /// order. Display-only; storage order is never rearranged.
    pub fn slots_for_day(&self, day_of_week: u8) -> Vec<(usize, &ScheduleSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.day_of_week == day_of_week)
            .collect()
    }

    /// Every slot whose end time is not strictly after its start time.
    pub fn invalid_time_ranges(&self) -> Vec<InvalidSlot> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.has_valid_times())
            .map(|(index, slot)| InvalidSlot {
                index,
                day_of_week: slot.day_of_week,
                start_time: slot.start_time,
                end_time: slot.end_time,
            })
            .collect()
    }
}
