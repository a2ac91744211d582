//! Traits for the remote storage collaborators.
//!
//! The slot store and academic-year store are plain REST services consumed
//! through these seams; the scheduling service is tested against mocks of
//! them rather than a live backend.

use async_trait::async_trait;
use eyre::Result;
use termtable_core::models::calendar::AcademicYear;
use termtable_core::models::slot::ScheduleSlot;

/// Persisted weekly-slot records, keyed by subject group.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// All persisted slots for one subject group.
    async fn list_slots(&self, subject_group: i64) -> Result<Vec<ScheduleSlot>>;

    /// Creates a slot and returns the stored record, id assigned.
    async fn create_slot(&self, subject_group: i64, slot: &ScheduleSlot) -> Result<ScheduleSlot>;

    /// Overwrites the slot with `id` and returns the stored record.
    async fn update_slot(&self, id: i64, slot: &ScheduleSlot) -> Result<ScheduleSlot>;

    /// Deletes the slot with `id`.
    async fn delete_slot(&self, id: i64) -> Result<()>;
}

/// Source of the administrator-maintained academic-year calendar.
#[async_trait]
pub trait AcademicYearStore: Send + Sync {
    /// The active academic year, or `None` when none is configured.
    async fn current_year(&self) -> Result<Option<AcademicYear>>;
}
