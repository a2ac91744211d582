//! Mock stores for exercising the scheduling service without a network.

use async_trait::async_trait;
use mockall::mock;
use termtable_core::models::calendar::AcademicYear;
use termtable_core::models::slot::ScheduleSlot;

use crate::stores::{AcademicYearStore, SlotStore};

mock! {
    pub SlotApi {}

    #[async_trait]
    impl SlotStore for SlotApi {
        async fn list_slots(&self, subject_group: i64) -> eyre::Result<Vec<ScheduleSlot>>;
        async fn create_slot(&self, subject_group: i64, slot: &ScheduleSlot) -> eyre::Result<ScheduleSlot>;
        async fn update_slot(&self, id: i64, slot: &ScheduleSlot) -> eyre::Result<ScheduleSlot>;
        async fn delete_slot(&self, id: i64) -> eyre::Result<()>;
    }
}

mock! {
    pub YearApi {}

    #[async_trait]
    impl AcademicYearStore for YearApi {
        async fn current_year(&self) -> eyre::Result<Option<AcademicYear>>;
    }
}
