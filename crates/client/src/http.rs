//! HTTP client for the timetable storage and academic-year services.
//!
//! Thin REST consumer: times go out as `HH:MM` and come back as `HH:MM[:SS]`
//! (the lenient serde impl on `TimeOfDay` covers both directions), and
//! `room`/`quarter` are sent as explicit `null` when cleared so a PATCH can
//! blank them.

use async_trait::async_trait;
use eyre::{Result, WrapErr, bail};
use serde::Serialize;
use termtable_core::models::calendar::AcademicYear;
use termtable_core::models::slot::ScheduleSlot;
use termtable_core::models::time::TimeOfDay;

use crate::config::ClientConfig;
use crate::stores::{AcademicYearStore, SlotStore};

/// Client for the schedule-slot and academic-year REST endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

/// Request body for creating a slot.
#[derive(Serialize)]
struct CreateSlotBody<'a> {
    subject_group: i64,
    day_of_week: u8,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    room: Option<&'a str>,
    quarter: Option<u8>,
}

/// Request body for overwriting a slot.
#[derive(Serialize)]
struct UpdateSlotBody<'a> {
    day_of_week: u8,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    room: Option<&'a str>,
    quarter: Option<u8>,
}

impl ApiClient {
    /// Creates a client against `config.base_url` with the configured
    /// request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("failed to build HTTP client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("storage service returned {}: {}", status, body);
    }
    Ok(resp)
}

#[async_trait]
impl SlotStore for ApiClient {
    async fn list_slots(&self, subject_group: i64) -> Result<Vec<ScheduleSlot>> {
        tracing::debug!("Listing slots for subject group {}", subject_group);

        let url = format!(
            "{}/schedule-slots/?subject_group={}",
            self.base_url, subject_group
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .wrap_err("failed to list schedule slots")?;
        let resp = ensure_success(resp).await?;

        resp.json().await.wrap_err("failed to parse schedule slots")
    }

    async fn create_slot(&self, subject_group: i64, slot: &ScheduleSlot) -> Result<ScheduleSlot> {
        tracing::debug!(
            "Creating slot: group={}, day={}, {}-{}",
            subject_group,
            slot.day_of_week,
            slot.start_time,
            slot.end_time
        );

        let url = format!("{}/schedule-slots/", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&CreateSlotBody {
                subject_group,
                day_of_week: slot.day_of_week,
                start_time: slot.start_time,
                end_time: slot.end_time,
                room: slot.room.as_deref(),
                quarter: slot.quarter,
            })
            .send()
            .await
            .wrap_err("failed to create schedule slot")?;
        let resp = ensure_success(resp).await?;

        resp.json()
            .await
            .wrap_err("failed to parse created schedule slot")
    }

    async fn update_slot(&self, id: i64, slot: &ScheduleSlot) -> Result<ScheduleSlot> {
        tracing::debug!("Updating slot {}", id);

        let url = format!("{}/schedule-slots/{}/", self.base_url, id);
        let resp = self
            .http
            .patch(&url)
            .json(&UpdateSlotBody {
                day_of_week: slot.day_of_week,
                start_time: slot.start_time,
                end_time: slot.end_time,
                room: slot.room.as_deref(),
                quarter: slot.quarter,
            })
            .send()
            .await
            .wrap_err("failed to update schedule slot")?;
        let resp = ensure_success(resp).await?;

        resp.json()
            .await
            .wrap_err("failed to parse updated schedule slot")
    }

    async fn delete_slot(&self, id: i64) -> Result<()> {
        tracing::debug!("Deleting slot {}", id);

        let url = format!("{}/schedule-slots/{}/", self.base_url, id);
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .wrap_err("failed to delete schedule slot")?;
        ensure_success(resp).await?;

        Ok(())
    }
}

#[async_trait]
impl AcademicYearStore for ApiClient {
    async fn current_year(&self) -> Result<Option<AcademicYear>> {
        tracing::debug!("Fetching active academic year");

        let url = format!("{}/academic-years/current/", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .wrap_err("failed to fetch academic year")?;

        // No active year is a normal state, not a failure.
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = ensure_success(resp).await?;

        let year = resp.json().await.wrap_err("failed to parse academic year")?;
        Ok(Some(year))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing::Level;

    use super::*;

    #[test]
    fn slot_bodies_send_times_without_seconds_and_explicit_nulls() {
        let body = CreateSlotBody {
            subject_group: 12,
            day_of_week: 2,
            start_time: TimeOfDay::new(9, 5),
            end_time: TimeOfDay::new(10, 30),
            room: None,
            quarter: Some(3),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "subject_group": 12,
                "day_of_week": 2,
                "start_time": "09:05",
                "end_time": "10:30",
                "room": null,
                "quarter": 3,
            })
        );
    }

    #[test]
    fn update_bodies_clear_room_and_quarter_with_nulls() {
        let body = UpdateSlotBody {
            day_of_week: 4,
            start_time: TimeOfDay::new(13, 0),
            end_time: TimeOfDay::new(14, 30),
            room: Some("101"),
            quarter: None,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "day_of_week": 4,
                "start_time": "13:00",
                "end_time": "14:30",
                "room": "101",
                "quarter": null,
            })
        );
    }

    #[test]
    fn records_parse_with_second_precision_times() {
        let record: ScheduleSlot = serde_json::from_value(json!({
            "id": 44,
            "subject_group": 12,
            "day_of_week": 0,
            "start_time": "08:15:30",
            "end_time": "09:45:00",
            "room": null,
            "quarter": null,
        }))
        .unwrap();

        assert_eq!(record.id, Some(44));
        assert_eq!(record.start_time, TimeOfDay::new(8, 15));
        assert_eq!(record.end_time, TimeOfDay::new(9, 45));
        assert_eq!(record.room, None);
        assert_eq!(record.quarter, None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout: 5,
            log_level: Level::INFO,
        };

        let client = ApiClient::new(&config).unwrap();

        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
