use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use herald_domain::{
    Booking, DeliveryMethod, DeliveryReport, Metadata, Participant, TimeOffset, TimeUnit,
    WebhookReminder,
};
use serde::{Deserialize, Serialize};

/// Snapshot of the booking a notification is about, as clients send it.
/// Everything except the identifiers and the event window may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub uid: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: Option<ParticipantDTO>,
    pub attendees: Option<Vec<ParticipantDTO>>,
    pub location: Option<String>,
    pub additional_notes: Option<String>,
    pub responses: Option<Metadata>,
    pub metadata: Option<Metadata>,
    pub video_call_url: Option<String>,
}

impl BookingDTO {
    pub fn into_domain(self) -> Booking {
        Booking {
            id: Default::default(),
            reference: self.uid,
            title: self.title.unwrap_or_default(),
            event_type: self.event_type.unwrap_or_default(),
            start_time: self.start_time,
            end_time: self.end_time,
            organizer: self.organizer.unwrap_or_default().into_domain(),
            attendees: self
                .attendees
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.into_domain())
                .collect(),
            location: self.location,
            additional_notes: self.additional_notes,
            responses: self.responses,
            metadata: self.metadata.unwrap_or_default(),
            video_call_url: self.video_call_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDTO {
    pub name: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<Tz>,
    pub locale: Option<String>,
}

impl ParticipantDTO {
    pub fn into_domain(self) -> Participant {
        Participant {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            timezone: self.timezone,
            locale: self.locale,
        }
    }
}

/// Offset between the event window and the wanted delivery instant. The
/// unit is a free string, unknown units count as no unit at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpanDTO {
    pub time: Option<i64>,
    pub time_unit: Option<String>,
}

impl TimeSpanDTO {
    pub fn into_domain(self) -> TimeOffset {
        TimeOffset {
            amount: self.time,
            unit: self.time_unit.as_deref().and_then(TimeUnit::parse),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReminderDTO {
    pub booking_reference: String,
    pub workflow_step_id: i64,
    pub method: DeliveryMethod,
    pub scheduled_at: DateTime<Utc>,
    pub scheduled: bool,
}

impl WebhookReminderDTO {
    pub fn new(reminder: WebhookReminder) -> Self {
        Self {
            booking_reference: reminder.booking_reference,
            workflow_step_id: reminder.workflow_step_id,
            method: reminder.method,
            scheduled_at: reminder.scheduled_at,
            scheduled: reminder.scheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReportDTO {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeliveryReportDTO {
    pub fn new(report: DeliveryReport) -> Self {
        Self {
            success: report.success,
            status_code: report.status_code,
            message: report.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleOutcomeDTO {
    Skipped,
    Delivered,
    Scheduled,
}
