use crate::shared::entity::{Entity, ID};
use crate::shared::metadata::Metadata;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A `Booking` is the snapshot of the domain event a notification is about,
/// captured at the moment of scheduling. It carries everything needed to
/// build a payload so that no lookup against the booking owner is needed,
/// neither at scheduling time nor when a deferred reminder matures.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    /// External identifier shared with the caller, e.g. the booking uid
    pub reference: String,
    pub title: String,
    /// Name of the event type this booking was made for. May be empty, in
    /// which case payloads fall back to the title
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: Participant,
    pub attendees: Vec<Participant>,
    pub location: Option<String>,
    pub additional_notes: Option<String>,
    /// Form responses collected when the booking was made
    pub responses: Option<Metadata>,
    pub metadata: Metadata,
    /// Video call url assigned when the booking was created
    pub video_call_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub timezone: Option<Tz>,
    pub locale: Option<String>,
}

impl Booking {
    /// The meeting link for this booking. A url placed in the metadata takes
    /// priority over the one assigned at creation.
    pub fn meeting_url(&self) -> Option<String> {
        self.metadata
            .get("videoCallUrl")
            .and_then(|url| url.as_str())
            .map(|url| url.to_string())
            .or_else(|| self.video_call_url.clone())
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}
