use crate::booking::{Booking, Participant};
use crate::shared::metadata::Metadata;
use crate::trigger::TriggerEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Body of an outbound webhook notification. Either the fixed default
/// schema or whatever a user authored template rendered to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Default(DefaultPayload),
    Custom(Metadata),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultPayload {
    pub trigger_event: TriggerEvent,
    pub created_at: DateTime<Utc>,
    pub payload: BookingPayload,
}

/// The fixed payload schema, shaped like a generic booking created
/// notification so consumers need only one parser regardless of trigger.
/// String fields that may be missing on the booking become empty strings,
/// never null. The optional trailing fields are left out entirely when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub uid: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: PersonPayload,
    pub attendees: Vec<PersonPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub name: String,
    pub email: String,
    pub time_zone: String,
}

impl PersonPayload {
    pub fn new(participant: &Participant) -> Self {
        Self {
            name: participant.name.clone(),
            email: participant.email.clone(),
            time_zone: participant
                .timezone
                .map(|tz| tz.name().to_string())
                .unwrap_or_default(),
        }
    }
}

/// What the rendered body of a custom template turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    /// The body is a structured map and can be sent as is
    Map(Metadata),
    /// The body is free text and has to be wrapped before sending
    Text(String),
}

impl RenderedBody {
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => RenderedBody::Map(fields),
            _ => RenderedBody::Text(body.to_string()),
        }
    }
}

impl WebhookPayload {
    /// The default payload for a booking without a custom template.
    pub fn default_for(
        booking: &Booking,
        trigger_event: TriggerEvent,
        created_at: DateTime<Utc>,
    ) -> Self {
        let event_type = if booking.event_type.is_empty() {
            booking.title.clone()
        } else {
            booking.event_type.clone()
        };
        WebhookPayload::Default(DefaultPayload {
            trigger_event,
            created_at,
            payload: BookingPayload {
                uid: booking.reference.clone(),
                title: booking.title.clone(),
                event_type,
                start_time: booking.start_time,
                end_time: booking.end_time,
                organizer: PersonPayload::new(&booking.organizer),
                attendees: booking.attendees.iter().map(PersonPayload::new).collect(),
                location: booking.location.clone(),
                additional_notes: booking.additional_notes.clone(),
                responses: booking.responses.clone(),
                meeting_url: booking.meeting_url(),
            },
        })
    }

    /// Interprets the rendered body of a custom template. Output that is not
    /// a structured map is wrapped rather than dropped, user authored
    /// templates must never break delivery.
    pub fn from_rendered(body: &str, trigger_event: TriggerEvent) -> Self {
        match RenderedBody::parse(body) {
            RenderedBody::Map(fields) => WebhookPayload::Custom(fields),
            RenderedBody::Text(text) => {
                let mut fields = Metadata::new();
                fields.insert("message".to_string(), Value::String(text));
                fields.insert(
                    "triggerEvent".to_string(),
                    Value::String(trigger_event.as_str().to_string()),
                );
                WebhookPayload::Custom(fields)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn booking() -> Booking {
        Booking {
            id: Default::default(),
            reference: "ref-123".into(),
            title: "Coffee chat".into(),
            event_type: String::new(),
            start_time: Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2023, 5, 1, 10, 30, 0).unwrap(),
            organizer: Participant {
                name: "Olivia".into(),
                email: "olivia@example.com".into(),
                timezone: Some(chrono_tz::Europe::Oslo),
                locale: None,
            },
            attendees: Vec::new(),
            location: None,
            additional_notes: None,
            responses: None,
            metadata: Metadata::new(),
            video_call_url: None,
        }
    }

    #[test]
    fn default_payload_serializes_empty_attendees_never_omits_them() {
        let now = Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap();
        let payload = WebhookPayload::default_for(&booking(), TriggerEvent::NewEvent, now);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payload"]["attendees"], json!([]));
        assert_eq!(json["triggerEvent"], json!("NEW_EVENT"));
    }

    #[test]
    fn default_payload_omits_absent_optional_fields() {
        let now = Utc::now();
        let payload = WebhookPayload::default_for(&booking(), TriggerEvent::NewEvent, now);

        let json = serde_json::to_value(&payload).unwrap();
        let body = json["payload"].as_object().unwrap();
        assert!(!body.contains_key("location"));
        assert!(!body.contains_key("additionalNotes"));
        assert!(!body.contains_key("responses"));
        assert!(!body.contains_key("meetingUrl"));
    }

    #[test]
    fn default_payload_includes_optional_fields_when_present() {
        let mut booking = booking();
        booking.location = Some("Oslo office".into());
        booking.additional_notes = Some("Bring a laptop".into());
        booking.video_call_url = Some("https://meet.example.com/abc".into());
        let mut responses = Metadata::new();
        responses.insert("question".into(), json!("answer"));
        booking.responses = Some(responses);

        let payload = WebhookPayload::default_for(&booking, TriggerEvent::NewEvent, Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payload"]["location"], json!("Oslo office"));
        assert_eq!(json["payload"]["additionalNotes"], json!("Bring a laptop"));
        assert_eq!(json["payload"]["responses"]["question"], json!("answer"));
        assert_eq!(
            json["payload"]["meetingUrl"],
            json!("https://meet.example.com/abc")
        );
    }

    #[test]
    fn missing_participant_fields_become_empty_strings() {
        let mut booking = booking();
        booking.organizer = Participant::default();
        booking.attendees = vec![Participant::default()];

        let payload = WebhookPayload::default_for(&booking, TriggerEvent::NewEvent, Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payload"]["organizer"]["name"], json!(""));
        assert_eq!(json["payload"]["organizer"]["email"], json!(""));
        assert_eq!(json["payload"]["organizer"]["timeZone"], json!(""));
        assert_eq!(json["payload"]["attendees"][0]["timeZone"], json!(""));
    }

    #[test]
    fn event_type_falls_back_to_title() {
        let payload = WebhookPayload::default_for(&booking(), TriggerEvent::NewEvent, Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payload"]["type"], json!("Coffee chat"));

        let mut booking = booking();
        booking.event_type = "coffee-chat".into();
        let payload = WebhookPayload::default_for(&booking, TriggerEvent::NewEvent, Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payload"]["type"], json!("coffee-chat"));
    }

    #[test]
    fn rendered_json_object_becomes_the_payload() {
        let payload = WebhookPayload::from_rendered(
            r#"{"text": "Reminder for Coffee chat", "urgent": true}"#,
            TriggerEvent::BeforeEvent,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], json!("Reminder for Coffee chat"));
        assert_eq!(json["urgent"], json!(true));
    }

    #[test]
    fn unparseable_rendered_output_degrades_to_wrapper() {
        let payload =
            WebhookPayload::from_rendered("Reminder: Coffee chat at 10", TriggerEvent::BeforeEvent);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            json!({
                "message": "Reminder: Coffee chat at 10",
                "triggerEvent": "BEFORE_EVENT"
            })
        );
    }

    #[test]
    fn rendered_non_map_json_degrades_to_wrapper() {
        assert_eq!(
            RenderedBody::parse("[1, 2, 3]"),
            RenderedBody::Text("[1, 2, 3]".into())
        );
        assert_eq!(RenderedBody::parse("42"), RenderedBody::Text("42".into()));
        assert!(matches!(
            RenderedBody::parse(r#"{"a": 1}"#),
            RenderedBody::Map(_)
        ));
    }
}
