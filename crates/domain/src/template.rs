use crate::booking::Booking;
use chrono::DateTime;
use chrono_tz::Tz;

/// The substitution variables available to custom payload templates.
/// Derived from the first attendee and the organizer; times are expressed
/// in the organizer's timezone so rendered dates read naturally to the
/// person who set the workflow up.
#[derive(Debug, Clone)]
pub struct TemplateVariables {
    pub event_name: String,
    pub organizer_name: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub event_date: DateTime<Tz>,
    pub event_end_time: DateTime<Tz>,
    pub timezone: Tz,
    pub attendee_timezone: Option<Tz>,
    pub location: Option<String>,
    pub additional_notes: Option<String>,
    pub meeting_url: Option<String>,
    /// Locale of the first attendee, used for date formatting
    pub locale: Option<String>,
}

impl TemplateVariables {
    pub fn from_booking(booking: &Booking) -> Self {
        let timezone = booking.organizer.timezone.unwrap_or(chrono_tz::UTC);
        let attendee = booking.attendees.first();
        Self {
            event_name: booking.title.clone(),
            organizer_name: booking.organizer.name.clone(),
            attendee_name: attendee.map(|a| a.name.clone()).unwrap_or_default(),
            attendee_email: attendee.map(|a| a.email.clone()).unwrap_or_default(),
            event_date: booking.start_time.with_timezone(&timezone),
            event_end_time: booking.end_time.with_timezone(&timezone),
            timezone,
            attendee_timezone: attendee.and_then(|a| a.timezone),
            location: booking.location.clone(),
            additional_notes: booking.additional_notes.clone(),
            meeting_url: booking.meeting_url(),
            locale: attendee.and_then(|a| a.locale.clone()),
        }
    }
}
