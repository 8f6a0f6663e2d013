use chrono::DateTime;
use chrono_tz::Tz;
use herald_domain::TemplateVariables;

/// Renders user authored payload templates. Rendering must never fail,
/// the output is best effort text that the payload builder interprets.
pub trait ITemplateRenderer: Send + Sync {
    fn render(&self, template: &str, variables: &TemplateVariables, locale: &str) -> String;
}

/// Substitutes `{VARIABLE}` placeholders with booking derived values.
/// Absent values become empty strings and unknown placeholders are left
/// untouched.
pub struct VariableRenderer {}

fn format_event_date(date: &DateTime<Tz>, locale: &str) -> String {
    // English locales read month first, most others day first
    if locale.starts_with("en") {
        date.format("%A, %B %-d, %Y").to_string()
    } else {
        date.format("%A %-d %B %Y").to_string()
    }
}

impl ITemplateRenderer for VariableRenderer {
    fn render(&self, template: &str, variables: &TemplateVariables, locale: &str) -> String {
        let attendee_timezone = variables
            .attendee_timezone
            .map(|tz| tz.name().to_string())
            .unwrap_or_default();

        template
            .replace("{EVENT_NAME}", &variables.event_name)
            .replace("{ORGANIZER}", &variables.organizer_name)
            .replace("{ATTENDEE}", &variables.attendee_name)
            .replace("{ATTENDEE_EMAIL}", &variables.attendee_email)
            .replace(
                "{EVENT_DATE}",
                &format_event_date(&variables.event_date, locale),
            )
            .replace(
                "{EVENT_TIME}",
                &variables.event_date.format("%H:%M").to_string(),
            )
            .replace(
                "{EVENT_END_TIME}",
                &variables.event_end_time.format("%H:%M").to_string(),
            )
            .replace("{TIMEZONE}", variables.timezone.name())
            .replace("{ATTENDEE_TIMEZONE}", &attendee_timezone)
            .replace("{LOCATION}", variables.location.as_deref().unwrap_or(""))
            .replace(
                "{ADDITIONAL_NOTES}",
                variables.additional_notes.as_deref().unwrap_or(""),
            )
            .replace(
                "{MEETING_URL}",
                variables.meeting_url.as_deref().unwrap_or(""),
            )
    }
}
