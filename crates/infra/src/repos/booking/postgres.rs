use super::IBookingRepo;
use chrono::{DateTime, Utc};
use herald_domain::{Booking, Metadata, Participant};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    booking_uid: Uuid,
    reference: String,
    title: String,
    event_type: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    organizer: Json<Participant>,
    attendees: Json<Vec<Participant>>,
    location: Option<String>,
    additional_notes: Option<String>,
    responses: Option<Json<Metadata>>,
    metadata: Json<Metadata>,
    video_call_url: Option<String>,
}

impl Into<Booking> for BookingRaw {
    fn into(self) -> Booking {
        Booking {
            id: self.booking_uid.into(),
            reference: self.reference,
            title: self.title,
            event_type: self.event_type,
            start_time: self.start_time,
            end_time: self.end_time,
            organizer: self.organizer.0,
            attendees: self.attendees.0,
            location: self.location,
            additional_notes: self.additional_notes,
            responses: self.responses.map(|r| r.0),
            metadata: self.metadata.0,
            video_call_url: self.video_call_url,
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn upsert(&self, booking: &Booking) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings
            (booking_uid, reference, title, event_type, start_time, end_time, organizer, attendees, location, additional_notes, responses, metadata, video_call_url)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (reference) DO UPDATE SET
                title = EXCLUDED.title,
                event_type = EXCLUDED.event_type,
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                organizer = EXCLUDED.organizer,
                attendees = EXCLUDED.attendees,
                location = EXCLUDED.location,
                additional_notes = EXCLUDED.additional_notes,
                responses = EXCLUDED.responses,
                metadata = EXCLUDED.metadata,
                video_call_url = EXCLUDED.video_call_url
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(&booking.reference)
        .bind(&booking.title)
        .bind(&booking.event_type)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(Json(&booking.organizer))
        .bind(Json(&booking.attendees))
        .bind(&booking.location)
        .bind(&booking.additional_notes)
        .bind(booking.responses.as_ref().map(Json))
        .bind(Json(&booking.metadata))
        .bind(&booking.video_call_url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_reference(&self, reference: &str) -> Option<Booking> {
        let booking: Option<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings AS b
            WHERE b.reference = $1
            "#,
        )
        .bind(reference)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None);

        booking.map(|b| b.into())
    }
}
