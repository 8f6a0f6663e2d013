use super::IBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use herald_domain::Booking;

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn upsert(&self, booking: &Booking) -> anyhow::Result<()> {
        upsert_by(booking, &self.bookings, |b| {
            b.reference == booking.reference
        });
        Ok(())
    }

    async fn find_by_reference(&self, reference: &str) -> Option<Booking> {
        let bookings = find_by(&self.bookings, |b| b.reference == reference);
        if bookings.is_empty() {
            return None;
        }
        Some(bookings[0].clone())
    }
}
