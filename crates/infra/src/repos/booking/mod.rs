mod inmemory;
mod postgres;

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;

use herald_domain::Booking;

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn upsert(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn find_by_reference(&self, reference: &str) -> Option<Booking>;
}
