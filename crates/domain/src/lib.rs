mod booking;
mod delivery;
mod offset;
mod payload;
mod reminder;
mod shared;
mod template;
mod trigger;
mod workflow_step;

pub use booking::{Booking, Participant};
pub use delivery::{DeliveryReport, ScheduleOutcome};
pub use offset::{TimeOffset, TimeUnit};
pub use payload::{BookingPayload, DefaultPayload, PersonPayload, RenderedBody, WebhookPayload};
pub use reminder::{DeliveryMethod, WebhookReminder};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::metadata::Metadata;
pub use template::TemplateVariables;
pub use trigger::TriggerEvent;
pub use workflow_step::WorkflowStep;
