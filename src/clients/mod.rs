//! Typed clients for the form loops.

pub mod booking_client;
pub mod contact_client;
pub mod form_handle;

pub use booking_client::BookingClient;
pub use contact_client::ContactClient;
pub use form_handle::FormHandle;
