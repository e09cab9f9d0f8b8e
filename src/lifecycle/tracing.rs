//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Level and filters come from `RUST_LOG`; the compact format hides module paths
//! (`with_target(false)`) and shows spans inline.
//!
//! ## What Gets Traced
//!
//! - **Form lifecycle**: opened, reset, closed (with the number of accepted submissions)
//! - **Inputs**: every field change at `debug`, with the raw value
//! - **Submissions**: accepted at `info`, rejected at `warn` with the reason
//! - **Quotes**: nights, category and total of each confirmed booking
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # plus every input and the computed quote
//! ```
//!
//! With `RUST_LOG=debug` a booking looks like:
//!
//! ```text
//! INFO Form opened form_type="BookingForm"
//! INFO booking:enter: Filling booking form
//! DEBUG Input form_type="BookingForm" field=check-in value="2025-06-10"
//! ...
//! DEBUG booking:submit_booking: Quote computed quote=BookingQuote { .. }
//! INFO booking:submit_booking: Submission accepted form_type="BookingForm" submitted=1
//! INFO booking:submit_booking: Booking confirmed nights=3 category=Executive total_price=1350
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
