use std::sync::Arc;

use tracing::{error, info};

use crate::booking::{Clock, SystemClock};
use crate::clients::{BookingClient, ContactClient};
use crate::lifecycle::FrontDeskConfig;
use crate::model::{BookingConfirmation, ContactReceipt};

/// Runtime orchestrator for the site's interactive forms.
///
/// `FrontDesk` is responsible for:
/// - **Lifecycle Management**: starting and stopping the booking and contact form loops
/// - **Context Wiring**: handing the booking form its [`Clock`]
/// - **Rendering**: turning accepted submissions into guest-facing messages
///
/// # Example
///
/// ```ignore
/// let desk = FrontDesk::new();
///
/// desk.booking_client.enter("2025-06-10", "2025-06-13", "2", "executive").await?;
/// let confirmation = desk.booking_client.submit_booking().await?;
/// println!("{}", desk.render_booking(&confirmation));
///
/// desk.shutdown().await?;
/// ```
pub struct FrontDesk {
    /// Client for the booking form loop
    pub booking_client: BookingClient,

    /// Client for the contact form loop
    pub contact_client: ContactClient,

    config: FrontDeskConfig,

    /// Task handles for both loops (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FrontDesk {
    /// Starts both form loops with default configuration and the system clock.
    pub fn new() -> Self {
        Self::with_config(FrontDeskConfig::default(), Arc::new(SystemClock))
    }

    /// Starts both form loops.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: FrontDeskConfig, clock: Arc<dyn Clock>) -> Self {
        let (booking_actor, booking_client) = crate::booking::new(config.buffer_size);
        let (contact_actor, contact_client) = crate::contact::new(config.buffer_size);

        let booking_handle = tokio::spawn(booking_actor.run(clock));
        let contact_handle = tokio::spawn(contact_actor.run(()));

        info!(hotel = %config.hotel_name, "Front desk open");

        Self {
            booking_client,
            contact_client,
            config,
            handles: vec![booking_handle, contact_handle],
        }
    }

    pub fn config(&self) -> &FrontDeskConfig {
        &self.config
    }

    /// Confirmation message for an accepted booking.
    pub fn render_booking(&self, confirmation: &BookingConfirmation) -> String {
        confirmation.message(&self.config.hotel_name, &self.config.currency_symbol)
    }

    /// Thank-you message for an accepted contact request.
    pub fn render_contact(&self, receipt: &ContactReceipt) -> String {
        receipt.message(&self.config.hotel_name)
    }

    /// Gracefully shuts down both form loops.
    ///
    /// Dropping the clients closes the channels; each loop drains and exits.
    /// Clones of the clients held elsewhere keep their loop alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both loops shut down cleanly
    /// - `Err(String)` if a loop task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Closing front desk...");

        drop(self.booking_client);
        drop(self.contact_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Form task failed: {:?}", e);
                return Err(format!("Form task failed: {:?}", e));
            }
        }

        info!("Front desk closed.");
        Ok(())
    }
}

impl Default for FrontDesk {
    fn default() -> Self {
        Self::new()
    }
}
