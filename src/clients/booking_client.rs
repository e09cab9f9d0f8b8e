//! # Booking Client
//!
//! Provides a high‑level API for the booking form loop.
//! It wraps a `FormClient<BookingForm>` and exposes booking‑specific methods.
use crate::booking::{BookingError, BookingField, BookingForm};
use crate::clients::form_handle::{recover, FormHandle};
use crate::framework::{FormClient, FrameworkError};
use crate::model::{BookingConfirmation, RoomCategory};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the booking form.
#[derive(Clone)]
pub struct BookingClient {
    inner: FormClient<BookingForm>,
}

impl BookingClient {
    pub fn new(inner: FormClient<BookingForm>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FormHandle<BookingForm> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &FormClient<BookingForm> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover(e, BookingError::FormUnavailable)
    }
}

impl BookingClient {
    /// Fills in every field, in form order.
    #[instrument(skip(self))]
    pub async fn enter(
        &self,
        check_in: &str,
        check_out: &str,
        guests: &str,
        room: &str,
    ) -> Result<BookingForm, BookingError> {
        debug!("Filling booking form");
        self.fill(BookingField::CheckIn, check_in).await?;
        self.fill(BookingField::CheckOut, check_out).await?;
        self.fill(BookingField::Guests, guests).await?;
        self.fill(BookingField::Room, room).await
    }

    /// Pre-selects the room matching a room card's heading.
    ///
    /// Returns the selected category, or `None` (selector untouched) when the
    /// heading names no known tier.
    #[instrument(skip(self))]
    pub async fn select_room_from_card(
        &self,
        card_title: &str,
    ) -> Result<Option<RoomCategory>, BookingError> {
        let Some(category) = RoomCategory::from_card_title(card_title) else {
            debug!("No room category in card title");
            return Ok(None);
        };
        self.fill(BookingField::Room, category.selector_value()).await?;
        Ok(Some(category))
    }

    /// Submits the booking form.
    #[instrument(skip(self))]
    pub async fn submit_booking(&self) -> Result<BookingConfirmation, BookingError> {
        let confirmation = self.submit().await?;
        info!(
            nights = confirmation.quote.nights,
            category = %confirmation.quote.category,
            total_price = confirmation.quote.total_price,
            "Booking confirmed"
        );
        Ok(confirmation)
    }
}
