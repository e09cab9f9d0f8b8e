use std::sync::Arc;

use chrono::NaiveDate;
use grand_palatial::booking::{BookingError, BookingField, FixedClock};
use grand_palatial::clients::FormHandle;
use grand_palatial::contact::{ContactError, ContactField};
use grand_palatial::lifecycle::{FrontDesk, FrontDeskConfig};
use grand_palatial::model::RoomCategory;

fn date(value: &str) -> NaiveDate {
    value.parse().unwrap()
}

fn desk_on(today: &str) -> FrontDesk {
    FrontDesk::with_config(FrontDeskConfig::default(), Arc::new(FixedClock(date(today))))
}

/// Full end-to-end booking through the real form loop.
#[tokio::test]
async fn test_executive_booking_is_confirmed_and_form_resets() {
    let desk = desk_on("2025-06-01");

    let form = desk
        .booking_client
        .enter("2025-06-10", "2025-06-13", "2", "executive")
        .await
        .expect("Failed to fill form");
    assert_eq!(form.check_in_min, Some(date("2025-06-01")));
    assert_eq!(form.check_out_min, Some(date("2025-06-10")));

    let confirmation = desk
        .booking_client
        .submit_booking()
        .await
        .expect("Booking should be confirmed");
    assert_eq!(confirmation.quote.nights, 3);
    assert_eq!(confirmation.quote.category, RoomCategory::Executive);
    assert_eq!(confirmation.quote.total_price, 1350);

    let rendered = desk.render_booking(&confirmation);
    assert!(rendered.starts_with("Booking Confirmed!"));
    assert!(rendered.contains("Room: Executive"));
    assert!(rendered.contains("Guests: 2"));
    assert!(rendered.contains("Total: $1350"));

    // Accepted submissions clear the form and restore the date minimums
    let after = desk.booking_client.snapshot().await.unwrap();
    assert!(after.check_in.is_empty());
    assert!(after.room.is_empty());
    assert_eq!(after.check_out_min, Some(date("2025-06-01")));

    desk.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_booking_keeps_values_for_correction() {
    let desk = desk_on("2025-06-01");

    desk.booking_client
        .enter("2025-05-01", "2025-05-04", "1", "deluxe")
        .await
        .unwrap();
    let result = desk.booking_client.submit_booking().await;
    assert_eq!(result, Err(BookingError::PastCheckIn));

    let kept = desk.booking_client.snapshot().await.unwrap();
    assert_eq!(kept.check_in, "2025-05-01");
    assert_eq!(kept.room, "deluxe");

    // Correct the dates and resubmit
    desk.booking_client
        .fill(BookingField::CheckIn, "2025-06-01")
        .await
        .unwrap();
    desk.booking_client
        .fill(BookingField::CheckOut, "2025-06-03")
        .await
        .unwrap();
    let confirmation = desk.booking_client.submit_booking().await.unwrap();
    assert_eq!(confirmation.quote.nights, 2);
    assert_eq!(confirmation.quote.total_price, 500);

    desk.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_booking_error_variants_through_the_loop() {
    let desk = desk_on("2025-06-01");

    desk.booking_client
        .enter("2025-06-10", "2025-06-10", "1", "penthouse")
        .await
        .unwrap();
    assert_eq!(
        desk.booking_client.submit_booking().await,
        Err(BookingError::InvalidOrder)
    );

    desk.booking_client.fill(BookingField::Room, "").await.unwrap();
    assert_eq!(
        desk.booking_client.submit_booking().await,
        Err(BookingError::MissingField(BookingField::Room))
    );

    desk.booking_client
        .enter("2025-06-10", "2025-06-11", "1", "suite")
        .await
        .unwrap();
    assert_eq!(
        desk.booking_client.submit_booking().await,
        Err(BookingError::UnknownCategory("suite".to_string()))
    );

    desk.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_room_card_preselects_category() {
    let desk = desk_on("2025-06-01");

    let selected = desk
        .booking_client
        .select_room_from_card("The Penthouse Suite")
        .await
        .unwrap();
    assert_eq!(selected, Some(RoomCategory::Penthouse));

    let form = desk.booking_client.snapshot().await.unwrap();
    assert_eq!(form.room, "penthouse");

    desk.booking_client
        .fill(BookingField::CheckIn, "2025-06-02")
        .await
        .unwrap();
    desk.booking_client
        .fill(BookingField::CheckOut, "2025-06-03")
        .await
        .unwrap();
    desk.booking_client
        .fill(BookingField::Guests, "4")
        .await
        .unwrap();
    let confirmation = desk.booking_client.submit_booking().await.unwrap();
    assert_eq!(confirmation.quote.total_price, 999);

    desk.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_contact_form_round() {
    let desk = desk_on("2025-06-01");

    let rejected = desk
        .contact_client
        .send_message("Ada", "ada.example.com", "Is breakfast included?")
        .await;
    assert_eq!(
        rejected,
        Err(ContactError::InvalidEmail("ada.example.com".to_string()))
    );

    desk.contact_client
        .fill(ContactField::Email, "ada@example.com")
        .await
        .unwrap();
    let receipt = desk.contact_client.submit().await.unwrap();
    assert_eq!(receipt.name, "Ada");

    let rendered = desk.render_contact(&receipt);
    assert!(rendered.contains("We will contact you at ada@example.com shortly."));
    assert!(rendered.ends_with("The Grand Palatial Team"));

    let cleared = desk.contact_client.snapshot().await.unwrap();
    assert!(cleared.message.is_empty());

    desk.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_rendering() {
    let config = FrontDeskConfig {
        hotel_name: "Hotel Test".to_string(),
        currency_symbol: "£".to_string(),
        buffer_size: 2,
    };
    let desk = FrontDesk::with_config(config, Arc::new(FixedClock(date("2025-06-01"))));

    desk.booking_client
        .enter("2025-06-01", "2025-06-05", "2", "deluxe")
        .await
        .unwrap();
    let confirmation = desk.booking_client.submit_booking().await.unwrap();

    let rendered = desk.render_booking(&confirmation);
    assert!(rendered.contains("Total: £1000"));
    assert!(rendered.ends_with("Thank you for choosing Hotel Test!"));

    desk.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_explicit_reset_clears_fields() {
    let desk = desk_on("2025-06-01");

    desk.booking_client
        .enter("2025-06-10", "2025-06-12", "3", "deluxe")
        .await
        .unwrap();
    let cleared = desk.booking_client.reset().await.unwrap();
    assert!(cleared.check_in.is_empty());
    assert!(cleared.guests.is_empty());
    assert_eq!(cleared.check_in_min, Some(date("2025-06-01")));

    assert_eq!(
        desk.booking_client.submit_booking().await,
        Err(BookingError::MissingField(BookingField::CheckIn))
    );

    desk.shutdown().await.unwrap();
}
