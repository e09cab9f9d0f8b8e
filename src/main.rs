//! # Grand Palatial Front Desk
//!
//! Submits one booking through the booking form loop and prints the outcome.
//!
//! ```bash
//! cargo run -- <check-in> <check-out> <guests> <room>
//! cargo run -- 2025-06-10 2025-06-13 2 executive
//! ```
//!
//! Without arguments a three-night Executive stay starting a week from today is quoted.

use std::sync::Arc;

use chrono::{Days, Local};
use grand_palatial::booking::SystemClock;
use grand_palatial::lifecycle::{setup_tracing, FrontDesk, FrontDeskConfig};
use tracing::{error, info, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = FrontDeskConfig::from_env();
    info!(?config, "Starting front desk");
    let desk = FrontDesk::with_config(config, Arc::new(SystemClock));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (check_in, check_out, guests, room) = match args.as_slice() {
        [check_in, check_out, guests, room] => {
            (check_in.clone(), check_out.clone(), guests.clone(), room.clone())
        }
        [] => {
            let today = Local::now().date_naive();
            let check_in = today + Days::new(7);
            let check_out = check_in + Days::new(3);
            (check_in.to_string(), check_out.to_string(), "2".to_string(), "executive".to_string())
        }
        _ => {
            return Err("usage: grand-palatial <check-in> <check-out> <guests> <room>".to_string());
        }
    };

    let span = tracing::info_span!("booking");
    let result = async {
        desk.booking_client
            .enter(&check_in, &check_out, &guests, &room)
            .await?;
        desk.booking_client.submit_booking().await
    }
    .instrument(span)
    .await;

    let outcome = match result {
        Ok(confirmation) => {
            println!("{}", desk.render_booking(&confirmation));
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Booking rejected");
            Err(e.to_string())
        }
    };

    desk.shutdown().await?;
    outcome
}
