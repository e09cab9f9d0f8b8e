//! Pure data structures (DTOs) exchanged between the booking core and the form shell.

pub mod contact;
pub mod quote;
pub mod room;
pub mod stay;

pub use contact::*;
pub use quote::*;
pub use room::*;
pub use stay::*;
