use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_HOTEL_NAME};

/// Runtime settings for the [`FrontDesk`](crate::lifecycle::FrontDesk).
///
/// Defaults can be overridden from the environment with [`FrontDeskConfig::from_env`]:
///
/// | Variable | Field |
/// |----------|-------|
/// | `GRAND_PALATIAL_HOTEL_NAME` | `hotel_name` |
/// | `GRAND_PALATIAL_CURRENCY` | `currency_symbol` |
/// | `GRAND_PALATIAL_BUFFER_SIZE` | `buffer_size` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontDeskConfig {
    /// Signature used in confirmation and thank-you messages.
    pub hotel_name: String,
    /// Prefixed to every rendered price.
    pub currency_symbol: String,
    /// Capacity of each form's event channel.
    pub buffer_size: usize,
}

impl Default for FrontDeskConfig {
    fn default() -> Self {
        Self {
            hotel_name: DEFAULT_HOTEL_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            buffer_size: 32,
        }
    }
}

impl FrontDeskConfig {
    /// Defaults overridden by any `GRAND_PALATIAL_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("GRAND_PALATIAL_HOTEL_NAME") {
            config.hotel_name = name;
        }
        if let Some(symbol) = lookup("GRAND_PALATIAL_CURRENCY") {
            config.currency_symbol = symbol;
        }
        if let Some(raw) = lookup("GRAND_PALATIAL_BUFFER_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid GRAND_PALATIAL_BUFFER_SIZE"),
            }
        }

        config
    }
}
