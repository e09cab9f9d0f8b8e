use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::DEFAULT_HOTEL_NAME;

/// Acknowledgement for an accepted contact-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
}

impl ContactReceipt {
    /// Renders the thank-you message signed by the hotel team.
    pub fn message(&self, hotel_name: &str) -> String {
        format!(
            "Thank you, {}!\n\n\
             Your message has been received. We will contact you at {} shortly.\n\n\
             {} Team",
            self.name, self.email, hotel_name,
        )
    }
}

impl Display for ContactReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message(DEFAULT_HOTEL_NAME))
    }
}
