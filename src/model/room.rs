use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::booking::BookingError;

/// A room tier offered on the booking form.
///
/// Each category carries a fixed nightly rate; see [`RoomCategory::nightly_rate`].
/// The form selector submits the lowercase literal (`"deluxe"`, `"executive"`,
/// `"penthouse"`), parsed with [`str::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Deluxe,
    Executive,
    Penthouse,
}

impl RoomCategory {
    /// Every category, in the order room cards are listed.
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Deluxe,
        RoomCategory::Executive,
        RoomCategory::Penthouse,
    ];

    /// Nightly rate in whole currency units.
    pub const fn nightly_rate(self) -> u64 {
        match self {
            RoomCategory::Deluxe => 250,
            RoomCategory::Executive => 450,
            RoomCategory::Penthouse => 999,
        }
    }

    /// The literal value used by the room selector.
    pub const fn selector_value(self) -> &'static str {
        match self {
            RoomCategory::Deluxe => "deluxe",
            RoomCategory::Executive => "executive",
            RoomCategory::Penthouse => "penthouse",
        }
    }

    /// Maps a room card heading (e.g. "Executive Suite") to its category.
    ///
    /// Keywords are checked in card order, so a heading naming several tiers
    /// resolves to the first one. Returns `None` for headings naming no tier.
    pub fn from_card_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| title.contains(&category.to_string()))
    }
}

impl Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Executive => "Executive",
            RoomCategory::Penthouse => "Penthouse",
        };
        f.write_str(name)
    }
}

impl FromStr for RoomCategory {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.selector_value() == value)
            .ok_or_else(|| BookingError::UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_literals_parse() {
        assert_eq!("deluxe".parse::<RoomCategory>(), Ok(RoomCategory::Deluxe));
        assert_eq!("executive".parse::<RoomCategory>(), Ok(RoomCategory::Executive));
        assert_eq!("penthouse".parse::<RoomCategory>(), Ok(RoomCategory::Penthouse));
    }

    #[test]
    fn test_unknown_selector_is_rejected() {
        assert_eq!(
            "suite".parse::<RoomCategory>(),
            Err(BookingError::UnknownCategory("suite".to_string()))
        );
        // Selector values are case-sensitive
        assert!("Deluxe".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_display_is_capitalized() {
        assert_eq!(RoomCategory::Penthouse.to_string(), "Penthouse");
    }

    #[test]
    fn test_card_title_preselection() {
        assert_eq!(
            RoomCategory::from_card_title("Executive Suite"),
            Some(RoomCategory::Executive)
        );
        assert_eq!(
            RoomCategory::from_card_title("The Royal Penthouse"),
            Some(RoomCategory::Penthouse)
        );
        assert_eq!(
            RoomCategory::from_card_title("Deluxe Executive Room"),
            Some(RoomCategory::Deluxe)
        );
        assert_eq!(RoomCategory::from_card_title("Garden Villa"), None);
    }
}
