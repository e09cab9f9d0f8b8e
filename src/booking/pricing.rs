use super::BookingError;
use crate::model::{BookingQuote, DateRange, RoomCategory};

/// Prices a stay from the fixed nightly rate table.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Total price of `nights` nights in a `category` room.
    pub fn price(category: RoomCategory, nights: u32) -> u64 {
        category.nightly_rate() * u64::from(nights)
    }

    /// Prices a stay from the raw room selector value.
    ///
    /// # Errors
    /// [`BookingError::UnknownCategory`] if `selector` is not one of the rate
    /// table's literals.
    pub fn price_for_selector(selector: &str, nights: u32) -> Result<u64, BookingError> {
        let category: RoomCategory = selector.parse()?;
        Ok(Self::price(category, nights))
    }

    /// Builds the quote for an accepted stay.
    pub fn quote(stay: DateRange, category: RoomCategory) -> BookingQuote {
        BookingQuote::new(stay, category, Self::price(category, stay.nights()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rate_table() {
        assert_eq!(PriceCalculator::price(RoomCategory::Deluxe, 1), 250);
        assert_eq!(PriceCalculator::price(RoomCategory::Executive, 1), 450);
        assert_eq!(PriceCalculator::price(RoomCategory::Penthouse, 1), 999);
    }

    #[test]
    fn test_three_executive_nights() {
        assert_eq!(PriceCalculator::price(RoomCategory::Executive, 3), 1350);
    }

    #[test]
    fn test_selector_pricing() {
        assert_eq!(PriceCalculator::price_for_selector("penthouse", 2), Ok(1998));
        assert_eq!(
            PriceCalculator::price_for_selector("presidential", 2),
            Err(BookingError::UnknownCategory("presidential".to_string()))
        );
    }

    fn any_category() -> impl Strategy<Value = RoomCategory> {
        prop_oneof![
            Just(RoomCategory::Deluxe),
            Just(RoomCategory::Executive),
            Just(RoomCategory::Penthouse),
        ]
    }

    proptest! {
        #[test]
        fn prop_price_is_linear_in_nights(category in any_category(), nights in 1u32..10_000) {
            prop_assert_eq!(
                PriceCalculator::price(category, nights),
                u64::from(nights) * PriceCalculator::price(category, 1)
            );
        }
    }
}
