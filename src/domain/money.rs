//! Monetary and scoring types.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision. One-tenth granularity.
pub type Price = Decimal;

/// Predicted value score represented as a Decimal so sums compare exactly.
pub type Points = Decimal;

/// Decimal places kept for player prices.
pub const PRICE_SCALE: u32 = 1;

/// Decimal places kept for value scores after normalization.
pub const SCORE_SCALE: u32 = 6;

/// Return `true` if the price is representable in tenths.
#[must_use]
pub fn is_tenth_granular(price: Price) -> bool {
    price.round_dp(PRICE_SCALE) == price
}

/// Normalize a raw value score to the fixed comparison scale.
#[must_use]
pub fn normalize_score(score: Points) -> Points {
    score.round_dp(SCORE_SCALE).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_and_points_are_decimal() {
        let price: Price = dec!(5.5);
        let points: Points = dec!(4.25);

        assert_eq!(price + points, dec!(9.75));
    }

    #[test]
    fn tenth_granularity() {
        assert!(is_tenth_granular(dec!(4.5)));
        assert!(is_tenth_granular(dec!(10)));
        assert!(is_tenth_granular(dec!(7.50)));
        assert!(!is_tenth_granular(dec!(4.55)));
    }

    #[test]
    fn scores_round_to_six_places() {
        assert_eq!(normalize_score(dec!(1.23456789)), dec!(1.234568));
        assert_eq!(normalize_score(dec!(-0.5)), dec!(-0.5));
    }
}
