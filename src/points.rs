use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub type Figure = Decimal;
pub type Points = Decimal;

const UPPER_THRESHOLD: Figure = dec!(100);
const LOWER_THRESHOLD: Figure = dec!(50);
// Earned in full once a purchase goes over the upper threshold.
const LOWER_BAND_BONUS: Points = dec!(50);

/// Points earned by a single purchase.
///
/// 2 points for every dollar spent over $100, plus 1 point for every dollar
/// spent between $50 and $100. The bands are exclusive: an amount over $100
/// always earns the flat 50 points of the lower band.
///
/// Never fails. Amounts of $50 or less, including negative ones, earn
/// nothing. Fractional amounts earn fractional points. Points too large for
/// a `Decimal` saturate at `Decimal::MAX`, see [`checked_points`].
pub fn calculate_points(amount: Figure) -> Points {
    checked_points(amount).unwrap_or(Decimal::MAX)
}

/// Same as [`calculate_points`], `None` when the points do not fit in a
/// `Decimal`.
pub fn checked_points(amount: Figure) -> Option<Points> {
    if amount > UPPER_THRESHOLD {
        (amount - UPPER_THRESHOLD)
            .checked_mul(dec!(2))?
            .checked_add(LOWER_BAND_BONUS)
    } else if amount > LOWER_THRESHOLD {
        Some(amount - LOWER_THRESHOLD)
    } else {
        Some(dec!(0))
    }
}
