//! Magnitude-dependent rounding of recommended amounts

/// Granularity a positive amount is rounded up to
pub fn rounding_step(amount: f64) -> f64 {
    if amount < 10_000.0 {
        1_000.0
    } else if amount < 50_000.0 {
        5_000.0
    } else if amount < 250_000.0 {
        10_000.0
    } else {
        25_000.0
    }
}

/// Round an amount up to a denomination that reads as a round number
///
/// Non-positive amounts become 0. Only surfaced contribution amounts go
/// through this; intermediate figures stay exact.
pub fn round_to_sensible_amount(amount: f64) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }
    let step = rounding_step(amount);
    (amount / step).ceil() * step
}
