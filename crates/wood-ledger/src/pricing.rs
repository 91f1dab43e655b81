/// Currency units charged per kilogram-equivalent of `density * volume`.
pub const PRICE_PER_KG_FACTOR: f64 = 10.0;

/// Face area of a board. Thickness is not modelled.
pub fn volume(length: f64, width: f64) -> f64 {
    length * width
}

/// Sale price for a board: `density * (length * width) * 10`.
///
/// No validation happens here; callers are expected to hand in positive,
/// finite values.
pub fn price(density: f64, length: f64, width: f64) -> f64 {
    density * volume(length, width) * PRICE_PER_KG_FACTOR
}
