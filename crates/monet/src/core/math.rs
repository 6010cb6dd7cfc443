use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Since CIELAB and ZCAM coordinates range up to 100, the factor is
    /// somewhat smaller than it would be for unit-range quantities.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}

/// Compute the arithmetic mean of the given numbers.
///
/// This function returns zero for an empty iterator.
pub(crate) fn mean<I: IntoIterator<Item = Float>>(numbers: I) -> Float {
    let (sum, count) = numbers
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), n| (sum + n, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as Float
    }
}
