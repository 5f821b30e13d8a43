//! Pixel manipulations.

use crate::definitions::Clamp;
use image::Pixel;

/// Adds pixels with the given weights. Results are clamped to prevent arithmetical overflows.
///
/// Glyph coverage is blended into the canvas with this: the background keeps
/// `1 - coverage` of its weight and the text color gets `coverage`.
///
/// # Examples
/// ```
/// use image::Rgb;
/// use textcard::pixelops::weighted_sum;
///
/// let left = Rgb([10u8, 20u8, 30u8]);
/// let right = Rgb([100u8, 80u8, 60u8]);
///
/// let sum = weighted_sum(left, right, 0.7, 0.3);
/// assert_eq!(sum, Rgb([37, 38, 39]));
/// ```
pub fn weighted_sum<P: Pixel>(left: P, right: P, left_weight: f32, right_weight: f32) -> P
where
    P::Subpixel: Into<f32> + Clamp<f32>,
{
    left.map2(&right, |p, q| {
        weighted_channel_sum(p, q, left_weight, right_weight)
    })
}

#[inline(always)]
fn weighted_channel_sum<C>(left: C, right: C, left_weight: f32, right_weight: f32) -> C
where
    C: Into<f32> + Clamp<f32>,
{
    Clamp::clamp(left.into() * left_weight + right.into() * right_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba};

    #[test]
    fn test_weighted_channel_sum() {
        // Midpoint
        assert_eq!(weighted_channel_sum(10u8, 20u8, 0.5, 0.5), 15u8);
        // Mainly left
        assert_eq!(weighted_channel_sum(10u8, 20u8, 0.9, 0.1), 11u8);
        // Clamped
        assert_eq!(weighted_channel_sum(150u8, 150u8, 1.8, 0.8), 255u8);
    }

    #[test]
    fn test_weighted_sum_full_coverage_takes_right() {
        let background = Rgba([0u8, 61, 71, 255]);
        let text = Rgba([255u8, 255, 255, 255]);
        assert_eq!(weighted_sum(background, text, 0.0, 1.0), text);
        assert_eq!(weighted_sum(background, text, 1.0, 0.0), background);
    }

    #[test]
    fn test_weighted_sum_gray() {
        let sum = weighted_sum(Luma([100u8]), Luma([200u8]), 0.5, 0.5);
        assert_eq!(sum, Luma([150u8]));
    }
}
