//! Positional and color scales.
//!
//! [`BandScale`] splits a pixel range into equal bands, one per distinct
//! domain value. [`SequentialScale`] normalizes a continuous value against its
//! domain and hands the position to an [`Interpolator`].

use crate::color::{Interpolator, Rgb};

/// Discrete domain → pixel offset, no padding between bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: f64,
}

impl<T: Ord + Copy> BandScale<T> {
    /// Build a scale over the distinct values of `domain`, ascending, spread
    /// over `[0, range]`.
    pub fn new(domain: impl IntoIterator<Item = T>, range: f64) -> Self {
        let mut domain: Vec<T> = domain.into_iter().collect();
        domain.sort_unstable();
        domain.dedup();
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            self.range
        } else {
            self.range / self.domain.len() as f64
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Start offset of the band for `value`, `None` outside the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        self.domain
            .binary_search(&value)
            .ok()
            .map(|index| self.step() * index as f64)
    }

    /// Center offset of the band for `value`.
    pub fn center(&self, value: T) -> Option<f64> {
        self.position(value).map(|start| start + self.bandwidth() / 2.0)
    }
}

/// Continuous domain → color through an interpolator.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    min: f64,
    max: f64,
    interpolator: Interpolator,
}

impl SequentialScale {
    pub fn new((min, max): (f64, f64), interpolator: Interpolator) -> Self {
        Self {
            min,
            max,
            interpolator,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Position of `value` within the domain. A zero-width domain puts every
    /// value in the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.5
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        (self.interpolator)(self.normalize(value))
    }

    /// Color at a normalized position, bypassing the domain.
    pub fn sample(&self, t: f64) -> Rgb {
        (self.interpolator)(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::interpolate_cividis;

    #[test]
    fn test_band_scale_sorts_and_dedups() {
        let scale = BandScale::new(vec![1902, 1900, 1901, 1900], 300.0);
        assert_eq!(scale.domain(), &[1900, 1901, 1902]);
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position(1900), Some(0.0));
        assert_eq!(scale.position(1902), Some(200.0));
        assert_eq!(scale.center(1901), Some(150.0));
    }

    #[test]
    fn test_band_scale_unknown_value() {
        let scale = BandScale::new(vec![1u32, 2, 3], 120.0);
        assert_eq!(scale.position(7), None);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::<i32>::new(Vec::new(), 1400.0);
        assert!(scale.is_empty());
        assert_eq!(scale.position(1900), None);
        assert!(!BandScale::new(vec![1900], 1400.0).is_empty());
    }

    #[test]
    fn test_band_scale_single_value_fills_range() {
        let scale = BandScale::new(vec![2015], 1400.0);
        assert_eq!(scale.len(), 1);
        assert_eq!(scale.bandwidth(), 1400.0);
        assert_eq!(scale.position(2015), Some(0.0));
    }

    #[test]
    fn test_sequential_scale_endpoints() {
        let scale = SequentialScale::new((-6.976, 5.228), interpolate_cividis);
        assert_eq!(scale.domain(), (-6.976, 5.228));
        assert_eq!(scale.color(-6.976), interpolate_cividis(0.0));
        assert_eq!(scale.color(5.228), interpolate_cividis(1.0));
    }

    #[test]
    fn test_sequential_scale_zero_width_domain() {
        let scale = SequentialScale::new((0.25, 0.25), interpolate_cividis);
        assert_eq!(scale.normalize(0.25), 0.5);
        assert_eq!(scale.color(0.25), interpolate_cividis(0.5));
    }
}
