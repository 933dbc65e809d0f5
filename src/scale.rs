//! Linear mapping between data values and pixels for the canvas-drawn charts.

/// Affine map from a data domain onto a pixel range.
///
/// The domain is kept as given, so a range with `range.0 > range.1` produces
/// an inverted axis (used for y, where pixels grow downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a data value into `[0, 1]` (values outside the domain are not clamped).
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return 0.5;
        }
        (value - self.domain.0) / span
    }

    pub fn denormalize(&self, t: f64) -> f64 {
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Data value to pixel.
    pub fn scale(&self, value: f64) -> f32 {
        let t = self.normalize(value) as f32;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Pixel to data value.
    pub fn invert(&self, px: f32) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        self.denormalize(f64::from((px - self.range.0) / span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_onto_range() {
        let scale = LinearScale::new((1_000.0, 2_000.0), (10.0, 110.0));
        assert_eq!(scale.scale(1_000.0), 10.0);
        assert_eq!(scale.scale(1_500.0), 60.0);
        assert_eq!(scale.scale(2_000.0), 110.0);
        assert_eq!(scale.invert(60.0), 1_500.0);
    }

    #[test]
    fn inverted_range_for_y() {
        let scale = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert_eq!(scale.scale(0.0), 200.0);
        assert_eq!(scale.scale(100.0), 0.0);
        assert_eq!(scale.invert(50.0), 75.0);
    }

    #[test]
    fn degenerate_domain_centers() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.scale(5.0), 50.0);
    }
}
