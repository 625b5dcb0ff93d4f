//! Bounds: A parent-relative bounding box.

use crate::wire::RectTransform;

/// A bounding box expressed as fractions of the parent's box.
///
/// `(0, 0)` is the parent's bottom-left corner and `(1, 1)` its top-right.
/// Defaults to the full unit square. `min <= max` is a convention, not an
/// enforced invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge, as a fraction of the parent's width.
    pub min_x: f64,
    /// Bottom edge, as a fraction of the parent's height.
    pub min_y: f64,
    /// Right edge, as a fraction of the parent's width.
    pub max_x: f64,
    /// Top edge, as a fraction of the parent's height.
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl Bounds {
    /// The full unit square.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a bounding box from its four edges.
    #[inline]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Width as a fraction of the parent's width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height as a fraction of the parent's height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Set all four edges at once.
    pub fn set(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.min_x = min_x;
        self.min_y = min_y;
        self.max_x = max_x;
        self.max_y = max_y;
    }

    /// The wire rect-transform for this box: `anchorMin`/`anchorMax` as
    /// space-separated coordinate pairs.
    pub fn rect_transform(&self) -> RectTransform {
        RectTransform {
            anchor_min: format!("{} {}", self.min_x, self.min_y),
            anchor_max: format!("{} {}", self.max_x, self.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_square() {
        let bounds = Bounds::default();
        assert_eq!(bounds, Bounds::FULL);
        assert!((bounds.width() - 1.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_width_height_track_edges() {
        let mut bounds = Bounds::new(0.1, 0.2, 0.6, 0.9);
        assert!((bounds.width() - 0.5).abs() < 1e-12);
        assert!((bounds.height() - 0.7).abs() < 1e-12);

        bounds.set(0.0, 0.25, 0.25, 1.0);
        assert!((bounds.width() - 0.25).abs() < 1e-12);
        assert!((bounds.height() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_rect_transform_pairs() {
        let rect = Bounds::new(0.0, 0.25, 0.5, 1.0).rect_transform();
        assert_eq!(rect.anchor_min, "0 0.25");
        assert_eq!(rect.anchor_max, "0.5 1");
    }
}
