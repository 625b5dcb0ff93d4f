//! Tab strip layout: equally sized buttons along one axis.

use super::Bounds;

/// Layout parameters for a strip of tab buttons.
///
/// The tab count is fixed at the first build of the owning container;
/// the division below assumes it never changes afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabStrip {
    /// Lay tabs top-to-bottom instead of left-to-right.
    pub vertical: bool,
    /// Gap between tabs, as a fraction of the strip.
    pub gap: f64,
    /// Cap on each tab's size; `0` means uncapped.
    pub max_button_size: f64,
    /// Total number of tabs in the strip.
    pub count: usize,
}

impl TabStrip {
    /// Compute the bounds of the tab at `index`.
    ///
    /// `size = 1/count - gap*(count-1)/count`, capped at `max_button_size`
    /// when that is positive; `offset = index/count * (1+gap)`. Vertical
    /// strips are anchored from the top. An empty strip yields the full
    /// unit square rather than dividing by zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn bounds(&self, index: usize) -> Bounds {
        if self.count == 0 {
            return Bounds::FULL;
        }

        let count = self.count as f64;
        let mut size = 1.0 / count - self.gap * (count - 1.0) / count;
        if self.max_button_size > 0.0 {
            size = size.min(self.max_button_size);
        }
        let offset = index as f64 / count * (1.0 + self.gap);

        if self.vertical {
            Bounds::new(0.0, 1.0 - offset - size, 1.0, 1.0 - offset)
        } else {
            Bounds::new(offset, 0.0, offset + size, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_horizontal_with_gap() {
        let strip = TabStrip { vertical: false, gap: 0.1, max_button_size: 0.0, count: 4 };

        let first = strip.bounds(0);
        assert!((first.min_x - 0.0).abs() < TOLERANCE);
        assert!((first.max_x - 0.175).abs() < TOLERANCE);
        assert!((first.min_y - 0.0).abs() < TOLERANCE);
        assert!((first.max_y - 1.0).abs() < TOLERANCE);

        // The last tab must reach the far edge exactly.
        let last = strip.bounds(3);
        assert!((last.min_x - 0.825).abs() < TOLERANCE);
        assert!((last.max_x - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_no_gap_tiles_exactly() {
        let strip = TabStrip { vertical: false, gap: 0.0, max_button_size: 0.0, count: 5 };
        for i in 0..4 {
            let here = strip.bounds(i);
            let next = strip.bounds(i + 1);
            assert!((here.max_x - next.min_x).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_vertical_anchors_from_top() {
        let strip = TabStrip { vertical: true, gap: 0.0, max_button_size: 0.0, count: 2 };

        let first = strip.bounds(0);
        assert!((first.min_y - 0.5).abs() < TOLERANCE);
        assert!((first.max_y - 1.0).abs() < TOLERANCE);
        assert!((first.min_x - 0.0).abs() < TOLERANCE);
        assert!((first.max_x - 1.0).abs() < TOLERANCE);

        let second = strip.bounds(1);
        assert!((second.min_y - 0.0).abs() < TOLERANCE);
        assert!((second.max_y - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_max_button_size_caps() {
        let strip = TabStrip { vertical: false, gap: 0.0, max_button_size: 0.1, count: 4 };
        let first = strip.bounds(0);
        assert!((first.max_x - 0.1).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_strip_is_full_square() {
        let strip = TabStrip { count: 0, ..TabStrip::default() };
        assert_eq!(strip.bounds(0), Bounds::FULL);
    }
}
