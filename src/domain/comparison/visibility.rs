// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection math.

/// Vertical extent along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }
}

/// Fraction (0.0–1.0) of `target` that lies inside `viewport`.
///
/// An empty or degenerate target is never visible.
#[must_use]
pub fn visible_fraction(target: Extent, viewport: Extent) -> f32 {
    if !(target.height > 0.0) || !(viewport.height > 0.0) {
        return 0.0;
    }
    let overlap = target.bottom().min(viewport.bottom()) - target.top.max(viewport.top);
    (overlap / target.height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_inside_is_one() {
        let fraction = visible_fraction(Extent::new(100.0, 200.0), Extent::new(0.0, 600.0));
        assert_eq!(fraction, 1.0);
    }

    #[test]
    fn below_the_fold_is_zero() {
        let fraction = visible_fraction(Extent::new(900.0, 200.0), Extent::new(0.0, 600.0));
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn partial_overlap_at_bottom_edge() {
        // Only the top 60px of a 200px widget are on screen.
        let fraction = visible_fraction(Extent::new(540.0, 200.0), Extent::new(0.0, 600.0));
        assert!((fraction - 0.3).abs() < 1e-6);
    }

    #[test]
    fn scrolled_past_is_zero() {
        let fraction = visible_fraction(Extent::new(0.0, 200.0), Extent::new(400.0, 600.0));
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn degenerate_extents_are_invisible() {
        assert_eq!(
            visible_fraction(Extent::new(0.0, 0.0), Extent::new(0.0, 600.0)),
            0.0
        );
        assert_eq!(
            visible_fraction(Extent::new(0.0, 100.0), Extent::new(0.0, f32::NAN)),
            0.0
        );
    }
}
