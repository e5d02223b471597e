//! Pointer-driven 3D tilt for the hero image section.
//!
//! The section rotates toward the pointer, proportionally to the pointer's
//! offset from the viewport center. The derivation lives here, off the DOM,
//! so it can run under plain `cargo test` on the host.

use crate::config::MAX_TILT_DEG;

/// Rotation applied to the hero image section, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl ParallaxAngles {
    /// Resting orientation, restored whenever the pointer leaves the section.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Derives the tilt for a pointer at `(x, y)` in a `w` by `h` viewport.
    ///
    /// Scales linearly from zero at the center to `MAX_TILT_DEG` at the
    /// viewport edges. No clamping: positions outside the viewport keep
    /// scaling, and the view layer renders whatever comes back.
    pub fn from_pointer(x: f64, y: f64, w: f64, h: f64) -> Self {
        let center_x = w / 2.0;
        let center_y = h / 2.0;
        Self {
            rotate_x: ((y - center_y) / center_y) * MAX_TILT_DEG,
            rotate_y: ((x - center_x) / center_x) * MAX_TILT_DEG,
        }
    }

    /// Inline CSS transform for the tilted section.
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

impl Default for ParallaxAngles {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_exactly_zero() {
        assert_eq!(ParallaxAngles::NEUTRAL.rotate_x, 0.0);
        assert_eq!(ParallaxAngles::NEUTRAL.rotate_y, 0.0);
        assert_eq!(ParallaxAngles::default(), ParallaxAngles::NEUTRAL);
    }

    #[test]
    fn viewport_center_gives_no_tilt() {
        let angles = ParallaxAngles::from_pointer(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(angles, ParallaxAngles::NEUTRAL);
    }

    #[test]
    fn tilt_matches_formula_exactly() {
        // pointer at (750, 200) in a 1000x800 viewport
        let angles = ParallaxAngles::from_pointer(750.0, 200.0, 1000.0, 800.0);
        assert_eq!(angles.rotate_y, ((750.0 - 500.0) / 500.0) * 10.0);
        assert_eq!(angles.rotate_x, ((200.0 - 400.0) / 400.0) * 10.0);
        assert_eq!(angles.rotate_y, 5.0);
        assert_eq!(angles.rotate_x, -5.0);
    }

    #[test]
    fn viewport_edges_hit_max_tilt() {
        let right_edge = ParallaxAngles::from_pointer(1000.0, 400.0, 1000.0, 800.0);
        assert_eq!(right_edge.rotate_y, 10.0);
        assert_eq!(right_edge.rotate_x, 0.0);

        let top_left = ParallaxAngles::from_pointer(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(top_left.rotate_y, -10.0);
        assert_eq!(top_left.rotate_x, -10.0);
    }

    #[test]
    fn positions_outside_viewport_stay_unclamped() {
        let angles = ParallaxAngles::from_pointer(1500.0, -400.0, 1000.0, 800.0);
        assert_eq!(angles.rotate_y, 20.0);
        assert_eq!(angles.rotate_x, -20.0);
    }

    #[test]
    fn css_transform_carries_both_axes() {
        let angles = ParallaxAngles {
            rotate_x: -5.0,
            rotate_y: 5.0,
        };
        assert_eq!(angles.css_transform(), "rotateX(-5deg) rotateY(5deg)");
        assert_eq!(
            ParallaxAngles::NEUTRAL.css_transform(),
            "rotateX(0deg) rotateY(0deg)"
        );
    }
}
