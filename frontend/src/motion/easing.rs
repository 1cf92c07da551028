//! Timing functions rendered as CSS.

use std::fmt;

/// Easing curve of a fixed-duration transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub const fn bezier(points: [f64; 4]) -> Self {
        Easing::CubicBezier(points[0], points[1], points[2], points[3])
    }

    /// CSS timing function.
    ///
    /// CSS rejects bezier x coordinates outside `[0, 1]` (and drops the
    /// whole declaration with them), so they are clamped. The y coordinates
    /// are left alone; overshooting y is valid.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({}, {}, {}, {})",
                x1.clamp(0.0, 1.0),
                y1,
                x2.clamp(0.0, 1.0),
                y2
            ),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_easings() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::Linear.to_string(), "linear");
    }

    #[test]
    fn test_bezier_clamps_x_only() {
        let easing = Easing::bezier([0.6, 0.05, -0.01, 0.9]);
        assert_eq!(easing.css(), "cubic-bezier(0.6, 0.05, 0, 0.9)");

        let overshoot = Easing::CubicBezier(1.4, -0.5, 0.5, 1.6);
        assert_eq!(overshoot.css(), "cubic-bezier(1, -0.5, 0.5, 1.6)");
    }
}
