//! Visual poses: the animatable style values of an element at rest.

use super::css_number;

/// Animatable properties of a posed element.
///
/// `x`/`y` are pixel offsets from the layout position. `shadow` is only
/// written when set, leaving the stylesheet's shadow in effect otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub shadow: Option<&'static str>,
}

impl Pose {
    /// Fully opaque, untranslated, unscaled.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        shadow: None,
    };

    pub const fn opacity(self, opacity: f64) -> Self {
        Pose { opacity, ..self }
    }

    pub const fn offset(self, x: f64, y: f64) -> Self {
        Pose { x, y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn shadow(self, shadow: &'static str) -> Self {
        Pose {
            shadow: Some(shadow),
            ..self
        }
    }

    /// Opaque and at its layout position.
    pub fn is_settled(&self) -> bool {
        self.opacity == 1.0 && self.x == 0.0 && self.y == 0.0
    }

    /// Inline declarations for this pose.
    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            css_number(self.opacity),
            css_number(self.x),
            css_number(self.y),
            css_number(self.scale)
        );
        if let Some(shadow) = self.shadow {
            css.push_str(&format!(" box-shadow: {};", shadow));
        }
        css
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_css() {
        assert_eq!(
            Pose::REST.css(),
            "opacity: 1; transform: translate(0px, 0px) scale(1);"
        );
        assert!(Pose::REST.is_settled());
    }

    #[test]
    fn test_builder_and_shadow() {
        let pose = Pose::REST
            .opacity(0.0)
            .offset(0.0, 20.0)
            .scale(1.05)
            .shadow("0 1px 2px black");
        assert!(!pose.is_settled());
        assert_eq!(
            pose.css(),
            "opacity: 0; transform: translate(0px, 20px) scale(1.05); box-shadow: 0 1px 2px black;"
        );
    }
}
