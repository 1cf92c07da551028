//! Poses and transitions of the hero section.

use crate::config::*;
use crate::types::{ButtonState, Visibility};

use super::{Easing, Pose, Spring, Transition};

/// Properties animated by the entrance transitions.
const ENTRANCE_PROPERTIES: &[&str] = &["opacity", "transform"];

/// Properties animated by the call-to-action hover spring.
const CTA_PROPERTIES: &[&str] = &["transform", "box-shadow"];

pub const FLOAT_A_NAME: &str = "hero-float-a";
pub const FLOAT_B_NAME: &str = "hero-float-b";

// =============================================================================
// Transitions
// =============================================================================

pub fn container_transition() -> Transition {
    Transition::FadeIn {
        duration: CONTAINER_FADE_SECS,
        easing: Easing::EaseOut,
    }
}

pub fn stagger() -> Transition {
    Transition::StaggerChildren {
        delay_children: STAGGER_DELAY_CHILDREN_SECS,
        stagger: STAGGER_INTERVAL_SECS,
    }
}

pub fn item_transition() -> Transition {
    Transition::FadeIn {
        duration: ITEM_DURATION_SECS,
        easing: Easing::bezier(ITEM_EASING),
    }
}

pub fn image_panel_transition() -> Transition {
    Transition::FadeIn {
        duration: IMAGE_PANEL_DURATION_SECS,
        easing: Easing::EaseOut,
    }
}

pub fn cta_spring() -> Spring {
    Spring::new(CTA_SPRING_STIFFNESS, CTA_SPRING_DAMPING, CTA_SPRING_MASS)
}

pub fn cta_transition() -> Transition {
    Transition::SpringHover(cta_spring())
}

/// Scale transition into the tap pose and back to rest.
pub fn cta_press_transition() -> Transition {
    Transition::SpringHover(Spring::new(
        CTA_PRESS_SPRING_STIFFNESS,
        CTA_PRESS_SPRING_DAMPING,
        CTA_SPRING_MASS,
    ))
}

pub fn cta_shadow_fade() -> Transition {
    Transition::FadeIn {
        duration: CTA_SHADOW_FADE_SECS,
        easing: Easing::EaseOut,
    }
}

pub fn float_a() -> Transition {
    Transition::FloatLoop {
        duration: FLOAT_A_DURATION_SECS,
        amplitude: FLOAT_A_AMPLITUDE,
        easing: Easing::EaseInOut,
    }
}

pub fn float_b() -> Transition {
    Transition::FloatLoop {
        duration: FLOAT_B_DURATION_SECS,
        amplitude: FLOAT_B_AMPLITUDE,
        easing: Easing::EaseInOut,
    }
}

// =============================================================================
// Poses
// =============================================================================

pub fn container_pose(visibility: Visibility) -> Pose {
    match visibility {
        Visibility::Hidden => Pose::REST.opacity(0.0),
        Visibility::Visible => Pose::REST,
    }
}

pub fn item_pose(visibility: Visibility) -> Pose {
    match visibility {
        Visibility::Hidden => Pose::REST.opacity(0.0).offset(0.0, ITEM_HIDDEN_OFFSET_Y),
        Visibility::Visible => Pose::REST,
    }
}

pub fn image_panel_pose(visibility: Visibility) -> Pose {
    match visibility {
        Visibility::Hidden => Pose::REST.opacity(0.0).offset(IMAGE_PANEL_HIDDEN_OFFSET_X, 0.0),
        Visibility::Visible => Pose::REST,
    }
}

pub fn cta_pose(state: ButtonState) -> Pose {
    match state {
        ButtonState::Initial => Pose::REST,
        ButtonState::Hover => Pose::REST.scale(CTA_HOVER_SCALE).shadow(CTA_HOVER_SHADOW),
        ButtonState::Tap => Pose::REST.scale(CTA_TAP_SCALE),
    }
}

// =============================================================================
// Inline styles
// =============================================================================

fn with_transition(pose: Pose, transition: &Transition, properties: &[&str], delay: f64) -> String {
    match transition.css(properties, delay) {
        Some(css) => format!("{} transition: {};", pose.css(), css),
        None => pose.css(),
    }
}

pub fn container_style(visibility: Visibility) -> String {
    with_transition(
        container_pose(visibility),
        &container_transition(),
        &["opacity"],
        0.0,
    )
}

/// Style of the staggered child at `index` (declaration order).
pub fn item_style(visibility: Visibility, index: usize) -> String {
    with_transition(
        item_pose(visibility),
        &item_transition(),
        ENTRANCE_PROPERTIES,
        stagger().delay_for(index),
    )
}

pub fn image_panel_style(visibility: Visibility) -> String {
    with_transition(
        image_panel_pose(visibility),
        &image_panel_transition(),
        ENTRANCE_PROPERTIES,
        0.0,
    )
}

/// CSS `transition` values of the call-to-action, one per target pose.
///
/// Sampling a spring is not free, so components build this once and pass
/// it to [`cta_style`].
#[derive(Clone, Debug, PartialEq)]
pub struct CtaTransitions {
    /// Moving into the hover pose.
    pub hover: String,
    /// Moving into the tap pose or back to rest.
    pub press: String,
}

impl CtaTransitions {
    pub fn new() -> Self {
        let hover = cta_transition()
            .css(CTA_PROPERTIES, 0.0)
            .unwrap_or_default();
        let press = [
            cta_press_transition().css(&["transform"], 0.0),
            cta_shadow_fade().css(&["box-shadow"], 0.0),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
        Self { hover, press }
    }

    /// Transition used while moving into `state`.
    pub fn for_state(&self, state: ButtonState) -> &str {
        match state {
            ButtonState::Hover => &self.hover,
            ButtonState::Initial | ButtonState::Tap => &self.press,
        }
    }
}

impl Default for CtaTransitions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn cta_style(state: ButtonState, transitions: &CtaTransitions) -> String {
    format!(
        "{} transition: {};",
        cta_pose(state).css(),
        transitions.for_state(state)
    )
}

pub fn float_style(transition: &Transition, name: &str) -> String {
    transition
        .animation(name)
        .map(|animation| format!("animation: {};", animation))
        .unwrap_or_default()
}

/// Keyframe rules for both floating shapes.
pub fn float_keyframes() -> String {
    [(float_a(), FLOAT_A_NAME), (float_b(), FLOAT_B_NAME)]
        .iter()
        .filter_map(|(transition, name)| transition.keyframes(name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of staggered children rendered by the hero.
    const STAGGERED_CHILDREN: usize = 5;

    #[test]
    fn test_entrance_starts_transparent_and_offset() {
        assert_eq!(container_pose(Visibility::Hidden).opacity, 0.0);
        let hidden = item_pose(Visibility::Hidden);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, 20.0);
        for index in 0..STAGGERED_CHILDREN {
            assert!(item_style(Visibility::Hidden, index)
                .starts_with("opacity: 0; transform: translate(0px, 20px) scale(1);"));
        }
    }

    #[test]
    fn test_entrance_settles_opaque_and_untranslated() {
        assert!(container_pose(Visibility::Visible).is_settled());
        assert!(item_pose(Visibility::Visible).is_settled());
        assert!(image_panel_pose(Visibility::Visible).is_settled());
        for index in 0..STAGGERED_CHILDREN {
            assert!(item_style(Visibility::Visible, index)
                .starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
        }
    }

    #[test]
    fn test_item_style_carries_stagger_delay() {
        let first = item_style(Visibility::Visible, 0);
        let third = item_style(Visibility::Visible, 2);
        assert!(first.contains("opacity 0.8s cubic-bezier(0.6, 0.05, 0, 0.9) 0.2s"));
        assert!(third.contains("transform 0.8s cubic-bezier(0.6, 0.05, 0, 0.9) 0.8s"));
    }

    #[test]
    fn test_image_panel_slides_in_independently() {
        let hidden = image_panel_pose(Visibility::Hidden);
        assert_eq!((hidden.opacity, hidden.x), (0.0, 100.0));
        assert!(image_panel_style(Visibility::Visible).contains("opacity 1.2s ease-out 0s"));
    }

    #[test]
    fn test_cta_poses() {
        assert_eq!(cta_pose(ButtonState::Initial), Pose::REST);

        let hover = cta_pose(ButtonState::Hover);
        assert_eq!(hover.scale, 1.05);
        assert_eq!(hover.shadow, Some("0 10px 25px rgba(88, 140, 126, 0.4)"));

        let tap = cta_pose(ButtonState::Tap);
        assert_eq!(tap.scale, 0.95);
        assert_eq!(tap.shadow, None);
    }

    #[test]
    fn test_cta_hover_uses_spring_for_transform_and_shadow() {
        let transitions = CtaTransitions::new();
        let hover = &transitions.hover;
        assert!(hover.starts_with("transform "));
        assert!(hover.contains(", box-shadow "));
        assert_eq!(hover.matches("linear(0, ").count(), 2);

        let style = cta_style(ButtonState::Hover, &transitions);
        assert!(style.contains("scale(1.05)"));
        assert!(style.ends_with(&format!("transition: {};", hover)));
    }

    #[test]
    fn test_cta_tap_and_rest_do_not_use_hover_spring() {
        let transitions = CtaTransitions::new();
        assert_ne!(transitions.press, transitions.hover);
        assert!(transitions.press.starts_with("transform "));
        assert!(transitions.press.ends_with(", box-shadow 0.3s ease-out 0s"));
        // Only the scale springs; the shadow fades.
        assert_eq!(transitions.press.matches("linear(0, ").count(), 1);

        // The press spring is better damped, so it settles sooner.
        let press = cta_press_transition().duration().unwrap_or_default();
        let hover = cta_transition().duration().unwrap_or_default();
        assert!(press < hover);

        for state in [ButtonState::Initial, ButtonState::Tap] {
            let style = cta_style(state, &transitions);
            assert!(style.ends_with(&format!("transition: {};", transitions.press)));
        }
    }

    #[test]
    fn test_float_loops() {
        assert_eq!(
            float_style(&float_a(), FLOAT_A_NAME),
            "animation: hero-float-a 3s ease-in-out 0s infinite alternate;"
        );
        assert_eq!(
            float_style(&float_b(), FLOAT_B_NAME),
            "animation: hero-float-b 4s ease-in-out 0s infinite alternate;"
        );
        let keyframes = float_keyframes();
        assert!(keyframes.contains("translateY(-15px)"));
        assert!(keyframes.contains("translateY(20px)"));
        assert_eq!(float_style(&stagger(), "none"), "");
    }
}
