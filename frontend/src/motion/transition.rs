//! Transition presets.
//!
//! The closed set of ways an element moves between poses. `FadeIn` and
//! `SpringHover` render as CSS transitions, `StaggerChildren` only schedules
//! child start times, and `FloatLoop` renders as a CSS keyframe animation.

use super::{css_number, Easing, Spring};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Fixed-duration tween.
    FadeIn { duration: f64, easing: Easing },
    /// Child `i` starts at `delay_children + i * stagger` seconds.
    StaggerChildren { delay_children: f64, stagger: f64 },
    /// Physics-based transition, replayed through a sampled easing.
    SpringHover(Spring),
    /// Endless `0 -> amplitude -> 0` vertical oscillation, reversing each cycle.
    FloatLoop {
        duration: f64,
        amplitude: f64,
        easing: Easing,
    },
}

impl Transition {
    /// Start delay of the child at `index`. Zero for non-orchestrating presets.
    pub fn delay_for(&self, index: usize) -> f64 {
        match *self {
            Transition::StaggerChildren {
                delay_children,
                stagger,
            } => delay_children + stagger * index as f64,
            _ => 0.0,
        }
    }

    /// Duration of one run of this transition, in seconds.
    pub fn duration(&self) -> Option<f64> {
        match self {
            Transition::FadeIn { duration, .. } | Transition::FloatLoop { duration, .. } => {
                Some(*duration)
            }
            Transition::SpringHover(spring) => Some(spring.settle_time()),
            Transition::StaggerChildren { .. } => None,
        }
    }

    /// CSS `transition` value applying this preset to `properties`,
    /// starting after `delay` seconds.
    pub fn css(&self, properties: &[&str], delay: f64) -> Option<String> {
        let (duration, easing) = match self {
            Transition::FadeIn { duration, easing } => (*duration, easing.css()),
            Transition::SpringHover(spring) => (spring.settle_time(), spring.css_easing()),
            Transition::StaggerChildren { .. } | Transition::FloatLoop { .. } => return None,
        };
        let parts: Vec<String> = properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}s {} {}s",
                    property,
                    css_number(duration),
                    easing,
                    css_number(delay)
                )
            })
            .collect();
        Some(parts.join(", "))
    }

    /// `@keyframes` rule for a `FloatLoop`.
    pub fn keyframes(&self, name: &str) -> Option<String> {
        match *self {
            Transition::FloatLoop { amplitude, .. } => Some(format!(
                "@keyframes {name} {{ \
                 0% {{ transform: translateY(0px); }} \
                 50% {{ transform: translateY({}px); }} \
                 100% {{ transform: translateY(0px); }} }}",
                css_number(amplitude)
            )),
            _ => None,
        }
    }

    /// CSS `animation` value running a `FloatLoop`'s keyframes forever.
    pub fn animation(&self, name: &str) -> Option<String> {
        match *self {
            Transition::FloatLoop {
                duration, easing, ..
            } => Some(format!(
                "{} {}s {} 0s infinite alternate",
                name,
                css_number(duration),
                easing
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays_follow_declaration_order() {
        let stagger = Transition::StaggerChildren {
            delay_children: 0.2,
            stagger: 0.3,
        };
        let delays: Vec<f64> = (0..4).map(|i| stagger.delay_for(i)).collect();
        let expected = [0.2, 0.5, 0.8, 1.1];
        for (got, want) in delays.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9);
        }
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_fade_in_css() {
        let fade = Transition::FadeIn {
            duration: 0.8,
            easing: Easing::EaseOut,
        };
        assert_eq!(
            fade.css(&["opacity", "transform"], 0.5).as_deref(),
            Some("opacity 0.8s ease-out 0.5s, transform 0.8s ease-out 0.5s")
        );
        assert_eq!(fade.delay_for(3), 0.0);
    }

    #[test]
    fn test_spring_css_uses_settle_time() {
        let spring = Spring::new(400.0, 10.0, 1.0);
        let css = Transition::SpringHover(spring)
            .css(&["transform"], 0.0)
            .unwrap_or_default();
        assert!(css.starts_with(&format!("transform {}s linear(0, ", css_number(spring.settle_time()))));
        assert!(css.ends_with(", 1) 0s"));
    }

    #[test]
    fn test_float_loop_renders_animation_not_transition() {
        let float = Transition::FloatLoop {
            duration: 3.0,
            amplitude: -15.0,
            easing: Easing::EaseInOut,
        };
        assert_eq!(float.css(&["transform"], 0.0), None);
        assert_eq!(
            float.animation("float-a").as_deref(),
            Some("float-a 3s ease-in-out 0s infinite alternate")
        );
        let keyframes = float.keyframes("float-a").unwrap_or_default();
        assert!(keyframes.starts_with("@keyframes float-a {"));
        assert!(keyframes.contains("50% { transform: translateY(-15px); }"));
    }

    #[test]
    fn test_stagger_has_no_css() {
        let stagger = Transition::StaggerChildren {
            delay_children: 0.2,
            stagger: 0.3,
        };
        assert_eq!(stagger.css(&["opacity"], 0.0), None);
        assert_eq!(stagger.keyframes("x"), None);
        assert_eq!(stagger.duration(), None);
    }
}
