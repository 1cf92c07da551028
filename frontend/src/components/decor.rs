//! Decorative pieces of the hero: blurred backdrop, framed image, floating dots.

use leptos::*;

use crate::motion::{presets, Transition};

#[component]
pub fn BlurBackdrop() -> impl IntoView {
    view! {
        <div class="hero-backdrop" aria-hidden="true">
            <div class="hero-blur hero-blur-top"></div>
            <div class="hero-blur hero-blur-middle"></div>
            <div class="hero-blur hero-blur-bottom"></div>
        </div>
    }
}

/// Circular glass frame around the hero image. The image zooms on hover
/// (stylesheet only). A missing image is left to the browser.
#[component]
pub fn HeroImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
) -> impl IntoView {
    view! {
        <div class="hero-frame">
            <div class="hero-frame-glass"></div>
            <div class="hero-frame-inner">
                <img class="hero-image" src=src alt=alt fetchpriority="high" decoding="async"/>
            </div>
        </div>
    }
}

/// A dot bobbing up and down forever.
#[component]
pub fn FloatingShape(
    /// A `Transition::FloatLoop`
    transition: Transition,
    /// Keyframes name, see [`presets::float_keyframes`]
    name: &'static str,
    /// Extra class placing and sizing the dot
    variant: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("hero-float {}", variant)
            style=presets::float_style(&transition, name)
            aria-hidden="true"
        ></div>
    }
}
