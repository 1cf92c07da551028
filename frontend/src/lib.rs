//! Beta Salon - Landing Page Hero (Leptos)
//!
//! A WebAssembly frontend rendering the landing page hero section: headline,
//! call-to-action, framed image, scroll parallax and entrance animations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (router, <html dir="rtl">, title)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero                                                        │
//! │  ├── BlurBackdrop                                            │
//! │  ├── content  ◀── parallax (ScrollSource → StyleSink)        │
//! │  │   └── stagger container                                   │
//! │  │       ├── card: title, subtitle, tagline, CtaButton       │
//! │  │       └── about                                           │
//! │  ├── image panel (HeroImage)                                 │
//! │  └── FloatingShape × 2                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Tuning constants and copy
//! - [`types`] - Animation states and errors
//! - [`motion`] - Easings, springs, poses and transition presets
//! - [`scroll`] - Scroll source capability and subscriptions
//! - [`parallax`] - Scroll-linked fade and drift
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod motion;
pub mod parallax;
pub mod scroll;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Animation states
    ButtonState, Visibility,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Capabilities
pub use parallax::{bind_parallax, ParallaxConfig, ParallaxFrame, StyleSink};
pub use scroll::{ManualScroll, ScrollSource, Subscription, WindowScroll};

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and logger, then mount [`App`] on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("💈 Beta Salon - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="he" dir="rtl"/>
        <Title text=PAGE_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Landing/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Landing() -> impl IntoView {
    let on_cta_click = |_: ()| {
        log::info!("📅 Booking requested from hero");
    };

    view! {
        <Hero on_cta_click=on_cta_click/>
    }
}
