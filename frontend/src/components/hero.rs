//! Hero section component
//!
//! Headline card, call-to-action, framed image and decoration. On mount
//! the content fades and slides in child by child while the image panel
//! slides in alongside; afterwards the content follows the page scroll
//! (see [`crate::parallax`]) until the component is unmounted.

use std::rc::Rc;

use leptos::*;

use super::{BlurBackdrop, CtaButton, FloatingShape, HeroImage};
use crate::config::*;
use crate::motion::presets::{self, FLOAT_A_NAME, FLOAT_B_NAME};
use crate::parallax::{bind_parallax, ParallaxConfig, StyleSink};
use crate::scroll::{ScrollSource, SubscriptionSlot, WindowScroll};
use crate::types::Visibility;

/// Subscribe the content node to scroll-driven parallax.
fn attach_parallax<S: StyleSink + 'static>(
    scroll: Option<Rc<dyn ScrollSource>>,
    target: S,
    slot: &SubscriptionSlot,
) {
    let subscription = match scroll {
        Some(source) => bind_parallax(source.as_ref(), target, ParallaxConfig::default()),
        None => WindowScroll::current()
            .and_then(|source| bind_parallax(&source, target, ParallaxConfig::default())),
    };
    match subscription {
        Ok(subscription) => slot.install(subscription),
        Err(e) => log::warn!("Parallax disabled: {}", e),
    }
}

#[component]
pub fn Hero(
    /// Called once per click on the call-to-action
    #[prop(optional, into)]
    on_cta_click: Option<Callback<()>>,
    /// Scroll source driving the parallax; defaults to the browser window
    #[prop(optional)]
    scroll: Option<Rc<dyn ScrollSource>>,
) -> impl IntoView {
    let content_ref = create_node_ref::<html::Div>();
    let parallax = Rc::new(SubscriptionSlot::new());

    {
        let parallax = parallax.clone();
        content_ref.on_load(move |element| {
            let target: web_sys::HtmlElement = (*element).clone().into();
            attach_parallax(scroll, target, &parallax);
        });
    }
    on_cleanup(move || parallax.release());

    // Flip to visible on the second frame so the hidden pose is painted
    // first and the transitions have something to start from.
    let (entered, set_entered) = create_signal(false);
    request_animation_frame(move || {
        request_animation_frame(move || {
            // The component may be gone by now; the entrance is then dropped.
            let _ = set_entered.try_set(true);
        })
    });
    let visibility = move || Visibility::from_entered(entered.get());

    log::debug!("Hero mounted");

    view! {
        <section class="hero" dir="rtl">
            <style>{presets::float_keyframes()}</style>
            <BlurBackdrop/>

            <div class="hero-container">
                <div class="hero-grid">
                    <div class="hero-content" node_ref=content_ref>
                        <div class="hero-stagger" style=move || presets::container_style(visibility())>
                            <div class="hero-card" style=move || presets::item_style(visibility(), 0)>
                                <h1 class="hero-title" style=move || presets::item_style(visibility(), 1)>
                                    {HERO_TITLE}
                                </h1>
                                <h2 class="hero-subtitle" style=move || presets::item_style(visibility(), 2)>
                                    {HERO_SUBTITLE}
                                </h2>
                                <p class="hero-tagline" style=move || presets::item_style(visibility(), 3)>
                                    {HERO_TAGLINE}
                                </p>
                                <CtaButton label=HERO_CTA_LABEL on_click=on_cta_click/>
                            </div>

                            <div class="hero-about" style=move || presets::item_style(visibility(), 4)>
                                <p>{HERO_ABOUT}</p>
                            </div>
                        </div>
                    </div>

                    <div class="hero-media" style=move || presets::image_panel_style(visibility())>
                        <HeroImage src=HERO_IMAGE_SRC alt=HERO_IMAGE_ALT/>
                    </div>

                    <FloatingShape transition=presets::float_a() name=FLOAT_A_NAME variant="hero-float-low"/>
                    <FloatingShape transition=presets::float_b() name=FLOAT_B_NAME variant="hero-float-high"/>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ManualScroll;
    use crate::AppResult;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingSink {
        writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl StyleSink for RecordingSink {
        fn set_style(&self, property: &str, value: &str) -> AppResult<()> {
            self.writes
                .borrow_mut()
                .push((property.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_cleanup_releases_parallax_subscription() {
        let runtime = create_runtime();

        let manual = ManualScroll::new();
        let source: Rc<dyn ScrollSource> = Rc::new(manual.clone());
        let sink = RecordingSink::default();
        let slot = SubscriptionSlot::new();

        attach_parallax(Some(source), sink.clone(), &slot);
        assert!(slot.is_active());
        assert_eq!(manual.listener_count(), 1);

        manual.scroll_to(350.0);
        assert_eq!(
            *sink.writes.borrow(),
            vec![
                ("opacity".to_string(), "0.5".to_string()),
                ("transform".to_string(), "translateY(175px)".to_string()),
            ]
        );

        // Unmount: the component's `on_cleanup` hook.
        slot.release();

        manual.scroll_to(600.0);
        assert_eq!(sink.writes.borrow().len(), 2);
        assert_eq!(manual.listener_count(), 0);
        assert!(!slot.is_active());

        runtime.dispose();
    }
}
