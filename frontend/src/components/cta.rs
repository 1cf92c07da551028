//! Call-to-action button with spring hover/tap feedback.

use leptos::*;

use crate::motion::presets;
use crate::types::ButtonState;

/// Invoke the click handler, if one was supplied.
///
/// Whatever the handler does, including failing, is the caller's business.
pub fn fire_cta(handler: &Option<Callback<()>>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}

#[component]
pub fn CtaButton(
    /// Button text
    #[prop(into)]
    label: String,
    /// Invoked once per click
    #[prop(optional_no_strip)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);
    let (pressed, set_pressed) = create_signal(false);

    let transitions = presets::CtaTransitions::new();
    let style = move || {
        presets::cta_style(
            ButtonState::from_pointer(hovered.get(), pressed.get()),
            &transitions,
        )
    };

    let on_click_handler = move |_| {
        log::debug!("CTA activated");
        fire_cta(&on_click);
    };

    view! {
        <button
            type="button"
            class="hero-cta"
            style=style
            on:pointerenter=move |_| set_hovered.set(true)
            on:pointerleave=move |_| {
                set_hovered.set(false);
                set_pressed.set(false);
            }
            on:pointerdown=move |_| set_pressed.set(true)
            on:pointerup=move |_| set_pressed.set(false)
            on:pointercancel=move |_| set_pressed.set(false)
            on:click=on_click_handler
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fire_cta_invokes_once_per_click() {
        let runtime = create_runtime();

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let handler = Some(Callback::new(move |_: ()| counter.set(counter.get() + 1)));

        fire_cta(&handler);
        assert_eq!(clicks.get(), 1);
        fire_cta(&handler);
        fire_cta(&handler);
        assert_eq!(clicks.get(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_fire_cta_without_handler_is_a_no_op() {
        fire_cta(&None);
    }
}
