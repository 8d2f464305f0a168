//! Wires the dropdown options to [`ThemeToggle::set_theme`].

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::DocumentSurface;
use crate::theme::{ThemeToggle, ToggleOption};

/// Attach a click listener to each dropdown option.
///
/// Listeners live for the page view, so their closures are leaked on purpose.
pub fn bind_theme_toggle(surface: &DocumentSurface, toggle: ThemeToggle) {
    for option in ToggleOption::ALL {
        let id = toggle.config().option_id(option).to_string();
        let Some(element) = surface.element(&id) else {
            tracing::warn!(id = %id, "Theme option element missing, not bound");
            continue;
        };

        let mut target = surface.clone();
        let toggle = toggle.clone();
        let onclick = Closure::wrap(Box::new(move |event: web_sys::Event| {
            // Options are anchors; keep the page from jumping to "#".
            event.prevent_default();
            toggle.set_theme(&mut target, option.theme());
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(e) =
            element.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        {
            tracing::error!(id = %id, "Failed to bind theme option: {:?}", e);
            continue;
        }
        onclick.forget();
    }

    tracing::debug!("Theme toggle bound");
}
