//! Light/dark theme dropdown for the navbar.

use dioxus::prelude::*;

use crate::theme::{Theme, ThemeToggle, ThemeToggleConfig, ToggleOption};

/// Theme dropdown (Bootstrap markup).
///
/// The label and the active option are rendered from the same derivations
/// [`ThemeToggle::set_theme`] uses on the client, so the first paint already
/// matches what a click would produce.
#[component]
pub fn ThemeDropdown(
    /// Theme the page is served with
    theme: Theme,
    /// Element ids shared with the client
    config: ThemeToggleConfig,
) -> Element {
    let toggle = ThemeToggle::new(config.clone());
    let label_id = config.label_id.clone();
    let label = theme.label();
    let options: Vec<(String, String, &'static str)> = ToggleOption::ALL
        .into_iter()
        .map(|option| {
            (
                config.option_id(option).to_string(),
                toggle.option_class("dropdown-item", option, theme),
                option.theme().label(),
            )
        })
        .collect();

    rsx! {
        li { class: "nav-item dropdown",
            a {
                class: "nav-link dropdown-toggle",
                href: "#",
                role: "button",
                "data-bs-toggle": "dropdown",
                "aria-expanded": "false",
                "Theme: "
                span { id: "{label_id}", "{label}" }
            }
            ul { class: "dropdown-menu dropdown-menu-end",
                for (id , class , option_label) in options {
                    li { key: "{id}",
                        a { id: "{id}", class: "{class}", href: "#", "{option_label}" }
                    }
                }
            }
        }
    }
}
