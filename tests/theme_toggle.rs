#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Theme toggle behavior against an in-memory document.
//!
//! Covers the dropdown scenarios (dark->light, dark->dark, light->dark,
//! light->light) plus the invariants that must hold after every call:
//! root attribute and label follow the requested theme, and exactly one
//! option carries the active class.

use caregiving_analytics::theme::{
    MemorySurface, Theme, ThemeToggle, ThemeToggleConfig, ToggleOption,
};

const ATTR: &str = "data-bs-theme";

/// Page as served: root attribute set, option classes seeded from markup.
fn page(initial: Theme) -> MemorySurface {
    let mut surface = MemorySurface::with_root(ATTR, initial.as_str());
    surface.set_classes(
        "light-dropdown",
        if initial == Theme::Light { "dropdown-item active" } else { "dropdown-item" },
    );
    surface.set_classes(
        "dark-dropdown",
        if initial == Theme::Dark { "dropdown-item active" } else { "dropdown-item" },
    );
    surface
}

fn assert_state(surface: &MemorySurface, theme: Theme) {
    assert_eq!(surface.root_attribute(ATTR), Some(theme.as_str()));
    assert_eq!(surface.text("theme-label"), Some(theme.label()));

    let light = surface.has_class("light-dropdown", "active");
    let dark = surface.has_class("dark-dropdown", "active");
    assert!(light ^ dark, "exactly one option must be active (light={light}, dark={dark})");
    assert_eq!(light, theme == Theme::Light);
    assert_eq!(dark, theme == Theme::Dark);
}

#[test]
fn dark_to_light() {
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Dark);

    toggle.set_theme(&mut surface, Theme::Light);

    assert_eq!(surface.root_attribute(ATTR), Some("light"));
    assert_eq!(surface.text("theme-label"), Some("Light"));
    assert!(surface.has_class("light-dropdown", "active"));
    assert!(!surface.has_class("dark-dropdown", "active"));
}

#[test]
fn dark_stays_dark() {
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Dark);

    toggle.set_theme(&mut surface, Theme::Dark);

    assert_eq!(surface.root_attribute(ATTR), Some("dark"));
    assert_eq!(surface.text("theme-label"), Some("Dark"));
    assert!(surface.has_class("dark-dropdown", "active"));
    assert!(!surface.has_class("light-dropdown", "active"));
}

#[test]
fn light_to_dark() {
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Light);

    toggle.set_theme(&mut surface, Theme::Dark);

    assert_eq!(surface.root_attribute(ATTR), Some("dark"));
    assert_eq!(surface.text("theme-label"), Some("Dark"));
    assert!(surface.has_class("dark-dropdown", "active"));
    assert!(!surface.has_class("light-dropdown", "active"));
}

#[test]
fn light_stays_light() {
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Light);

    toggle.set_theme(&mut surface, Theme::Light);

    assert_eq!(surface.root_attribute(ATTR), Some("light"));
    assert_eq!(surface.text("theme-label"), Some("Light"));
    assert!(surface.has_class("light-dropdown", "active"));
    assert!(!surface.has_class("dark-dropdown", "active"));
}

#[test]
fn other_classes_survive_toggling() {
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Dark);

    toggle.set_theme(&mut surface, Theme::Light);
    toggle.set_theme(&mut surface, Theme::Dark);

    assert!(surface.has_class("light-dropdown", "dropdown-item"));
    assert!(surface.has_class("dark-dropdown", "dropdown-item"));
}

#[test]
fn repeated_call_matches_single_call() {
    let toggle = ThemeToggle::default();
    for theme in Theme::ALL {
        for initial in Theme::ALL {
            let mut once = page(initial);
            toggle.set_theme(&mut once, theme);

            let mut twice = page(initial);
            toggle.set_theme(&mut twice, theme);
            toggle.set_theme(&mut twice, theme);

            assert_eq!(once, twice, "set_theme({theme}) from {initial} is not idempotent");
        }
    }
}

#[test]
fn idempotent_call_repairs_drifted_surfaces() {
    // State is re-applied, not short-circuited on an unchanged attribute.
    let toggle = ThemeToggle::default();
    let mut surface = page(Theme::Dark);
    surface.set_classes("light-dropdown", "dropdown-item active");

    toggle.set_theme(&mut surface, Theme::Dark);

    assert_state(&surface, Theme::Dark);
}

#[test]
fn every_sequence_keeps_one_active_option() {
    // All sequences up to length 6 from both starting states.
    let toggle = ThemeToggle::default();
    for initial in Theme::ALL {
        for len in 1..=6u32 {
            for bits in 0..(1u32 << len) {
                let mut surface = page(initial);
                for step in 0..len {
                    let theme = if bits & (1 << step) == 0 { Theme::Light } else { Theme::Dark };
                    toggle.set_theme(&mut surface, theme);
                    assert_state(&surface, theme);
                }
            }
        }
    }
}

#[test]
fn starts_from_blank_page() {
    let toggle = ThemeToggle::default();
    let mut surface = MemorySurface::new();
    assert_eq!(toggle.current(&surface), None);

    toggle.set_theme(&mut surface, Theme::Light);

    assert_state(&surface, Theme::Light);
    assert_eq!(toggle.current(&surface), Some(Theme::Light));
}

#[test]
fn current_reads_root_attribute() {
    let toggle = ThemeToggle::default();
    assert_eq!(toggle.current(&page(Theme::Dark)), Some(Theme::Dark));
    assert_eq!(toggle.current(&MemorySurface::with_root(ATTR, "sepia")), None);
}

#[test]
fn custom_ids_are_used_for_every_surface() {
    let toggle = ThemeToggle::new(ThemeToggleConfig {
        attribute: "data-theme".into(),
        label_id: "mode".into(),
        light_option_id: "day".into(),
        dark_option_id: "night".into(),
        active_class: "selected".into(),
    });
    let mut surface = MemorySurface::new();

    toggle.set_theme(&mut surface, Theme::Dark);

    assert_eq!(surface.root_attribute("data-theme"), Some("dark"));
    assert_eq!(surface.root_attribute(ATTR), None);
    assert_eq!(surface.text("mode"), Some("Dark"));
    assert!(surface.has_class("night", "selected"));
    assert!(!surface.has_class("day", "selected"));
}

#[test]
fn options_map_to_their_themes() {
    for option in ToggleOption::ALL {
        assert_eq!(ToggleOption::for_theme(option.theme()), option);
    }
    assert_eq!(ToggleOption::LightDropdown.theme(), Theme::Light);
    assert_eq!(ToggleOption::DarkDropdown.theme(), Theme::Dark);
}
