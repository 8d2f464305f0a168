//! Light/dark theme toggle.
//!
//! The page has three surfaces that must agree on one theme value:
//! - the theme attribute on the document root (read by CSS)
//! - the dropdown label text
//! - the `active` class on exactly one of the two dropdown options
//!
//! All three are derived from [`Theme`] and written together by
//! [`ThemeToggle::set_theme`]. The DOM itself sits behind [`ThemeSurface`]
//! so the toggle can run against the browser document or an in-memory
//! stand-in.

pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::MemorySurface;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Value written to the root theme attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse an attribute value. Anything other than `light`/`dark` is not a theme.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Text shown in the dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two dropdown entries, each bound to a single theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleOption {
    LightDropdown,
    DarkDropdown,
}

impl ToggleOption {
    pub const ALL: [ToggleOption; 2] = [ToggleOption::LightDropdown, ToggleOption::DarkDropdown];

    pub fn theme(&self) -> Theme {
        match self {
            ToggleOption::LightDropdown => Theme::Light,
            ToggleOption::DarkDropdown => Theme::Dark,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => ToggleOption::LightDropdown,
            Theme::Dark => ToggleOption::DarkDropdown,
        }
    }

    /// Whether this option carries the active class while `theme` is applied
    pub fn is_active_for(&self, theme: Theme) -> bool {
        self.theme() == theme
    }
}

/// Element ids and names the toggle writes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToggleConfig {
    /// Attribute on the document root holding the theme
    #[serde(default = "default_attribute")]
    pub attribute: String,
    #[serde(default = "default_label_id")]
    pub label_id: String,
    #[serde(default = "default_light_option_id")]
    pub light_option_id: String,
    #[serde(default = "default_dark_option_id")]
    pub dark_option_id: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

fn default_attribute() -> String {
    "data-bs-theme".to_string()
}

fn default_label_id() -> String {
    "theme-label".to_string()
}

fn default_light_option_id() -> String {
    "light-dropdown".to_string()
}

fn default_dark_option_id() -> String {
    "dark-dropdown".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

impl Default for ThemeToggleConfig {
    fn default() -> Self {
        Self {
            attribute: default_attribute(),
            label_id: default_label_id(),
            light_option_id: default_light_option_id(),
            dark_option_id: default_dark_option_id(),
            active_class: default_active_class(),
        }
    }
}

/// A toggle config that cannot keep exactly one option active.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeConfigError {
    #[error("theme.{0} must not be empty")]
    Empty(&'static str),

    #[error("theme.light_option_id and theme.dark_option_id are both \"{0}\"")]
    SharedOptionId(String),
}

impl ThemeToggleConfig {
    pub fn option_id(&self, option: ToggleOption) -> &str {
        match option {
            ToggleOption::LightDropdown => &self.light_option_id,
            ToggleOption::DarkDropdown => &self.dark_option_id,
        }
    }

    /// Reject configs where one element would stand for both options.
    pub fn validate(&self) -> Result<(), ThemeConfigError> {
        for (field, value) in [
            ("attribute", &self.attribute),
            ("label_id", &self.label_id),
            ("light_option_id", &self.light_option_id),
            ("dark_option_id", &self.dark_option_id),
            ("active_class", &self.active_class),
        ] {
            if value.trim().is_empty() {
                return Err(ThemeConfigError::Empty(field));
            }
        }
        if self.light_option_id == self.dark_option_id {
            return Err(ThemeConfigError::SharedOptionId(self.light_option_id.clone()));
        }
        Ok(())
    }
}

/// The observable surfaces the toggle keeps consistent.
///
/// Implementations write straight through; they never decide which option
/// is active or what the label says.
pub trait ThemeSurface {
    /// Current value of the root theme attribute, if set
    fn root_theme(&self, attribute: &str) -> Option<String>;

    fn set_root_theme(&mut self, attribute: &str, value: &str);

    fn set_label(&mut self, label_id: &str, text: &str);

    fn set_option_active(&mut self, option_id: &str, active_class: &str, active: bool);
}

/// Theme toggle state machine.
///
/// Two states, one transition: `set_theme(x)` moves from either state to `x`.
/// The current state is never cached here; it lives on the root attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeToggle {
    config: ThemeToggleConfig,
}

impl ThemeToggle {
    pub fn new(config: ThemeToggleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThemeToggleConfig {
        &self.config
    }

    /// Theme currently encoded on the root, if any.
    pub fn current<S: ThemeSurface + ?Sized>(&self, surface: &S) -> Option<Theme> {
        surface
            .root_theme(&self.config.attribute)
            .and_then(|value| Theme::parse(&value))
    }

    /// Apply `theme` to all three surfaces.
    ///
    /// Always rewrites every surface, even when `theme` is already current.
    pub fn set_theme<S: ThemeSurface + ?Sized>(&self, surface: &mut S, theme: Theme) {
        let previous = self.current(surface);

        surface.set_root_theme(&self.config.attribute, theme.as_str());
        surface.set_label(&self.config.label_id, theme.label());
        for option in ToggleOption::ALL {
            surface.set_option_active(
                self.config.option_id(option),
                &self.config.active_class,
                option.is_active_for(theme),
            );
        }

        tracing::debug!(?previous, current = %theme, "Theme applied");
    }

    /// Map a clicked element id back to its option.
    pub fn option_for_id(&self, id: &str) -> Option<ToggleOption> {
        ToggleOption::ALL
            .into_iter()
            .find(|option| self.config.option_id(*option) == id)
    }

    /// Class list for an option rendered while `theme` is applied.
    pub fn option_class(&self, base: &str, option: ToggleOption, theme: Theme) -> String {
        if option.is_active_for(theme) {
            format!("{} {}", base, self.config.active_class)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_attribute_values() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("auto"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_labels_are_capitalized() {
        assert_eq!(Theme::Light.label(), "Light");
        assert_eq!(Theme::Dark.label(), "Dark");
    }

    #[test]
    fn test_exactly_one_option_active_per_theme() {
        for theme in Theme::ALL {
            let active: Vec<_> = ToggleOption::ALL
                .into_iter()
                .filter(|o| o.is_active_for(theme))
                .collect();
            assert_eq!(active, vec![ToggleOption::for_theme(theme)]);
        }
    }

    #[test]
    fn test_option_for_id_uses_configured_ids() {
        let toggle = ThemeToggle::new(ThemeToggleConfig {
            light_option_id: "day".into(),
            dark_option_id: "night".into(),
            ..Default::default()
        });
        assert_eq!(toggle.option_for_id("day"), Some(ToggleOption::LightDropdown));
        assert_eq!(toggle.option_for_id("night"), Some(ToggleOption::DarkDropdown));
        assert_eq!(toggle.option_for_id("light-dropdown"), None);
    }

    #[test]
    fn test_validate_rejects_shared_option_id() {
        let config = ThemeToggleConfig {
            light_option_id: "opt".into(),
            dark_option_id: "opt".into(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ThemeConfigError::SharedOptionId("opt".into()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_ids() {
        let config = ThemeToggleConfig {
            attribute: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ThemeConfigError::Empty("attribute")));

        let config = ThemeToggleConfig {
            dark_option_id: " ".into(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ThemeConfigError::Empty("dark_option_id"))
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ThemeToggleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_option_class_appends_active_marker() {
        let toggle = ThemeToggle::default();
        assert_eq!(
            toggle.option_class("dropdown-item", ToggleOption::DarkDropdown, Theme::Dark),
            "dropdown-item active"
        );
        assert_eq!(
            toggle.option_class("dropdown-item", ToggleOption::LightDropdown, Theme::Dark),
            "dropdown-item"
        );
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ThemeToggleConfig =
            serde_json::from_str(r#"{"attribute": "data-theme"}"#).unwrap();
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.label_id, "theme-label");
        assert_eq!(config.active_class, "active");
    }
}
