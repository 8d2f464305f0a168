//! In-memory [`ThemeSurface`] used by tests and server-side previews.

use std::collections::{BTreeSet, HashMap};

use super::ThemeSurface;

/// Minimal document model: root attributes, element text, element classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    root_attributes: HashMap<String, String>,
    text: HashMap<String, String>,
    classes: HashMap<String, BTreeSet<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose root already carries `attribute="value"`
    pub fn with_root(attribute: &str, value: &str) -> Self {
        let mut surface = Self::default();
        surface
            .root_attributes
            .insert(attribute.to_string(), value.to_string());
        surface
    }

    pub fn root_attribute(&self, attribute: &str) -> Option<&str> {
        self.root_attributes.get(attribute).map(String::as_str)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes.get(id).is_some_and(|set| set.contains(class))
    }

    /// Seed an element's class list (e.g. `dropdown-item active`)
    pub fn set_classes(&mut self, id: &str, classes: &str) {
        self.classes.insert(
            id.to_string(),
            classes.split_whitespace().map(str::to_string).collect(),
        );
    }
}

impl ThemeSurface for MemorySurface {
    fn root_theme(&self, attribute: &str) -> Option<String> {
        self.root_attributes.get(attribute).cloned()
    }

    fn set_root_theme(&mut self, attribute: &str, value: &str) {
        self.root_attributes
            .insert(attribute.to_string(), value.to_string());
    }

    fn set_label(&mut self, label_id: &str, text: &str) {
        self.text.insert(label_id.to_string(), text.to_string());
    }

    fn set_option_active(&mut self, option_id: &str, active_class: &str, active: bool) {
        let classes = self.classes.entry(option_id.to_string()).or_default();
        if active {
            classes.insert(active_class.to_string());
        } else {
            classes.remove(active_class);
        }
    }
}
