//! Browser document as a [`ThemeSurface`].

use crate::theme::ThemeSurface;

/// The live page document.
#[derive(Clone)]
pub struct DocumentSurface {
    document: web_sys::Document,
}

impl DocumentSurface {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    /// Text content of an element, e.g. an embedded JSON payload
    pub fn element_text(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }
}

impl ThemeSurface for DocumentSurface {
    fn root_theme(&self, attribute: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(attribute)
    }

    fn set_root_theme(&mut self, attribute: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(attribute, value);
        }
    }

    fn set_label(&mut self, label_id: &str, text: &str) {
        if let Some(label) = self.element(label_id) {
            label.set_text_content(Some(text));
        }
    }

    fn set_option_active(&mut self, option_id: &str, active_class: &str, active: bool) {
        if let Some(option) = self.element(option_id) {
            let _ = option.class_list().toggle_with_force(active_class, active);
        }
    }
}
