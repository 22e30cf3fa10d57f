use wasm_bindgen::JsValue;

use crate::{DocumentError, HeadElement, MetadataSink};

impl From<JsValue> for DocumentError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

/// The web-target's metadata sink, backed by the browser's `document`.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Get the sink for the current page, or `None` outside of a browser.
    pub fn get() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn set_attribute(
        &self,
        element: HeadElement,
        attribute: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        let Some(node) = self.document.query_selector(element.selector())? else {
            tracing::debug!(
                selector = element.selector(),
                "element missing, not setting {attribute}"
            );
            return Err(DocumentError::MissingElement(element));
        };
        node.set_attribute(attribute, value)?;
        Ok(())
    }
}

impl MetadataSink for WebDocument {
    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn set_description(&self, description: &str) -> Result<(), DocumentError> {
        self.set_attribute(HeadElement::Description, "content", description)
    }

    fn set_canonical(&self, href: &str) -> Result<(), DocumentError> {
        self.set_attribute(HeadElement::Canonical, "href", href)
    }
}
