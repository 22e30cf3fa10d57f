use std::{cell::RefCell, fmt::Write};

use crate::{DocumentError, HeadElement, MetadataSink};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct HeadState {
    title: String,
    // `None` means the element is not part of the document
    description: Option<String>,
    canonical: Option<String>,
}

/// A [`MetadataSink`] that keeps the head of a document in memory.
///
/// The description meta tag and the canonical link only exist if they were added with
/// [`MemoryDocument::with_description_tag`] and [`MemoryDocument::with_canonical_tag`], mirroring
/// an HTML shell that may or may not declare them.
///
/// ```rust
/// # use folio_document::{MemoryDocument, MetadataSink};
/// let document = MemoryDocument::default().with_description_tag("");
/// document.set_title("Home");
/// document.set_description("Welcome").unwrap();
/// assert!(document.set_canonical("https://example.com/").is_err());
///
/// assert_eq!(document.title(), "Home");
/// assert_eq!(document.description().as_deref(), Some("Welcome"));
/// assert_eq!(document.canonical(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDocument {
    head: RefCell<HeadState>,
}

impl MemoryDocument {
    /// A document whose head declares both a description meta tag and a canonical link.
    pub fn with_head_tags() -> Self {
        Self::default().with_description_tag("").with_canonical_tag("")
    }

    /// Add a description meta tag with the given initial content.
    pub fn with_description_tag(self, content: impl Into<String>) -> Self {
        self.head.borrow_mut().description = Some(content.into());
        self
    }

    /// Add a canonical link with the given initial href.
    pub fn with_canonical_tag(self, href: impl Into<String>) -> Self {
        self.head.borrow_mut().canonical = Some(href.into());
        self
    }

    /// The current document title.
    pub fn title(&self) -> String {
        self.head.borrow().title.clone()
    }

    /// The content of the description meta tag, if the document has one.
    pub fn description(&self) -> Option<String> {
        self.head.borrow().description.clone()
    }

    /// The href of the canonical link, if the document has one.
    pub fn canonical(&self) -> Option<String> {
        self.head.borrow().canonical.clone()
    }

    /// Render the head as HTML.
    pub fn render_head(&self) -> String {
        let head = self.head.borrow();
        let mut out = String::new();
        // writing into a String cannot fail
        _ = write!(
            out,
            "<title>{}</title>",
            askama_escape::escape(&head.title, askama_escape::Html)
        );
        if let Some(description) = &head.description {
            _ = write!(
                out,
                r#"<meta name="description" content="{}">"#,
                askama_escape::escape(description, askama_escape::Html)
            );
        }
        if let Some(canonical) = &head.canonical {
            _ = write!(
                out,
                r#"<link rel="canonical" href="{}">"#,
                askama_escape::escape(canonical, askama_escape::Html)
            );
        }
        out
    }
}

impl MetadataSink for MemoryDocument {
    fn set_title(&self, title: &str) {
        self.head.borrow_mut().title = title.to_string();
    }

    fn set_description(&self, description: &str) -> Result<(), DocumentError> {
        match self.head.borrow_mut().description.as_mut() {
            Some(content) => {
                *content = description.to_string();
                Ok(())
            }
            None => Err(DocumentError::MissingElement(HeadElement::Description)),
        }
    }

    fn set_canonical(&self, href: &str) -> Result<(), DocumentError> {
        match self.head.borrow_mut().canonical.as_mut() {
            Some(current) => {
                *current = href.to_string();
                Ok(())
            }
            None => Err(DocumentError::MissingElement(HeadElement::Canonical)),
        }
    }
}
