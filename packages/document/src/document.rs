use std::rc::Rc;

/// The head element a [`MetadataSink`] operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadElement {
    /// `<meta name="description">`
    Description,
    /// `<link rel="canonical">`
    Canonical,
}

impl HeadElement {
    /// The CSS selector that finds this element in a document.
    pub const fn selector(self) -> &'static str {
        match self {
            HeadElement::Description => r#"meta[name="description"]"#,
            HeadElement::Canonical => r#"link[rel="canonical"]"#,
        }
    }
}

/// Errors a [`MetadataSink`] can report. None of them should abort a navigation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The document has no such element. Sinks never create one, so this is a no-op.
    #[error("the document has no `{}` element", .0.selector())]
    MissingElement(HeadElement),

    /// The host environment refused the update.
    #[error("failed to update the document: {0}")]
    Dom(String),
}

/// A provider for the page metadata the router keeps in sync.
///
/// Implementations only ever write; the router never reads the values back.
pub trait MetadataSink {
    /// Set the title of the document.
    fn set_title(&self, title: &str);

    /// Set the `content` of the description meta tag.
    ///
    /// Returns [`DocumentError::MissingElement`] without creating anything if the document has no
    /// description meta tag.
    fn set_description(&self, description: &str) -> Result<(), DocumentError>;

    /// Set the `href` of the canonical link.
    ///
    /// Returns [`DocumentError::MissingElement`] without creating anything if the document has no
    /// canonical link.
    fn set_canonical(&self, href: &str) -> Result<(), DocumentError>;
}

impl<T: MetadataSink + ?Sized> MetadataSink for Rc<T> {
    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }

    fn set_description(&self, description: &str) -> Result<(), DocumentError> {
        (**self).set_description(description)
    }

    fn set_canonical(&self, href: &str) -> Result<(), DocumentError> {
        (**self).set_canonical(href)
    }
}
