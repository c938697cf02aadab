//! HTML parsing into an inspectable document.

use std::fmt::Display;
use std::path::Path;

use html5ever::tendril::TendrilSink;
use html5ever::ParseOpts;
use markup5ever::{local_name, LocalName};
use rcdom::RcDom;

use crate::element::Element;

/// An error raised while loading a document.
#[derive(Debug)]
pub enum Error {
    /// The parsed source contained no element at all.
    NoElementInDocument,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoElementInDocument => f.write_str("no element in document"),
        }
    }
}

impl std::error::Error for Error {}

/// A parsed HTML document.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Returns the document element (`<html>`).
    ///
    /// # Panics
    /// Never for documents built by [`parse`]; the parser always supplies a
    /// document element.
    pub fn root(&self) -> Element {
        self.dom
            .document
            .children
            .borrow()
            .iter()
            .map(Element::from)
            .find(|e| e.local_name().is_some())
            .expect("parsed document should have a document element")
    }

    /// Returns the document's `<body>` element.
    pub fn body(&self) -> Option<Element> {
        self.find(&local_name!("body"))
    }

    /// Returns the first element with the given tag, in document order.
    pub fn find(&self, name: &LocalName) -> Option<Element> {
        let root = self.root();
        std::iter::once(root.clone())
            .chain(root.descendants())
            .find(|e| e.is(name))
    }

    /// Returns the element with the given `id` attribute, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        let root = self.root();
        std::iter::once(root.clone())
            .chain(root.descendants())
            .find(|e| e.attr(&local_name!("id")).is_some_and(|v| &*v == id))
    }
}

/// Parses an HTML source string.
///
/// # Errors
/// If the source produced no document element.
pub fn parse(source: &str) -> anyhow::Result<Document> {
    let dom = html5ever::parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())?;
    for error in dom.errors.borrow().iter() {
        log::debug!("recovered parse error: {error}");
    }
    let document = Document { dom };
    if document
        .dom
        .document
        .children
        .borrow()
        .iter()
        .all(|n| Element::from(n).local_name().is_none())
    {
        return Err(Error::NoElementInDocument.into());
    }
    Ok(document)
}

/// Parses an HTML document from a file.
///
/// # Errors
/// If the file cannot be read, or the source produced no document element.
pub fn parse_path(path: &Path) -> anyhow::Result<Document> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}
