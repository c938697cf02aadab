//! Read-only DOM inspection for keyboard-navigation tooling.
//!
//! The tree itself comes from [`rcdom`]; this crate only adds the element
//! handle, ancestor/descendant walks, and attribute probing that the
//! tabbable engine performs. Nothing in here mutates the document.

#[macro_use]
extern crate lazy_static;

pub mod collections;
pub mod element;
pub mod parse;
pub mod style;

pub use element::Element;
pub use parse::Document;
