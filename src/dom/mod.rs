//! Page model.
//!
//! There is no browser here, so pages are represented by a small element
//! tree that supports the handful of lookups the page behaviours need:
//! id lookup (document-wide or inside a form), class lookup, tag lookup,
//! inline `display` style and the class list.

pub mod document;
pub mod fixture;

pub use document::{Display, Document, Element, NodeId};
pub use fixture::{ElementSpec, PageSpec};
