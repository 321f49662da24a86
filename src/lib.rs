//! Eligibility UI - form validation and view glue for the student
//! eligibility portal.
//!
//! The portal's pages are modelled by [`dom::Document`]; the behaviours in
//! [`page`] validate forms, toggle fields, switch tabs, filter tables and
//! send approval decisions through [`api::ApiClient`].

pub mod api;
pub mod config;
pub mod dom;
pub mod models;
pub mod page;

pub use api::{ApiClient, ApiError, ApprovalError, HttpTransport, Transport};
pub use config::Config;
pub use dom::{Display, Document, Element, NodeId, PageSpec};
pub use page::{Host, PageController, PageError, SubmitOutcome, ValidationError};
