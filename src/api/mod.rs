//! Backend API module for the eligibility portal.
//!
//! This module provides the `ApiClient` used by the admin dashboard to
//! record approval decisions. The client is generic over a `Transport`
//! so the network can be swapped out in tests.
//!
//! The server only accepts approvals from a logged-in admin session. The
//! session cookie comes from `Config::session_cookie` and is sent by
//! `HttpTransport`; this crate does not log in by itself.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ApiClient, ApprovalError, APPROVAL_ERROR_MESSAGE, APPROVAL_REJECTED_MESSAGE};
pub use error::ApiError;
pub use transport::{HttpTransport, Transport, TransportResponse};
