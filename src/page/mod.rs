//! Page behaviours of the eligibility portal.
//!
//! Four independent behaviours share nothing but the page model:
//!
//! - `validation`: range checks on profile and criteria forms before submit
//! - `role`: department field visibility on the registration form
//! - `tabs`: student dashboard tab switching
//! - `filter` / `approval`: admin dashboard row filtering and approval calls
//!
//! `PageController` wires them to page events.

pub mod approval;
pub mod controller;
pub mod error;
pub mod filter;
pub mod host;
pub mod role;
pub mod tabs;
pub mod validation;

pub use approval::{approve_student, ApprovalOutcome};
pub use controller::{PageController, SubmitOutcome};
pub use error::PageError;
pub use filter::{apply_department_filter, filter_by_department, FilterSummary};
pub use host::{Host, LoggingHost, RecordingHost};
pub use role::toggle_department;
pub use tabs::show_student_tab;
pub use validation::{validate_form, ValidationError};
