//! Domain values read from, or sent on behalf of, the portal's pages.
//!
//! - `Metric`, `FormKind`, `NumericRange`: validated form fields
//! - `Role`: registration role selector value
//! - `DepartmentFilter`: dashboard department selector value
//! - `StudentId`, `ApprovalResponse`: approval endpoint payloads

pub mod department;
pub mod metric;
pub mod role;
pub mod student;

pub use department::{DepartmentFilter, ALL_DEPARTMENTS};
pub use metric::{FormKind, Metric, NumericRange};
pub use role::Role;
pub use student::{ApprovalResponse, StudentId};
