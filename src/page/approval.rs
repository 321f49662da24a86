use tracing::error;

use crate::api::{ApiClient, ApprovalError, Transport};
use crate::models::StudentId;

use super::Host;

/// What the page did after an approval request settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    Reloaded,
    Alerted(String),
}

/// Send an approval decision and react like the dashboard does: reload on
/// success, alert on any failure. No retry, nothing updated optimistically.
pub async fn approve_student<T: Transport, H: Host>(
    client: &ApiClient<T>,
    host: &mut H,
    student_id: StudentId,
    approved: bool,
) -> ApprovalOutcome {
    match client.approve_student(student_id, approved).await {
        Ok(_) => {
            host.reload();
            ApprovalOutcome::Reloaded
        }
        Err(e) => {
            if let ApprovalError::Request(ref cause) = e {
                error!(%student_id, error = %cause, "Approval request failed");
            }
            let message = e.alert_message();
            host.alert(message);
            ApprovalOutcome::Alerted(message.to_string())
        }
    }
}
