//! Client for the portal's admin endpoints.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{ApprovalResponse, StudentId};

use super::transport::{HttpTransport, Transport, TransportResponse};
use super::ApiError;

/// Alert text when the server answered but refused the update.
pub const APPROVAL_REJECTED_MESSAGE: &str = "Failed to update approval status";

/// Alert text when the request itself failed or the reply was unusable.
pub const APPROVAL_ERROR_MESSAGE: &str = "An error occurred while updating approval status";

#[derive(Error, Debug)]
pub enum ApprovalError {
    /// The server replied with `success: false`.
    #[error("Approval rejected by server: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request failed or the reply was not the expected JSON.
    #[error(transparent)]
    Request(#[from] ApiError),
}

impl ApprovalError {
    /// Text shown to the user for this failure.
    pub fn alert_message(&self) -> &'static str {
        match self {
            ApprovalError::Rejected { .. } => APPROVAL_REJECTED_MESSAGE,
            ApprovalError::Request(_) => APPROVAL_ERROR_MESSAGE,
        }
    }
}

fn approve_path(student_id: StudentId) -> String {
    format!("/admin/approve_student/{}", student_id)
}

/// Admin API client over an injectable transport.
#[derive(Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Create a client for the server named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config.base_url, config.request_timeout())?
            .with_session_cookie(config.session_cookie.clone());
        Ok(Self::new(transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Record an approval decision for a student.
    ///
    /// Any reply whose JSON body says `success: true` counts as success,
    /// whatever its status; `success: false` or a JSON object without
    /// `success` is a rejection. Anything else
    /// (transport failure, non-JSON body) is a request error.
    pub async fn approve_student(
        &self,
        student_id: StudentId,
        approved: bool,
    ) -> Result<ApprovalResponse, ApprovalError> {
        let path = approve_path(student_id);
        let approved_value = if approved { "true" } else { "false" };
        info!(%student_id, approved, "Sending approval decision");

        let response = self
            .transport
            .post_form(&path, &[("approved", approved_value)])
            .await?;

        let parsed = Self::parse_approval(&response)?;
        if parsed.success {
            info!(%student_id, approved, "Approval status updated");
            Ok(parsed)
        } else {
            warn!(
                %student_id,
                status = response.status,
                message = ?parsed.message,
                "Server refused approval update"
            );
            Err(ApprovalError::Rejected {
                status: response.status,
                message: parsed.message,
            })
        }
    }

    fn parse_approval(response: &TransportResponse) -> Result<ApprovalResponse, ApiError> {
        match serde_json::from_str::<ApprovalResponse>(&response.body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                debug!(status = response.status, error = %e, "Approval reply is not JSON");
                if response.is_success() {
                    Err(ApiError::InvalidResponse(format!(
                        "Failed to parse approval response: {}",
                        e
                    )))
                } else {
                    Err(ApiError::from_status(response.status, &response.body))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use super::*;

    struct CannedTransport {
        reply: Result<TransportResponse, String>,
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl CannedTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(TransportResponse::new(status, body)),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        fn post_form(
            &self,
            path: &str,
            form: &[(&str, &str)],
        ) -> impl Future<Output = Result<TransportResponse, ApiError>> + Send {
            let form = form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.calls.lock().unwrap().push((path.to_string(), form));
            let reply = self.reply.clone().map_err(ApiError::Transport);
            async move { reply }
        }
    }

    #[tokio::test]
    async fn test_approve_sends_form_to_student_route() {
        let client = ApiClient::new(CannedTransport::replying(200, r#"{"success": true}"#));
        let response = client.approve_student(StudentId(12), true).await.unwrap();
        assert!(response.success);

        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/admin/approve_student/12");
        assert_eq!(calls[0].1, vec![("approved".to_string(), "true".to_string())]);
    }

    #[tokio::test]
    async fn test_reject_decision_sends_false() {
        let client = ApiClient::new(CannedTransport::replying(200, r#"{"success": true}"#));
        client.approve_student(StudentId(3), false).await.unwrap();
        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls[0].1[0].1, "false");
    }

    #[tokio::test]
    async fn test_success_false_is_rejection_regardless_of_status() {
        let client = ApiClient::new(CannedTransport::replying(
            401,
            r#"{"success": false, "message": "Unauthorized"}"#,
        ));
        let err = client.approve_student(StudentId(1), true).await.unwrap_err();
        match &err {
            ApprovalError::Rejected { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message.as_deref(), Some("Unauthorized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.alert_message(), APPROVAL_REJECTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_reply_without_success_field_is_rejection() {
        let client = ApiClient::new(CannedTransport::replying(200, "{}"));
        let err = client.approve_student(StudentId(9), true).await.unwrap_err();
        assert!(matches!(
            err,
            ApprovalError::Rejected {
                status: 200,
                message: None
            }
        ));
        assert_eq!(err.alert_message(), APPROVAL_REJECTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_json_reply_is_request_error() {
        let client = ApiClient::new(CannedTransport::replying(404, "<html>Not Found</html>"));
        let err = client.approve_student(StudentId(1), true).await.unwrap_err();
        assert!(matches!(err, ApprovalError::Request(ApiError::NotFound(_))));
        assert_eq!(err.alert_message(), APPROVAL_ERROR_MESSAGE);

        let client = ApiClient::new(CannedTransport::replying(200, "ok"));
        let err = client.approve_student(StudentId(1), true).await.unwrap_err();
        assert!(matches!(err, ApprovalError::Request(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_request_error() {
        let client = ApiClient::new(CannedTransport::failing("connection refused"));
        let err = client.approve_student(StudentId(5), false).await.unwrap_err();
        assert!(matches!(err, ApprovalError::Request(ApiError::Transport(_))));
        assert_eq!(err.alert_message(), APPROVAL_ERROR_MESSAGE);
    }
}
