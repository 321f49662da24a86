//! Page lifecycle: handler registration at load and event dispatch.
//!
//! `PageController::load` plays the part of the page's load-time setup.
//! It records which forms get submit handlers and whether the role
//! selector gets a change handler, then applies the role toggle once so
//! a pre-selected role is reflected. Later events go through `submit` and
//! `change`; elements that had no handler at load time are left alone.

use tracing::{debug, info};

use crate::api::{ApiClient, Transport};
use crate::dom::{Document, NodeId};
use crate::models::{FormKind, Role, StudentId};

use super::approval::{self, ApprovalOutcome};
use super::filter::{self, FilterSummary};
use super::role::{self, ROLE_SELECT_ID};
use super::tabs;
use super::validation::{self, ValidationError};
use super::{Host, PageError};

/// Result of dispatching a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form would be sent to the server.
    Submitted,
    /// Submission was cancelled; the user saw this message.
    Prevented(ValidationError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug, Clone)]
pub struct PageController {
    document: Document,
    submit_handlers: Vec<(NodeId, FormKind)>,
    role_select: Option<NodeId>,
}

impl PageController {
    /// Register handlers for `document` and run the initial role toggle.
    pub fn load(document: Document) -> Self {
        let mut forms: Vec<NodeId> = FormKind::ALL
            .iter()
            .flat_map(|kind| document.elements_by_class(kind.class_name()))
            .collect();
        forms.sort();
        forms.dedup();

        let submit_handlers: Vec<(NodeId, FormKind)> = forms
            .into_iter()
            .flat_map(|form| {
                validation::form_kinds(&document, form)
                    .into_iter()
                    .map(move |kind| (form, kind))
            })
            .collect();
        let role_select = document.get_element_by_id(ROLE_SELECT_ID);

        let mut controller = Self {
            document,
            submit_handlers,
            role_select,
        };
        if controller.role_select.is_some() {
            role::toggle_department(&mut controller.document);
        }

        info!(
            forms = controller.submit_handlers.len(),
            role_toggle = controller.role_select.is_some(),
            "Page handlers registered"
        );
        controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Form kinds with a submit handler on `form`, in validation order.
    pub fn handlers_for(&self, form: NodeId) -> Vec<FormKind> {
        self.submit_handlers
            .iter()
            .filter(|(f, _)| *f == form)
            .map(|(_, kind)| *kind)
            .collect()
    }

    /// Dispatch a submit event for `form`.
    pub fn submit<H: Host>(&mut self, form: NodeId, host: &mut H) -> SubmitOutcome {
        for kind in self.handlers_for(form) {
            if let Err(e) = validation::validate_form(&self.document, form, kind) {
                host.alert(e.message());
                return SubmitOutcome::Prevented(e);
            }
        }
        debug!(?form, "Form submitted");
        SubmitOutcome::Submitted
    }

    /// Set an input's value, then dispatch its change event.
    pub fn change(&mut self, node: NodeId, value: &str) -> Option<Role> {
        self.document.set_value(node, value);
        if self.role_select == Some(node) {
            role::toggle_department(&mut self.document)
        } else {
            None
        }
    }

    /// Activate the student dashboard tab `name`.
    pub fn show_student_tab(&mut self, name: &str) -> Result<(), PageError> {
        tabs::show_student_tab(&mut self.document, name)
    }

    /// Apply the department selector's current value to the student tables.
    pub fn filter_by_department(&mut self) -> Option<FilterSummary> {
        filter::filter_by_department(&mut self.document)
    }

    /// Send an approval decision; reload on success, alert otherwise.
    pub async fn approve_student<T: Transport, H: Host>(
        &self,
        client: &ApiClient<T>,
        host: &mut H,
        student_id: StudentId,
        approved: bool,
    ) -> ApprovalOutcome {
        approval::approve_student(client, host, student_id, approved).await
    }
}
