//! Student dashboard tab switching.
//!
//! Panels are `.student-tab-content` elements with id `tab-<name>`;
//! buttons are `.tab-btn` elements inside a `.student-tabs` bar, tied to
//! their tab by the inline `onclick` handler the template renders.

use tracing::debug;

use crate::dom::{Display, Document, NodeId};

use super::PageError;

pub const TAB_CONTENT_CLASS: &str = "student-tab-content";
pub const TAB_BAR_CLASS: &str = "student-tabs";
pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const ACTIVE_CLASS: &str = "active";

/// Element id of the panel for `name`.
pub fn tab_panel_id(name: &str) -> String {
    format!("tab-{}", name)
}

/// Inline handler text of the button that activates `name`.
pub fn tab_activation_handler(name: &str) -> String {
    format!("showStudentTab('{}')", name)
}

/// Every `.tab-btn` inside any `.student-tabs` bar, in document order.
pub fn tab_buttons(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_class(TAB_BUTTON_CLASS)
        .into_iter()
        .filter(|&button| in_tab_bar(doc, button))
        .collect()
}

fn in_tab_bar(doc: &Document, node: NodeId) -> bool {
    let mut current = doc.parent(node);
    while let Some(ancestor) = current {
        if doc.has_class(ancestor, TAB_BAR_CLASS) {
            return true;
        }
        current = doc.parent(ancestor);
    }
    false
}

/// Make `name` the only visible panel and the only active button.
///
/// Both targets are resolved before anything changes, so an unknown tab
/// leaves the page untouched.
pub fn show_student_tab(doc: &mut Document, name: &str) -> Result<(), PageError> {
    let panel = doc
        .get_element_by_id(&tab_panel_id(name))
        .ok_or_else(|| PageError::UnknownTab(name.to_string()))?;
    let handler = tab_activation_handler(name);
    let buttons = tab_buttons(doc);
    let button = buttons
        .iter()
        .copied()
        .find(|&b| doc.attr(b, "onclick") == Some(handler.as_str()))
        .ok_or_else(|| PageError::MissingTabButton(name.to_string()))?;

    for content in doc.elements_by_class(TAB_CONTENT_CLASS) {
        doc.set_display(content, Display::None);
    }
    for b in buttons {
        doc.remove_class(b, ACTIVE_CLASS);
    }

    doc.set_display(panel, Display::Block);
    doc.add_class(button, ACTIVE_CLASS);
    debug!(tab = name, "Switched student tab");
    Ok(())
}
