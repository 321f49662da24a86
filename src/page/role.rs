use tracing::debug;

use crate::dom::{Display, Document};
use crate::models::Role;

pub const ROLE_SELECT_ID: &str = "role";
pub const DEPARTMENT_GROUP_ID: &str = "department-group";

/// Show the department group for non-admin roles, hide it for admins.
/// Returns the role applied, or `None` when the page lacks either element.
pub fn toggle_department(doc: &mut Document) -> Option<Role> {
    let select = doc.get_element_by_id(ROLE_SELECT_ID)?;
    let group = doc.get_element_by_id(DEPARTMENT_GROUP_ID)?;

    let role = Role::from_value(doc.value(select));
    let shown = if role.needs_department() {
        Display::Block
    } else {
        Display::None
    };
    doc.set_display(group, shown);
    debug!(%role, display = %shown, "Department group toggled");
    Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, NodeId};

    fn registration_page(role: &str) -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let form = doc.append(doc.root(), Element::new("form"));
        let select = doc.append(form, Element::new("select").with_id(ROLE_SELECT_ID).with_value(role));
        let group = doc.append(form, Element::new("div").with_id(DEPARTMENT_GROUP_ID));
        (doc, select, group)
    }

    #[test]
    fn test_admin_hides_group() {
        let (mut doc, _, group) = registration_page("admin");
        assert_eq!(toggle_department(&mut doc), Some(Role::Admin));
        assert_eq!(doc.display(group), Some(Display::None));
    }

    #[test]
    fn test_other_roles_show_group() {
        let (mut doc, select, group) = registration_page("admin");
        toggle_department(&mut doc);
        doc.set_value(select, "student");
        toggle_department(&mut doc);
        assert_eq!(doc.display(group), Some(Display::Block));

        doc.set_value(select, "");
        toggle_department(&mut doc);
        assert_eq!(doc.display(group), Some(Display::Block));
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let (mut doc, _, group) = registration_page("admin");
        toggle_department(&mut doc);
        let first = doc.display(group);
        toggle_department(&mut doc);
        assert_eq!(doc.display(group), first);
    }

    #[test]
    fn test_missing_elements_are_noop() {
        let mut doc = Document::new();
        let group = doc.append(doc.root(), Element::new("div").with_id(DEPARTMENT_GROUP_ID));
        assert_eq!(toggle_department(&mut doc), None);
        assert_eq!(doc.display(group), None);

        let mut doc = Document::new();
        doc.append(doc.root(), Element::new("select").with_id(ROLE_SELECT_ID).with_value("admin"));
        assert_eq!(toggle_department(&mut doc), None);
    }
}
