use tracing::debug;

use crate::dom::{Display, Document};
use crate::models::DepartmentFilter;

pub const DEPARTMENT_FILTER_ID: &str = "department-filter";
pub const DEPARTMENT_ATTR: &str = "data-department";

/// Tables on the admin dashboard whose rows follow the department filter.
pub const STUDENT_TABLE_IDS: [&str; 2] = ["all-students-table", "eligible-students-table"];

/// Row counts after a filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

/// Read the department selector and filter the student tables by it.
/// Returns `None` when the page has no selector.
pub fn filter_by_department(doc: &mut Document) -> Option<FilterSummary> {
    let select = doc.get_element_by_id(DEPARTMENT_FILTER_ID)?;
    let filter = DepartmentFilter::from_value(doc.value(select));
    Some(apply_department_filter(doc, &filter))
}

/// Show rows matching `filter` and hide the rest, table by table.
/// Tables missing from the page are skipped.
pub fn apply_department_filter(doc: &mut Document, filter: &DepartmentFilter) -> FilterSummary {
    let mut summary = FilterSummary::default();

    for table_id in STUDENT_TABLE_IDS {
        let Some(table) = doc.get_element_by_id(table_id) else {
            continue;
        };
        for row in doc.descendants_by_tag(table, "tr") {
            if filter.matches(doc.attr(row, DEPARTMENT_ATTR)) {
                doc.set_display(row, Display::TableRow);
                summary.shown += 1;
            } else {
                doc.set_display(row, Display::None);
                summary.hidden += 1;
            }
        }
    }

    debug!(?filter, shown = summary.shown, hidden = summary.hidden, "Department filter applied");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, NodeId};

    fn dashboard(filter: &str) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append(root, Element::new("select").with_id(DEPARTMENT_FILTER_ID).with_value(filter));

        let mut rows = Vec::new();
        for (table_id, departments) in [
            ("all-students-table", &["CSE", "ECE", "CSE"][..]),
            ("eligible-students-table", &["ECE"][..]),
        ] {
            let table = doc.append(root, Element::new("table").with_id(table_id));
            let body = doc.append(table, Element::new("tbody"));
            for dept in departments {
                rows.push(doc.append(body, Element::new("tr").with_attr(DEPARTMENT_ATTR, dept)));
            }
        }
        (doc, rows)
    }

    fn visible(doc: &Document, rows: &[NodeId]) -> Vec<bool> {
        rows.iter().map(|&r| doc.is_visible(r)).collect()
    }

    #[test]
    fn test_filter_by_selected_department() {
        let (mut doc, rows) = dashboard("CSE");
        let summary = filter_by_department(&mut doc).unwrap();
        assert_eq!(summary, FilterSummary { shown: 2, hidden: 2 });
        assert_eq!(visible(&doc, &rows), vec![true, false, true, false]);
        assert_eq!(doc.display(rows[0]), Some(Display::TableRow));
    }

    #[test]
    fn test_all_restores_every_row() {
        let (mut doc, rows) = dashboard("ECE");
        filter_by_department(&mut doc);
        assert_eq!(visible(&doc, &rows), vec![false, true, false, true]);

        let select = doc.get_element_by_id(DEPARTMENT_FILTER_ID).unwrap();
        doc.set_value(select, "all");
        filter_by_department(&mut doc);
        assert!(visible(&doc, &rows).iter().all(|v| *v));
    }

    #[test]
    fn test_rows_without_department_hidden_by_specific_filter() {
        let (mut doc, _) = dashboard("CSE");
        let table = doc.get_element_by_id("all-students-table").unwrap();
        let header = doc.append(table, Element::new("tr"));

        apply_department_filter(&mut doc, &DepartmentFilter::from_value("CSE"));
        assert!(!doc.is_visible(header));

        apply_department_filter(&mut doc, &DepartmentFilter::All);
        assert!(doc.is_visible(header));
    }

    #[test]
    fn test_missing_table_is_skipped() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append(root, Element::new("select").with_id(DEPARTMENT_FILTER_ID).with_value("CSE"));
        let table = doc.append(root, Element::new("table").with_id("eligible-students-table"));
        let row = doc.append(table, Element::new("tr").with_attr(DEPARTMENT_ATTR, "MECH"));

        let summary = filter_by_department(&mut doc).unwrap();
        assert_eq!(summary, FilterSummary { shown: 0, hidden: 1 });
        assert!(!doc.is_visible(row));
    }

    #[test]
    fn test_missing_selector_is_noop() {
        let mut doc = Document::new();
        assert_eq!(filter_by_department(&mut doc), None);
    }
}
