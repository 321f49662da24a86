use std::path::PathBuf;

use eligibility_ui::dom::Display;
use eligibility_ui::page::{tabs, FilterSummary, PageError, RecordingHost, SubmitOutcome};
use eligibility_ui::{NodeId, PageController, PageSpec};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_dashboard() -> PageController {
    let document = PageSpec::load(&fixture_path("dashboard.json"))
        .expect("fixture should parse")
        .build()
        .expect("fixture should build");
    PageController::load(document)
}

fn by_id(page: &PageController, id: &str) -> NodeId {
    page.document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has #{id}"))
}

fn visible_students(page: &PageController, table_id: &str) -> Vec<String> {
    let doc = page.document();
    let table = by_id(page, table_id);
    doc.descendants_by_tag(table, "tr")
        .into_iter()
        .filter(|&row| doc.is_visible(row))
        .filter_map(|row| doc.attr(row, "data-student").map(str::to_string))
        .collect()
}

#[test]
fn load_hides_department_for_preselected_admin() {
    let mut page = load_dashboard();
    let group = by_id(&page, "department-group");
    assert_eq!(page.document().display(group), Some(Display::None));

    let role = by_id(&page, "role");
    page.change(role, "student");
    assert_eq!(page.document().display(group), Some(Display::Block));
}

#[test]
fn valid_fixture_forms_submit() {
    let mut page = load_dashboard();
    let mut host = RecordingHost::new();
    for id in ["profile-form", "criteria-form"] {
        let form = by_id(&page, id);
        assert_eq!(page.submit(form, &mut host), SubmitOutcome::Submitted, "{id}");
    }
    assert!(host.alerts.is_empty());
}

#[test]
fn edited_profile_is_blocked_until_fixed() {
    let mut page = load_dashboard();
    let mut host = RecordingHost::new();
    let form = by_id(&page, "profile-form");
    let cgpa = by_id(&page, "semester_cgpa");
    let attendance = by_id(&page, "attendance_percentage");

    page.change(cgpa, "11");
    page.change(attendance, "140");
    assert!(!page.submit(form, &mut host).is_submitted());
    assert_eq!(host.alerts, vec!["CGPA must be between 0 and 10".to_string()]);

    page.change(cgpa, "9.2");
    assert!(!page.submit(form, &mut host).is_submitted());
    assert_eq!(
        host.last_alert(),
        Some("Attendance Percentage must be between 0 and 100")
    );

    page.change(attendance, "100");
    assert!(page.submit(form, &mut host).is_submitted());
    assert_eq!(host.alerts.len(), 2);
}

#[test]
fn criteria_with_negative_leetcode_is_blocked() {
    let mut page = load_dashboard();
    let mut host = RecordingHost::new();
    let input = by_id(&page, "min_leetcode_problems");
    page.change(input, "-1");

    let form = by_id(&page, "criteria-form");
    assert!(!page.submit(form, &mut host).is_submitted());
    assert_eq!(
        host.last_alert(),
        Some("Minimum LeetCode problems cannot be negative")
    );
}

#[test]
fn tab_switch_shows_exactly_one_panel() {
    let mut page = load_dashboard();
    page.show_student_tab("update").unwrap();

    let doc = page.document();
    let shown: Vec<_> = doc
        .elements_by_class(tabs::TAB_CONTENT_CLASS)
        .into_iter()
        .filter(|&p| doc.is_visible(p))
        .collect();
    assert_eq!(shown, vec![by_id(&page, "tab-update")]);

    let active: Vec<_> = tabs::tab_buttons(doc)
        .into_iter()
        .filter(|&b| doc.has_class(b, tabs::ACTIVE_CLASS))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(
        doc.attr(active[0], "onclick"),
        Some("showStudentTab('update')")
    );

    assert_eq!(
        page.show_student_tab("missing"),
        Err(PageError::UnknownTab("missing".to_string()))
    );
}

#[test]
fn department_filter_round_trip() {
    let mut page = load_dashboard();
    let select = by_id(&page, "department-filter");

    page.change(select, "CSE");
    let summary = page.filter_by_department().unwrap();
    assert_eq!(summary, FilterSummary { shown: 3, hidden: 3 });
    assert_eq!(visible_students(&page, "all-students-table"), vec!["1", "4"]);
    assert_eq!(visible_students(&page, "eligible-students-table"), vec!["1"]);

    page.change(select, "all");
    page.filter_by_department();
    assert_eq!(
        visible_students(&page, "all-students-table"),
        vec!["1", "2", "3", "4"]
    );
    assert_eq!(visible_students(&page, "eligible-students-table"), vec!["1", "2"]);
}
