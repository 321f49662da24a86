//! Eligibility metrics collected by the profile and criteria forms.

use std::fmt;

/// Which of the two validated form families a form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// A student's own metrics.
    Profile,
    /// The admin's minimum thresholds.
    Criteria,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Profile, FormKind::Criteria];

    /// Class name that tags a form of this kind.
    pub fn class_name(&self) -> &'static str {
        match self {
            FormKind::Profile => "profile-form",
            FormKind::Criteria => "criteria-form",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Profile => write!(f, "profile"),
            FormKind::Criteria => write!(f, "criteria"),
        }
    }
}

/// Numeric metric, listed in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cgpa,
    LeetcodeProblems,
    AssessmentScore,
    Attendance,
}

/// Inclusive numeric range; `max == None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl NumericRange {
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

impl Metric {
    pub const ORDER: [Metric; 4] = [
        Metric::Cgpa,
        Metric::LeetcodeProblems,
        Metric::AssessmentScore,
        Metric::Attendance,
    ];

    pub fn range(&self) -> NumericRange {
        match self {
            Metric::Cgpa => NumericRange::between(0.0, 10.0),
            Metric::LeetcodeProblems => NumericRange::at_least(0.0),
            Metric::AssessmentScore | Metric::Attendance => NumericRange::between(0.0, 100.0),
        }
    }

    /// Element id of this metric's input in a form of `kind`.
    pub fn field_id(&self, kind: FormKind) -> &'static str {
        match (kind, self) {
            (FormKind::Profile, Metric::Cgpa) => "semester_cgpa",
            (FormKind::Profile, Metric::LeetcodeProblems) => "leetcode_problems",
            (FormKind::Profile, Metric::AssessmentScore) => "weekly_assessment_score",
            (FormKind::Profile, Metric::Attendance) => "attendance_percentage",
            (FormKind::Criteria, Metric::Cgpa) => "min_cgpa",
            (FormKind::Criteria, Metric::LeetcodeProblems) => "min_leetcode_problems",
            (FormKind::Criteria, Metric::AssessmentScore) => "min_assessment_score",
            (FormKind::Criteria, Metric::Attendance) => "min_attendance",
        }
    }

    /// Human-readable field name used in messages.
    pub fn label(&self, kind: FormKind) -> &'static str {
        match (kind, self) {
            (FormKind::Profile, Metric::Cgpa) => "CGPA",
            (FormKind::Profile, Metric::LeetcodeProblems) => "Number of LeetCode problems",
            (FormKind::Profile, Metric::AssessmentScore) => "Weekly Assessment Score",
            (FormKind::Profile, Metric::Attendance) => "Attendance Percentage",
            (FormKind::Criteria, Metric::Cgpa) => "Minimum CGPA",
            (FormKind::Criteria, Metric::LeetcodeProblems) => "Minimum LeetCode problems",
            (FormKind::Criteria, Metric::AssessmentScore) => "Minimum Assessment Score",
            (FormKind::Criteria, Metric::Attendance) => "Minimum Attendance",
        }
    }

    /// Message shown when a value falls outside [`Metric::range`].
    pub fn out_of_range_message(&self, kind: FormKind) -> String {
        let range = self.range();
        match range.max {
            Some(max) => format!(
                "{} must be between {} and {}",
                self.label(kind),
                range.min,
                max
            ),
            None => format!("{} cannot be negative", self.label(kind)),
        }
    }

    pub fn not_a_number_message(&self, kind: FormKind) -> String {
        format!("{} must be a number", self.label(kind))
    }
}
