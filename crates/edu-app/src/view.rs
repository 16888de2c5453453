//! Typed views returned by the feature controllers.
//!
//! Views carry data only; `edu-cli` decides how to print them.

use chrono::{DateTime, Utc};
use edu_client::Source;
use edu_core::entities::{
    Course, CourseReportRow, EnrolledStudent, Enrollment, Progress, StudentGrade,
    TeachingAssignment,
};
use edu_core::enums::QuotaLevel;
use serde::Serialize;

/// A view plus where its data came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub source: Source,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Page<T> {
    pub const fn new(source: Source, body: T) -> Self {
        Self { source, body }
    }

    #[must_use]
    pub const fn is_demo(&self) -> bool {
        self.source.is_demo()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Page<U> {
        Page {
            source: self.source,
            body: f(self.body),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    #[serde(flatten)]
    pub course: Course,
    pub quota: QuotaLevel,
    pub can_enroll: bool,
}

impl From<Course> for CourseCard {
    fn from(course: Course) -> Self {
        Self {
            quota: course.quota(),
            can_enroll: course.is_open_for_enrollment(),
            course,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseList {
    /// Semester the list was narrowed to, if any.
    pub semester: Option<u32>,
    pub courses: Vec<CourseCard>,
}

impl CourseList {
    #[must_use]
    pub fn new(courses: &[Course], semester: Option<u32>) -> Self {
        let courses = courses
            .iter()
            .filter(|course| semester.is_none_or(|wanted| course.semester == wanted))
            .cloned()
            .map(CourseCard::from)
            .collect();
        Self { semester, courses }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemesterOption {
    pub semester: u32,
    pub courses: usize,
}

/// Result of asking for the semester filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemesterFilter {
    /// Distinct semesters of the cached list, ascending.
    Options { semesters: Vec<SemesterOption> },
    /// The cache was empty, so the catalog was fetched instead.
    Refetched { list: CourseList },
}

// ---------------------------------------------------------------------------
// Enrollment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    Enrollment,
    Cancellation,
}

impl ReceiptKind {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Enrollment => "INS",
            Self::Cancellation => "CAN",
        }
    }
}

/// Proof of a confirmed enrollment or cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub kind: ReceiptKind,
    pub course_code: String,
    pub course_name: String,
    pub student: String,
    pub issued_at: DateTime<Utc>,
    pub transaction_id: String,
}

impl Receipt {
    #[must_use]
    pub fn issue(
        kind: ReceiptKind,
        course_code: &str,
        course_name: &str,
        student: &str,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            course_code: course_code.to_string(),
            course_name: course_name.to_string(),
            student: student.to_string(),
            transaction_id: format!("{}-{}", kind.prefix(), issued_at.timestamp_millis()),
            issued_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnrollView {
    Confirmed { message: String, receipt: Receipt },
    /// The backend answered with something that is not an enrollment result.
    Acknowledged { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationPrompt {
    pub code: String,
    pub name: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelView {
    pub message: String,
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrollmentsView {
    pub enrollments: Vec<Enrollment>,
    pub total_credits: u32,
}

impl EnrollmentsView {
    #[must_use]
    pub fn new(enrollments: Vec<Enrollment>) -> Self {
        let total_credits = enrollments.iter().filter_map(|e| e.credits).sum();
        Self {
            enrollments,
            total_credits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub student: String,
    pub program: String,
    #[serde(flatten)]
    pub progress: Progress,
    pub percent_complete: u32,
    pub semesters_remaining: u32,
}

impl ProgressView {
    /// Shown when the session carries no program.
    pub const DEFAULT_PROGRAM: &'static str = "Ingeniería de Sistemas";

    #[must_use]
    pub fn new(student: &str, program: Option<&str>, progress: Progress) -> Self {
        Self {
            student: student.to_string(),
            program: program.unwrap_or(Self::DEFAULT_PROGRAM).to_string(),
            percent_complete: progress.percent_complete(),
            semesters_remaining: progress.semesters_remaining(),
            progress,
        }
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatReply {
    Courses { list: CourseList },
    Enrollment { message: String, confirmed: bool },
    Report { progress: ProgressView },
    Enrollments { view: EnrollmentsView },
    Error { message: String },
    Message { message: String },
}

// ---------------------------------------------------------------------------
// Coordinator / teacher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoursesView {
    pub courses: Vec<Course>,
}

/// Outcome of a write that reloads the coordinator's course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseActionView {
    pub message: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentsView {
    pub course: String,
    pub students: Vec<EnrolledStudent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralReportView {
    pub rows: Vec<CourseReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentsView {
    pub courses: Vec<TeachingAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReportView {
    pub course: String,
    pub grades: Vec<StudentGrade>,
}
