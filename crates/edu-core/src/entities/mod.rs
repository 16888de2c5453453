//! Entity structs for the wire shapes the EduBot backend exchanges.
//!
//! Field names are English; `#[serde(rename)]` maps them to the backend's
//! Spanish keys. Optional or often-missing fields default so loosely shaped
//! payloads still decode.

mod course;
mod enrollment;
mod progress;
mod report;
mod session;

pub use course::{Course, CourseDetail, ScheduleEntry, TeachingAssignment};
pub use enrollment::Enrollment;
pub use progress::Progress;
pub use report::{CourseReportRow, EnrolledStudent, StudentGrade};
pub use session::{Session, UserProfile};
