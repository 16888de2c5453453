//! Feature controllers.
//!
//! Each module adds methods to [`App`](crate::App) via `impl App` blocks.
//! Every operation checks for an active session, announces the request,
//! calls the backend through the fallback policy, and interprets the
//! payload into a typed view.

pub mod catalog;
pub mod chat;
pub mod coordinator;
pub mod enrollment;
pub mod teacher;

pub use coordinator::CourseForm;
pub use teacher::GradeForm;

use edu_client::Source;

use crate::error::FeatureError;

/// Trimmed `value`, or a validation error with `message` when it is blank.
fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, FeatureError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FeatureError::validation(message))
    } else {
        Ok(value)
    }
}

/// Demo if either part of a combined view came from fixtures.
const fn combined(a: Source, b: Source) -> Source {
    if a.is_demo() || b.is_demo() {
        Source::Demo
    } else {
        Source::Live
    }
}
