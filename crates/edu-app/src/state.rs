//! Per-login application state.

use edu_client::Source;
use edu_core::entities::{Course, Session};

/// An action waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Cancel { code: String, name: String },
}

/// Courses from the most recent catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCache {
    pub courses: Vec<Course>,
    pub source: Source,
}

/// Everything that lives between login and logout.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub course_cache: Option<CourseCache>,
    pub pending_action: Option<PendingAction>,
}

impl AppState {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            session,
            course_cache: None,
            pending_action: None,
        }
    }

    /// Cached courses, empty when nothing was fetched yet.
    #[must_use]
    pub fn cached_courses(&self) -> &[Course] {
        self.course_cache
            .as_ref()
            .map_or(&[], |cache| cache.courses.as_slice())
    }

    pub fn cache_courses(&mut self, courses: Vec<Course>, source: Source) {
        self.course_cache = Some(CourseCache { courses, source });
    }

    /// Name of a cached course, falling back to its code.
    #[must_use]
    pub fn course_name(&self, code: &str) -> String {
        self.cached_courses()
            .iter()
            .find(|course| course.code == code)
            .map_or_else(|| code.to_string(), |course| course.name.clone())
    }
}
