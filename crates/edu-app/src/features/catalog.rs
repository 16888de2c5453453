//! Course catalog: search, semester filter, course detail.

use std::collections::BTreeMap;

use edu_client::{Endpoint, Notice, Source};
use edu_core::entities::{Course, CourseDetail};
use edu_core::envelope::Envelope;

use super::required;
use crate::app::{App, decode_data};
use crate::error::FeatureError;
use crate::view::{CourseList, Page, SemesterFilter, SemesterOption};

/// Distinct semesters of `courses`, ascending, with their course counts.
fn semester_options(courses: &[Course]) -> Vec<SemesterOption> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for course in courses {
        *counts.entry(course.semester).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(semester, courses)| SemesterOption { semester, courses })
        .collect()
}

impl App {
    /// Fetch the catalog, cache it, and list it (narrowed to `semester`).
    ///
    /// # Errors
    ///
    /// [`FeatureError::NotAuthenticated`] without a session,
    /// [`FeatureError::Backend`] when the call fails and no fixture may be
    /// used, [`FeatureError::Decode`] when `data` is not a course list.
    pub async fn search_courses(
        &mut self,
        semester: Option<u32>,
    ) -> Result<Page<CourseList>, FeatureError> {
        self.require_state()?;
        self.notify(Notice::info(semester.map_or_else(
            || "Buscando cursos disponibles...".to_string(),
            |semester| format!("Buscando cursos del semestre {semester}..."),
        )));

        let resolved = self.fetch(&Endpoint::Courses, None).await?;
        let courses: Vec<Course> = decode_data(&resolved, "course list")?;
        let list = CourseList::new(&courses, semester);
        tracing::debug!(
            total = courses.len(),
            shown = list.courses.len(),
            source = %resolved.source,
            "catalog fetched"
        );
        self.require_state_mut()?
            .cache_courses(courses, resolved.source);
        Ok(Page::new(resolved.source, list))
    }

    /// Semesters present in the last fetched catalog.
    ///
    /// With nothing cached yet this fetches the catalog instead of offering
    /// an empty filter.
    ///
    /// # Errors
    ///
    /// Same as [`App::search_courses`].
    pub async fn filter_by_semester(&mut self) -> Result<Page<SemesterFilter>, FeatureError> {
        let state = self.require_state()?;
        let semesters = semester_options(state.cached_courses());
        let source = state
            .course_cache
            .as_ref()
            .map_or(Source::Live, |cache| cache.source);

        if semesters.is_empty() {
            tracing::debug!("course cache empty; fetching catalog");
            let page = self.search_courses(None).await?;
            return Ok(page.map(|list| SemesterFilter::Refetched { list }));
        }
        Ok(Page::new(source, SemesterFilter::Options { semesters }))
    }

    /// Detail and weekly schedule of one course.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for a blank code, otherwise as
    /// [`App::search_courses`].
    pub async fn course_detail(&self, code: &str) -> Result<Page<CourseDetail>, FeatureError> {
        let code = required(code, "Debes indicar el código del curso.")?;
        self.require_state()?;
        self.notify(Notice::info(format!("Consultando detalles del curso {code}...")));

        let endpoint = Endpoint::CourseDetail {
            code: code.to_string(),
        };
        let resolved = self.fetch_data(&endpoint).await?;
        let detail: Option<CourseDetail> =
            Envelope::from_value(&resolved.payload).decode_data("course detail")?;
        let detail = detail.unwrap_or_else(|| CourseDetail {
            code: code.to_string(),
            name: None,
            semester: None,
            capacity: None,
            instructor: None,
            schedule: Vec::new(),
        });
        Ok(Page::new(resolved.source, detail))
    }
}
