//! Coordinator dashboard: course catalog administration and reports.

use edu_client::{Endpoint, Notice};
use edu_core::entities::{Course, CourseReportRow, EnrolledStudent};
use edu_core::envelope::Envelope;
use serde_json::json;

use super::{combined, required};
use crate::app::{App, decode_data};
use crate::error::FeatureError;
use crate::view::{CourseActionView, CoursesView, GeneralReportView, Page, StudentsView};

/// New-course form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub code: String,
    pub name: String,
    pub semester: String,
}

impl CourseForm {
    fn validate(&self) -> Result<(&str, &str, u32), FeatureError> {
        const INCOMPLETE: &str = "Debes llenar todos los campos del curso.";
        let code = required(&self.code, INCOMPLETE)?;
        let name = required(&self.name, INCOMPLETE)?;
        let semester = self
            .semester
            .trim()
            .parse::<u32>()
            .map_err(|_| FeatureError::validation(INCOMPLETE))?;
        Ok((code, name, semester))
    }
}

impl App {
    /// All courses, pending and approved.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Backend`] when the call fails and the policy keeps
    /// the failure, [`FeatureError::Decode`] for a malformed list.
    pub async fn coordinator_courses(&self) -> Result<Page<CoursesView>, FeatureError> {
        self.require_state()?;
        self.notify(Notice::info("Cargando cursos..."));
        let resolved = self.fetch(&Endpoint::CoordinatorCourses, None).await?;
        let courses: Vec<Course> = decode_data(&resolved, "course list")?;
        Ok(Page::new(resolved.source, CoursesView { courses }))
    }

    /// Create a course and reload the list.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for an incomplete form,
    /// [`FeatureError::Declined`] when the backend does not report success.
    pub async fn create_course(
        &self,
        form: &CourseForm,
    ) -> Result<Page<CourseActionView>, FeatureError> {
        let (code, name, semester) = form.validate()?;
        self.require_state()?;
        self.notify(Notice::info("Creando curso..."));

        let body = json!({ "codigo": code, "nombre": name, "semestre": semester });
        let resolved = self
            .fetch(&Endpoint::CoordinatorCreateCourse, Some(&body))
            .await?;
        let envelope = Envelope::from_value(&resolved.payload);
        if envelope.success != Some(true) {
            return Err(FeatureError::declined(
                envelope.text().unwrap_or("Error al crear el curso."),
            ));
        }

        let message = envelope
            .text()
            .map_or_else(|| format!("Curso {code} creado"), str::to_string);
        self.notify(Notice::success(message.clone()));
        let reloaded = self.coordinator_courses().await?;
        Ok(Page::new(
            combined(resolved.source, reloaded.source),
            CourseActionView {
                message,
                courses: reloaded.body.courses,
            },
        ))
    }

    /// Approve a pending course and reload the list.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for a blank code,
    /// [`FeatureError::Declined`] when the backend does not report success.
    pub async fn approve_course(&self, code: &str) -> Result<Page<CourseActionView>, FeatureError> {
        let code = required(code, "Debes indicar el código del curso.")?;
        self.require_state()?;
        self.notify(Notice::info("Aprobando curso..."));

        let body = json!({ "codigo": code });
        let resolved = self
            .fetch(&Endpoint::CoordinatorApproveCourse, Some(&body))
            .await?;
        let envelope = Envelope::from_value(&resolved.payload);
        if envelope.success != Some(true) {
            return Err(FeatureError::declined(
                envelope.text().unwrap_or("No se pudo aprobar el curso."),
            ));
        }

        let message = if resolved.source.is_demo() {
            format!("Curso {code} aprobado (modo demo)")
        } else {
            envelope
                .text()
                .map_or_else(|| format!("Curso {code} aprobado"), str::to_string)
        };
        self.notify(Notice::success(message.clone()));
        let reloaded = self.coordinator_courses().await?;
        Ok(Page::new(
            combined(resolved.source, reloaded.source),
            CourseActionView {
                message,
                courses: reloaded.body.courses,
            },
        ))
    }

    /// Students enrolled in `code`.
    ///
    /// # Errors
    ///
    /// As [`App::coordinator_courses`].
    pub async fn course_students(&self, code: &str) -> Result<Page<StudentsView>, FeatureError> {
        let code = required(code, "Debes indicar el código del curso.")?;
        self.require_state()?;
        self.notify(Notice::info(format!(
            "Cargando estudiantes del curso {code}..."
        )));
        let endpoint = Endpoint::CoordinatorStudents {
            course: code.to_string(),
        };
        let resolved = self.fetch(&endpoint, None).await?;
        let students: Vec<EnrolledStudent> = decode_data(&resolved, "student list")?;
        Ok(Page::new(
            resolved.source,
            StudentsView {
                course: code.to_string(),
                students,
            },
        ))
    }

    /// Enrollment count and average per course.
    ///
    /// # Errors
    ///
    /// As [`App::coordinator_courses`].
    pub async fn general_report(&self) -> Result<Page<GeneralReportView>, FeatureError> {
        self.require_state()?;
        self.notify(Notice::info("Cargando reporte general..."));
        let resolved = self.fetch(&Endpoint::CoordinatorReport, None).await?;
        let rows: Vec<CourseReportRow> = decode_data(&resolved, "course report")?;
        Ok(Page::new(resolved.source, GeneralReportView { rows }))
    }
}
