//! Teacher dashboard: assigned courses, grades, per-course report.

use edu_client::{Endpoint, Notice};
use edu_core::entities::{StudentGrade, TeachingAssignment};
use edu_core::envelope::Envelope;
use serde_json::json;

use super::required;
use crate::app::{App, decode_data};
use crate::error::FeatureError;
use crate::view::{AssignmentsView, GradeReportView, MessageView, Page};

/// Grade form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeForm {
    pub course: String,
    pub student_id: String,
    pub grade: String,
}

impl GradeForm {
    fn validate(&self) -> Result<(&str, &str, f64), FeatureError> {
        const INVALID: &str = "Debes ingresar un ID y una nota válida.";
        let course = required(&self.course, "Debes indicar el código del curso.")?;
        let student_id = required(&self.student_id, INVALID)?;
        let grade = self
            .grade
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|grade| grade.is_finite())
            .ok_or_else(|| FeatureError::validation(INVALID))?;
        Ok((course, student_id, grade))
    }
}

impl App {
    /// Courses assigned to the logged-in teacher.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Backend`] when the call fails and the policy keeps
    /// the failure, [`FeatureError::Decode`] for a malformed list.
    pub async fn assigned_courses(&self) -> Result<Page<AssignmentsView>, FeatureError> {
        self.require_state()?;
        self.notify(Notice::info("Cargando cursos asignados..."));
        let resolved = self.fetch(&Endpoint::TeacherCourses, None).await?;
        let courses: Vec<TeachingAssignment> = decode_data(&resolved, "assignment list")?;
        Ok(Page::new(resolved.source, AssignmentsView { courses }))
    }

    /// Record one student's grade.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for an incomplete form,
    /// [`FeatureError::Declined`] when the backend does not report success.
    pub async fn record_grade(&self, form: &GradeForm) -> Result<Page<MessageView>, FeatureError> {
        let (course, student_id, grade) = form.validate()?;
        self.require_state()?;
        self.notify(Notice::info("Enviando nota..."));

        let body = json!({ "curso": course, "estudiante_id": student_id, "nota": grade });
        let resolved = self.fetch(&Endpoint::TeacherGrades, Some(&body)).await?;
        let envelope = Envelope::from_value(&resolved.payload);
        if envelope.success != Some(true) {
            return Err(FeatureError::declined(
                envelope.text().unwrap_or("No se pudo registrar la nota."),
            ));
        }
        let message = envelope
            .text()
            .unwrap_or("Nota registrada exitosamente.")
            .to_string();
        self.notify(Notice::success(message.clone()));
        Ok(Page::new(resolved.source, MessageView { message }))
    }

    /// Grades of every student in `code`.
    ///
    /// # Errors
    ///
    /// As [`App::assigned_courses`].
    pub async fn student_report(&self, code: &str) -> Result<Page<GradeReportView>, FeatureError> {
        let code = required(code, "Debes indicar el código del curso.")?;
        self.require_state()?;
        self.notify(Notice::info("Cargando reporte de estudiantes..."));
        let endpoint = Endpoint::TeacherReport {
            course: code.to_string(),
        };
        let resolved = self.fetch(&endpoint, None).await?;
        let grades: Vec<StudentGrade> = decode_data(&resolved, "grade report")?;
        Ok(Page::new(
            resolved.source,
            GradeReportView {
                course: code.to_string(),
                grades,
            },
        ))
    }
}
