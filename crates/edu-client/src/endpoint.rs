//! Catalogue of backend endpoints the client talks to.

use reqwest::Method;

/// One backend operation: its method, path, and fixture key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Chat,
    Courses,
    CourseDetail { code: String },
    Enroll,
    Cancel,
    MyEnrollments,
    Progress,
    CoordinatorCourses,
    CoordinatorCreateCourse,
    CoordinatorApproveCourse,
    CoordinatorStudents { course: String },
    CoordinatorReport,
    TeacherCourses,
    TeacherGrades,
    TeacherReport { course: String },
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Login
            | Self::Chat
            | Self::Enroll
            | Self::Cancel
            | Self::CoordinatorCreateCourse
            | Self::CoordinatorApproveCourse
            | Self::TeacherGrades => Method::POST,
            Self::Courses
            | Self::CourseDetail { .. }
            | Self::MyEnrollments
            | Self::Progress
            | Self::CoordinatorCourses
            | Self::CoordinatorStudents { .. }
            | Self::CoordinatorReport
            | Self::TeacherCourses
            | Self::TeacherReport { .. } => Method::GET,
        }
    }

    /// Path relative to the API base URL, with parameters percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Chat => "/chat".to_string(),
            Self::Courses => "/cursos".to_string(),
            Self::CourseDetail { code } => format!("/cursos/{}", urlencoding::encode(code)),
            Self::Enroll => "/inscribir".to_string(),
            Self::Cancel => "/cancelar".to_string(),
            Self::MyEnrollments => "/mis_inscripciones".to_string(),
            Self::Progress => "/progreso".to_string(),
            Self::CoordinatorCourses => "/coordinador/cursos".to_string(),
            Self::CoordinatorCreateCourse => "/coordinador/cursos/nuevo".to_string(),
            Self::CoordinatorApproveCourse => "/coordinador/cursos/aprobar".to_string(),
            Self::CoordinatorStudents { course } => {
                format!("/coordinador/estudiantes?curso={}", urlencoding::encode(course))
            }
            Self::CoordinatorReport => "/coordinador/reporte".to_string(),
            Self::TeacherCourses => "/docente/cursos".to_string(),
            Self::TeacherGrades => "/docente/notas".to_string(),
            Self::TeacherReport { course } => {
                format!("/docente/reporte?curso={}", urlencoding::encode(course))
            }
        }
    }

    /// Stable identifier used for logging and fixture lookup.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Chat => "chat",
            Self::Courses => "courses",
            Self::CourseDetail { .. } => "course_detail",
            Self::Enroll => "enroll",
            Self::Cancel => "cancel",
            Self::MyEnrollments => "my_enrollments",
            Self::Progress => "progress",
            Self::CoordinatorCourses => "coordinator_courses",
            Self::CoordinatorCreateCourse => "coordinator_create_course",
            Self::CoordinatorApproveCourse => "coordinator_approve_course",
            Self::CoordinatorStudents { .. } => "coordinator_students",
            Self::CoordinatorReport => "coordinator_report",
            Self::TeacherCourses => "teacher_courses",
            Self::TeacherGrades => "teacher_grades",
            Self::TeacherReport { .. } => "teacher_report",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_posts() {
        assert_eq!(Endpoint::Enroll.method(), Method::POST);
        assert_eq!(Endpoint::TeacherGrades.method(), Method::POST);
        assert_eq!(Endpoint::Courses.method(), Method::GET);
    }

    #[test]
    fn detail_path_encodes_code() {
        let endpoint = Endpoint::CourseDetail {
            code: "MAT 101/A".into(),
        };
        assert_eq!(endpoint.path(), "/cursos/MAT%20101%2FA");
    }

    #[test]
    fn report_paths_carry_course_query() {
        let coordinator = Endpoint::CoordinatorStudents {
            course: "FIS102".into(),
        };
        let teacher = Endpoint::TeacherReport {
            course: "MAT101&x=1".into(),
        };
        assert_eq!(coordinator.path(), "/coordinador/estudiantes?curso=FIS102");
        assert_eq!(teacher.path(), "/docente/reporte?curso=MAT101%26x%3D1");
    }
}
