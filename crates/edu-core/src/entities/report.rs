use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the coordinator's general report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseReportRow {
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "inscritos")]
    pub enrolled: u32,
    #[serde(rename = "promedio")]
    pub average: f64,
}

/// A student enrolled in a course (coordinator view).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrolledStudent {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A student's grade in a course (teacher view).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentGrade {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nota")]
    pub grade: f64,
}
