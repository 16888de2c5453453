use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EnrollmentStatus;

/// A student's enrollment in one course, as listed by `/mis_inscripciones`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    #[serde(rename = "estudiante_id", default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<u64>,
    #[serde(rename = "codigo")]
    pub course_code: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(rename = "creditos", default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(rename = "horario", default)]
    pub schedule: String,
    #[serde(rename = "aula", default)]
    pub room: String,
    #[serde(rename = "docente", default)]
    pub instructor: String,
    #[serde(rename = "estado", default)]
    pub status: EnrollmentStatus,
}
