use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CourseStatus, QuotaLevel};

/// A course as listed by the catalog and coordinator endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "semestre")]
    pub semester: u32,
    #[serde(rename = "estado", default)]
    pub status: CourseStatus,
    /// Remaining seats. Coordinator listings omit it.
    #[serde(rename = "cupo", default)]
    pub capacity: u32,
    #[serde(rename = "prerequisitos", default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    #[must_use]
    pub const fn quota(&self) -> QuotaLevel {
        QuotaLevel::for_capacity(self.capacity)
    }

    /// Approved and with at least one seat left.
    #[must_use]
    pub const fn is_open_for_enrollment(&self) -> bool {
        self.capacity > 0 && self.status.is_approved()
    }
}

/// One week of a course schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleEntry {
    #[serde(rename = "semana")]
    pub week: u32,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "fecha")]
    pub date: String,
}

/// Detail payload of `/cursos/{code}`. Everything but the code is optional.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseDetail {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "semestre", default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    #[serde(rename = "cupo", default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "docente", default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(rename = "cronograma", default)]
    pub schedule: Vec<ScheduleEntry>,
}

/// A course assigned to the logged-in teacher.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeachingAssignment {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "grupo", default)]
    pub group: String,
    #[serde(rename = "estudiantes", default)]
    pub students: u32,
}
