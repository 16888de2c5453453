//! Role and status enums.
//!
//! Variants serialize with the backend's Spanish wire spellings; English
//! aliases are accepted on input so CLI arguments can use either language.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated user. Decides which dashboard a login lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    #[serde(rename = "estudiante", alias = "student")]
    Student,
    #[serde(rename = "coordinador", alias = "coordinator")]
    Coordinator,
    #[serde(rename = "docente", alias = "teacher")]
    Teacher,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Student, Self::Coordinator, Self::Teacher];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "estudiante",
            Self::Coordinator => "coordinador",
            Self::Teacher => "docente",
        }
    }

    /// Page a successful login redirects to.
    #[must_use]
    pub const fn dashboard(self) -> &'static str {
        match self {
            Self::Student => "index.html",
            Self::Coordinator => "coordinador.html",
            Self::Teacher => "docente.html",
        }
    }

    /// Human-readable label for headers and status output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Estudiante",
            Self::Coordinator => "Coordinador",
            Self::Teacher => "Docente",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CourseStatus
// ---------------------------------------------------------------------------

/// Approval state of a course.
///
/// ```text
/// pendiente → aprobado    (coordinator approval)
/// pendiente → rechazado   (coordinator rejection)
/// ```
///
/// Any other wire value reads as [`CourseStatus::Pending`], so one course
/// in an unexpected state never fails a whole listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum CourseStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aprobado")]
    Approved,
    #[serde(rename = "rechazado")]
    Rejected,
}

impl CourseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Approved => "aprobado",
            Self::Rejected => "rechazado",
        }
    }

    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Map a wire spelling (Spanish or English, any case) to a status.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "aprobado" | "approved" => Self::Approved,
            "rechazado" | "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnrollmentStatus
// ---------------------------------------------------------------------------

/// State of a student's enrollment in a course.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum EnrollmentStatus {
    #[default]
    #[serde(rename = "activo", alias = "Activo", alias = "active")]
    Active,
    #[serde(rename = "cancelado", alias = "Cancelado", alias = "cancelled")]
    Cancelled,
}

impl EnrollmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Cancelled => "cancelado",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuotaLevel
// ---------------------------------------------------------------------------

/// Seat availability bucket shown next to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuotaLevel {
    Full,
    Limited,
    Available,
}

impl QuotaLevel {
    /// Seats at or below this count are reported as limited.
    pub const LIMITED_THRESHOLD: u32 = 5;

    #[must_use]
    pub const fn for_capacity(capacity: u32) -> Self {
        if capacity == 0 {
            Self::Full
        } else if capacity <= Self::LIMITED_THRESHOLD {
            Self::Limited
        } else {
            Self::Available
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Limited => "limited",
            Self::Available => "available",
        }
    }
}

impl fmt::Display for QuotaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_spanish_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"estudiante\"");
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"docente\"");
    }

    #[test]
    fn role_accepts_english_aliases() {
        let role: Role = serde_json::from_str("\"coordinator\"").unwrap();
        assert_eq!(role, Role::Coordinator);
    }

    #[test]
    fn role_dashboards() {
        assert_eq!(Role::Student.dashboard(), "index.html");
        assert_eq!(Role::Coordinator.dashboard(), "coordinador.html");
        assert_eq!(Role::Teacher.dashboard(), "docente.html");
    }

    #[test]
    fn enrollment_status_accepts_capitalized_wire_value() {
        let status: EnrollmentStatus = serde_json::from_str("\"Activo\"").unwrap();
        assert_eq!(status, EnrollmentStatus::Active);
        assert_eq!(status.to_string(), "activo");
    }

    #[test]
    fn course_status_tolerates_unknown_states() {
        let status: CourseStatus = serde_json::from_str("\"rechazado\"").unwrap();
        assert_eq!(status, CourseStatus::Rejected);
        let status: CourseStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, CourseStatus::Approved);
        let status: CourseStatus = serde_json::from_str("\"en_revision\"").unwrap();
        assert_eq!(status, CourseStatus::Pending);
    }

    #[test]
    fn quota_level_thresholds() {
        assert_eq!(QuotaLevel::for_capacity(0), QuotaLevel::Full);
        assert_eq!(QuotaLevel::for_capacity(1), QuotaLevel::Limited);
        assert_eq!(QuotaLevel::for_capacity(5), QuotaLevel::Limited);
        assert_eq!(QuotaLevel::for_capacity(6), QuotaLevel::Available);
    }
}
