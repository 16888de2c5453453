//! Demo payloads served when the backend cannot answer.
//!
//! One registry for every endpoint: [`lookup`] maps an endpoint to the
//! payload the backend would have sent, already in wire shape, so fixture
//! data flows through the same decoding as live data. Lookups are pure and
//! return a fresh value each time.

use edu_core::entities::UserProfile;
use edu_core::enums::Role;
use serde_json::{Value, json};

use crate::endpoint::Endpoint;

/// Username and password accepted for every role in demo mode.
pub const DEMO_SHORTCUT: &str = "demo";

/// Fixture payload for `endpoint`, or `None` when the endpoint has no
/// offline substitute (login uses [`demo_account`] instead).
#[must_use]
pub fn lookup(endpoint: &Endpoint) -> Option<Value> {
    let value = match endpoint {
        Endpoint::Login => return None,
        Endpoint::Chat => json!({
            "type": "default",
            "message": "El asistente no está disponible en este momento (modo demo). \
                        Puedes consultar cursos, inscripciones y progreso desde el menú."
        }),
        Endpoint::Courses => json!({ "data": catalog() }),
        Endpoint::CourseDetail { code } => json!({
            "data": {
                "codigo": code,
                "docente": "Dr. Carlos Pérez",
                "cronograma": [
                    { "semana": 1, "tema": "Introducción y Fundamentos", "fecha": "15/01/2025" },
                    { "semana": 2, "tema": "Conceptos Básicos", "fecha": "22/01/2025" },
                    { "semana": 3, "tema": "Primer Parcial", "fecha": "29/01/2025" },
                    { "semana": 4, "tema": "Aplicaciones Prácticas", "fecha": "05/02/2025" }
                ]
            }
        }),
        Endpoint::Enroll => json!({
            "type": "inscripcion",
            "resultado": "Inscripción realizada con éxito (modo demo)",
            "success": true
        }),
        Endpoint::Cancel => json!({
            "success": true,
            "resultado": "Inscripción cancelada exitosamente (modo demo)"
        }),
        Endpoint::MyEnrollments => json!({
            "data": [
                {
                    "codigo": "MAT101",
                    "nombre": "Cálculo Diferencial",
                    "creditos": 4,
                    "horario": "Lunes y Miércoles 8:00-10:00",
                    "aula": "Edificio B - Salón 301",
                    "docente": "Dr. Carlos Pérez",
                    "estado": "Activo"
                },
                {
                    "codigo": "FIS201",
                    "nombre": "Física Mecánica",
                    "creditos": 4,
                    "horario": "Martes y Jueves 10:00-12:00",
                    "aula": "Edificio A - Lab 102",
                    "docente": "Dra. María González",
                    "estado": "Activo"
                }
            ]
        }),
        Endpoint::Progress => json!({
            "data": {
                "creditos_completados": 48,
                "creditos_totales": 160,
                "promedio": 4.2,
                "pendientes": 28
            }
        }),
        Endpoint::CoordinatorCourses => json!({
            "data": [
                { "codigo": "MAT101", "nombre": "Cálculo I", "semestre": 1, "estado": "pendiente" },
                { "codigo": "FIS102", "nombre": "Física I", "semestre": 1, "estado": "aprobado" },
                { "codigo": "PROG201", "nombre": "Programación II", "semestre": 2, "estado": "pendiente" }
            ]
        }),
        Endpoint::CoordinatorCreateCourse => json!({
            "success": true,
            "message": "Curso agregado correctamente (modo demo)"
        }),
        // The approved code is only known to the caller, which fills it in.
        Endpoint::CoordinatorApproveCourse => json!({
            "success": true,
            "message": "Curso aprobado (modo demo)"
        }),
        Endpoint::CoordinatorStudents { .. } => json!({
            "data": [
                { "id": "EST001", "nombre": "Ana López" },
                { "id": "EST002", "nombre": "Juan Gómez" },
                { "id": "EST003", "nombre": "Laura Ruiz" }
            ]
        }),
        Endpoint::CoordinatorReport => json!({
            "data": [
                { "curso": "MAT101", "inscritos": 28, "promedio": 4.1 },
                { "curso": "FIS102", "inscritos": 30, "promedio": 3.9 }
            ]
        }),
        Endpoint::TeacherCourses => json!({
            "data": [
                { "codigo": "MAT101", "nombre": "Cálculo I", "grupo": "A", "estudiantes": 28 },
                { "codigo": "FIS202", "nombre": "Física II", "grupo": "B", "estudiantes": 32 }
            ]
        }),
        Endpoint::TeacherGrades => json!({
            "success": true,
            "message": "Nota registrada exitosamente (modo demo)."
        }),
        Endpoint::TeacherReport { .. } => json!({
            "data": [
                { "id": "EST001", "nombre": "Ana López", "nota": 4.3 },
                { "id": "EST002", "nombre": "Juan Gómez", "nota": 3.8 },
                { "id": "EST003", "nombre": "Laura Ruiz", "nota": 2.9 }
            ]
        }),
    };
    Some(value)
}

fn catalog() -> Value {
    json!([
        {
            "codigo": "MAT101",
            "nombre": "Cálculo I",
            "semestre": 1,
            "estado": "aprobado",
            "cupo": 25,
            "prerequisitos": []
        },
        {
            "codigo": "FIS102",
            "nombre": "Física I",
            "semestre": 1,
            "estado": "aprobado",
            "cupo": 3,
            "prerequisitos": ["MAT101"]
        },
        {
            "codigo": "PROG201",
            "nombre": "Programación II",
            "semestre": 2,
            "estado": "pendiente",
            "cupo": 0,
            "prerequisitos": ["PROG101"]
        }
    ])
}

// ---------------------------------------------------------------------------
// Demo accounts
// ---------------------------------------------------------------------------

/// Offline credentials and profile for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: Role,
    pub username: &'static str,
    pub password: &'static str,
    pub user_id: u64,
    pub display_name: &'static str,
    pub email: &'static str,
    /// Program for students and coordinators, department for teachers.
    pub affiliation: &'static str,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        role: Role::Student,
        username: "EST001",
        password: "estudiante123",
        user_id: 1,
        display_name: "Ana López García",
        email: "ana.lopez@udem.edu.co",
        affiliation: "Ingeniería de Sistemas",
    },
    DemoAccount {
        role: Role::Coordinator,
        username: "COORD001",
        password: "coordinador123",
        user_id: 2,
        display_name: "Dr. Carlos Ramírez",
        email: "carlos.ramirez@udem.edu.co",
        affiliation: "Coordinación Académica",
    },
    DemoAccount {
        role: Role::Teacher,
        username: "DOC001",
        password: "docente123",
        user_id: 3,
        display_name: "Dra. María González",
        email: "maria.gonzalez@udem.edu.co",
        affiliation: "Ciencias Básicas",
    },
];

#[must_use]
pub fn demo_account(role: Role) -> DemoAccount {
    match role {
        Role::Student => DEMO_ACCOUNTS[0],
        Role::Coordinator => DEMO_ACCOUNTS[1],
        Role::Teacher => DEMO_ACCOUNTS[2],
    }
}

impl DemoAccount {
    /// Whether the pair is this account's credentials or the `demo` shortcut.
    #[must_use]
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        (username == self.username || username == DEMO_SHORTCUT)
            && (password == self.password || password == DEMO_SHORTCUT)
    }

    #[must_use]
    pub fn profile(&self) -> UserProfile {
        let (program, department) = match self.role {
            Role::Teacher => (None, Some(self.affiliation.to_string())),
            Role::Student | Role::Coordinator => (Some(self.affiliation.to_string()), None),
        };
        UserProfile {
            user_id: self.user_id,
            display_name: self.display_name.to_string(),
            email: Some(self.email.to_string()),
            role: self.role,
            code: Some(self.username.to_string()),
            program,
            department,
        }
    }
}
