//! Wire-level tests for `ApiClient` against a local stub backend.

mod common;

use std::sync::Arc;

use common::{StubServer, closed_base_url};
use edu_client::{
    ApiClient, ApiOutcome, Endpoint, FallbackPolicy, Failure, NoticeLevel, RecordingNotifier,
    Source, fixtures,
};
use edu_config::ApiConfig;
use edu_core::entities::{
    Course, CourseDetail, CourseReportRow, EnrolledStudent, Enrollment, Progress, StudentGrade,
    TeachingAssignment,
};
use edu_core::envelope::Envelope;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

fn client(base_url: &str) -> (ApiClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config, notifier.clone()).unwrap();
    (client, notifier)
}

#[tokio::test]
async fn sends_json_content_type_and_bearer_token() {
    let stub = StubServer::start(&[("/inscribir", 200, r#"{"resultado": "ok"}"#)]);
    let (mut client, _) = client(&stub.base_url);
    client.set_token(Some("tok-123".into()));

    let body = json!({"estudiante_id": 1, "codigo": "MAT101"});
    let outcome = client.call(&Endpoint::Enroll, Some(&body)).await;
    assert_eq!(outcome, ApiOutcome::Success(json!({"resultado": "ok"})));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Authorization"), Some("Bearer tok-123"));
    assert!(request.header("User-Agent").unwrap().starts_with("edubot/"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent, body);
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let stub = StubServer::start(&[("/cursos", 200, r#"{"data": []}"#)]);
    let (client, _) = client(&stub.base_url);

    client.call(&Endpoint::Courses, None).await;

    let requests = stub.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn error_status_is_rejected_with_detail_notice() {
    let stub = StubServer::start(&[("/inscribir", 400, r#"{"detail": "cupo lleno"}"#)]);
    let (client, notifier) = client(&stub.base_url);

    let outcome = client
        .call(&Endpoint::Enroll, Some(&json!({"codigo": "FIS102"})))
        .await;

    assert_eq!(
        outcome,
        ApiOutcome::Rejected {
            status: 400,
            message: "cupo lleno".into()
        }
    );
    assert!(outcome.payload().is_none());
    assert_eq!(notifier.errors(), vec!["cupo lleno".to_string()]);
}

#[tokio::test]
async fn error_status_without_message_uses_status_text() {
    let stub = StubServer::start(&[("/progreso", 500, "Internal Server Error")]);
    let (client, notifier) = client(&stub.base_url);

    let outcome = client.call(&Endpoint::Progress, None).await;

    assert_eq!(
        outcome,
        ApiOutcome::Rejected {
            status: 500,
            message: "HTTP 500".into()
        }
    );
    assert_eq!(notifier.errors(), vec!["HTTP 500".to_string()]);
}

#[tokio::test]
async fn non_json_success_body_is_wrapped_as_raw() {
    let stub = StubServer::start(&[("/chat", 200, "hola")]);
    let (client, notifier) = client(&stub.base_url);

    let outcome = client
        .call(&Endpoint::Chat, Some(&json!({"text": "hola"})))
        .await;

    assert_eq!(outcome, ApiOutcome::Success(json!({"raw": "hola"})));
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let stub = StubServer::start(&[("/cancelar", 200, "")]);
    let (client, _) = client(&stub.base_url);

    let outcome = client.call(&Endpoint::Cancel, None).await;

    assert_eq!(outcome, ApiOutcome::Success(serde_json::Value::Null));
}

#[tokio::test]
async fn query_parameters_reach_the_backend_encoded() {
    let stub = StubServer::start(&[(
        "/docente/reporte?curso=MAT%20101",
        200,
        r#"[{"id": "EST001", "nombre": "Ana López", "nota": 4.3}]"#,
    )]);
    let (client, _) = client(&stub.base_url);

    let outcome = client
        .call(
            &Endpoint::TeacherReport {
                course: "MAT 101".into(),
            },
            None,
        )
        .await;

    let rows: Vec<StudentGrade> = Envelope::from_value(outcome.payload().unwrap())
        .decode_data("report")
        .unwrap()
        .unwrap();
    assert_eq!(rows[0].grade, 4.3);
}

#[tokio::test]
async fn transport_failure_is_unavailable_with_connection_notice() {
    let (client, notifier) = client(&closed_base_url());

    let outcome = client.call(&Endpoint::Courses, None).await;

    assert!(matches!(outcome, ApiOutcome::Unavailable { .. }));
    assert!(outcome.payload().is_none());
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].text, "Error de conexión con el servidor.");
}

#[tokio::test]
async fn offline_coordinator_courses_come_from_fixture() {
    let (client, _) = client(&closed_base_url());

    let resolved = client
        .call_with_fallback(&Endpoint::CoordinatorCourses, None, FallbackPolicy::default())
        .await
        .unwrap();

    assert_eq!(resolved.source, Source::Demo);
    let courses: Vec<Course> = Envelope::from_value(&resolved.payload)
        .decode_data("courses")
        .unwrap()
        .unwrap();
    let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["MAT101", "FIS102", "PROG201"]);
}

#[tokio::test]
async fn default_policy_surfaces_server_rejection() {
    let stub = StubServer::start(&[("/inscribir", 400, r#"{"detail": "cupo lleno"}"#)]);
    let (client, _) = client(&stub.base_url);

    let err = client
        .call_with_fallback(&Endpoint::Enroll, None, FallbackPolicy::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Failure::Rejected {
            status: 400,
            message: "cupo lleno".into()
        }
    );
}

#[tokio::test]
async fn legacy_policy_masks_server_rejection() {
    let stub = StubServer::start(&[("/inscribir", 400, r#"{"detail": "cupo lleno"}"#)]);
    let (client, notifier) = client(&stub.base_url);

    let resolved = client
        .call_with_fallback(&Endpoint::Enroll, None, FallbackPolicy::LEGACY)
        .await
        .unwrap();

    assert_eq!(resolved.source, Source::Demo);
    assert_eq!(resolved.payload["success"], true);
    // The rejection is still announced even though demo data is shown.
    assert_eq!(notifier.errors(), vec!["cupo lleno".to_string()]);
}

// ── Fixtures ───────────────────────────────────────────────────────

fn all_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::Login,
        Endpoint::Chat,
        Endpoint::Courses,
        Endpoint::CourseDetail {
            code: "MAT101".into(),
        },
        Endpoint::Enroll,
        Endpoint::Cancel,
        Endpoint::MyEnrollments,
        Endpoint::Progress,
        Endpoint::CoordinatorCourses,
        Endpoint::CoordinatorCreateCourse,
        Endpoint::CoordinatorApproveCourse,
        Endpoint::CoordinatorStudents {
            course: "MAT101".into(),
        },
        Endpoint::CoordinatorReport,
        Endpoint::TeacherCourses,
        Endpoint::TeacherGrades,
        Endpoint::TeacherReport {
            course: "MAT101".into(),
        },
    ]
}

#[test]
fn fixture_lookups_are_idempotent() {
    for endpoint in all_endpoints() {
        assert_eq!(
            fixtures::lookup(&endpoint),
            fixtures::lookup(&endpoint),
            "fixture for {} changed between lookups",
            endpoint.key()
        );
    }
}

#[test]
fn every_endpoint_but_login_has_a_fixture() {
    for endpoint in all_endpoints() {
        assert_eq!(
            fixtures::lookup(&endpoint).is_some(),
            endpoint != Endpoint::Login,
            "{}",
            endpoint.key()
        );
    }
}

fn assert_matches_schema<T: schemars::JsonSchema>(endpoint: &Endpoint) {
    let schema = serde_json::to_value(schema_for!(T)).unwrap();
    let data = fixtures::lookup(endpoint).unwrap()["data"].clone();
    let validator = jsonschema::validator_for(&schema).unwrap();
    let errors: Vec<String> = validator.iter_errors(&data).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "{}: {errors:?}", endpoint.key());
}

#[test]
fn list_fixtures_match_wire_schemas() {
    assert_matches_schema::<Vec<Course>>(&Endpoint::Courses);
    assert_matches_schema::<Vec<Course>>(&Endpoint::CoordinatorCourses);
    assert_matches_schema::<Progress>(&Endpoint::Progress);
    assert_matches_schema::<Vec<TeachingAssignment>>(&Endpoint::TeacherCourses);
    assert_matches_schema::<Vec<CourseReportRow>>(&Endpoint::CoordinatorReport);
    assert_matches_schema::<Vec<EnrolledStudent>>(&Endpoint::CoordinatorStudents {
        course: "MAT101".into(),
    });
    assert_matches_schema::<Vec<StudentGrade>>(&Endpoint::TeacherReport {
        course: "MAT101".into(),
    });
    assert_matches_schema::<CourseDetail>(&Endpoint::CourseDetail {
        code: "MAT101".into(),
    });
}

#[test]
fn enrollment_fixture_decodes() {
    let value = fixtures::lookup(&Endpoint::MyEnrollments).unwrap();
    let rows: Vec<Enrollment> = Envelope::from_value(&value)
        .decode_data("enrollments")
        .unwrap()
        .unwrap();
    let codes: Vec<&str> = rows.iter().map(|r| r.course_code.as_str()).collect();
    assert_eq!(codes, vec!["MAT101", "FIS201"]);
}
