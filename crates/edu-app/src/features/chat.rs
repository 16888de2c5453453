//! Free-text assistant.

use edu_client::{Endpoint, Notice};
use edu_core::entities::{Course, Enrollment, Progress};
use edu_core::envelope::Envelope;
use serde_json::{Value, json};

use super::enrollment::{EnrollmentAnswer, interpret_enrollment};
use super::required;
use crate::app::App;
use crate::error::FeatureError;
use crate::view::{ChatReply, CourseList, EnrollmentsView, Page, ProgressView};

const FALLBACK_REPLY: &str = "Respuesta recibida.";
const FALLBACK_ERROR: &str = "No se pudo procesar tu solicitud.";

impl App {
    /// Send `text` to the assistant and read the reply by its `type`.
    ///
    /// A `cursos` reply replaces the course cache.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for blank text,
    /// [`FeatureError::Backend`] when the call fails and the policy keeps
    /// the failure, [`FeatureError::Decode`] when typed data is malformed.
    pub async fn send(&mut self, text: &str) -> Result<Page<ChatReply>, FeatureError> {
        let text = required(text, "Escribe un mensaje para el asistente.")?;
        let state = self.require_state()?;
        let student_id = state.session.user_id();
        let student = state.session.display_name().to_string();
        let program = state.session.user.program.clone();

        let body = json!({ "text": text, "estudiante_id": student_id });
        let resolved = self.fetch(&Endpoint::Chat, Some(&body)).await?;
        let envelope = Envelope::from_value(&resolved.payload);
        tracing::debug!(kind = ?envelope.kind, source = %resolved.source, "assistant replied");

        let reply = match envelope.kind.as_deref() {
            Some("cursos") => {
                let courses: Vec<Course> =
                    envelope.decode_data("course list")?.unwrap_or_default();
                let list = CourseList::new(&courses, None);
                self.require_state_mut()?
                    .cache_courses(courses, resolved.source);
                ChatReply::Courses { list }
            }
            Some("inscripcion") => match interpret_enrollment(&envelope) {
                EnrollmentAnswer::Confirmed(message) => ChatReply::Enrollment {
                    message,
                    confirmed: true,
                },
                EnrollmentAnswer::Declined(message) | EnrollmentAnswer::Acknowledged(message) => {
                    ChatReply::Enrollment {
                        message,
                        confirmed: false,
                    }
                }
            },
            Some("reporte") => match envelope.decode_data::<Progress>("progress") {
                Ok(Some(progress)) => ChatReply::Report {
                    progress: ProgressView::new(&student, program.as_deref(), progress),
                },
                _ => ChatReply::Message {
                    message: plain_text(&envelope, &resolved.payload),
                },
            },
            Some("inscripciones") => {
                let enrollments: Vec<Enrollment> =
                    envelope.decode_data("enrollment list")?.unwrap_or_default();
                ChatReply::Enrollments {
                    view: EnrollmentsView::new(enrollments),
                }
            }
            Some("error") => {
                let message = envelope
                    .text()
                    .or(envelope.detail.as_deref())
                    .unwrap_or(FALLBACK_ERROR)
                    .to_string();
                self.notify(Notice::error(message.clone()));
                ChatReply::Error { message }
            }
            _ => ChatReply::Message {
                message: plain_text(&envelope, &resolved.payload),
            },
        };
        Ok(Page::new(resolved.source, reply))
    }
}

/// Best text for an untyped reply: `resultado`/`message`, then a raw body.
fn plain_text(envelope: &Envelope, payload: &Value) -> String {
    envelope
        .text()
        .or_else(|| payload.get("raw").and_then(Value::as_str))
        .unwrap_or(FALLBACK_REPLY)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_prefers_message_then_raw() {
        let payload = json!({"message": "Hola Ana"});
        assert_eq!(plain_text(&Envelope::from_value(&payload), &payload), "Hola Ana");

        let payload = json!({"raw": "texto plano"});
        assert_eq!(
            plain_text(&Envelope::from_value(&payload), &payload),
            "texto plano"
        );

        let payload = Value::Null;
        assert_eq!(
            plain_text(&Envelope::from_value(&payload), &payload),
            "Respuesta recibida."
        );
    }
}
