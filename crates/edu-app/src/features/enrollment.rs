//! Student enrollment: enroll, cancel (with confirmation), enrollments,
//! progress.

use chrono::Utc;
use edu_client::{Endpoint, Notice};
use edu_core::entities::{Enrollment, Progress};
use edu_core::envelope::Envelope;
use serde_json::json;

use super::required;
use crate::app::{App, decode_data};
use crate::error::FeatureError;
use crate::state::PendingAction;
use crate::view::{
    CancelView, CancellationPrompt, EnrollView, EnrollmentsView, Page, ProgressView, Receipt,
    ReceiptKind,
};

const MISSING_CODE: &str = "Debes indicar el código del curso.";
const DEFAULT_RESULT: &str = "Operación completada";
const DEFAULT_ACKNOWLEDGEMENT: &str = "Respuesta recibida.";
const DEFAULT_CANCELLED: &str = "Inscripción cancelada exitosamente";
const CANCEL_FAILED: &str = "No se pudo cancelar la inscripción.";

/// How an enrollment answer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EnrollmentAnswer {
    Confirmed(String),
    Declined(String),
    Acknowledged(String),
}

/// Lowercase with Spanish accents folded, for keyword matching.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

fn mentions_confirmation(text: &str) -> bool {
    let folded = fold(text);
    folded.contains("exito") || folded.contains("inscripcion")
}

/// Read an `/inscribir` (or chat `inscripcion`) payload.
///
/// An explicit `success` wins. Otherwise a `resultado`/`message` mentioning
/// success or enrollment confirms and any other `resultado` declines.
/// Payloads that are neither enrollment-typed nor carry `resultado` are a
/// plain acknowledgement.
pub(crate) fn interpret_enrollment(envelope: &Envelope) -> EnrollmentAnswer {
    match envelope.success {
        Some(true) => EnrollmentAnswer::Confirmed(
            envelope.text().unwrap_or(DEFAULT_RESULT).to_string(),
        ),
        Some(false) => EnrollmentAnswer::Declined(
            envelope
                .text()
                .or(envelope.detail.as_deref())
                .unwrap_or(DEFAULT_RESULT)
                .to_string(),
        ),
        None if envelope.is_kind("inscripcion") || envelope.result.is_some() => {
            let text = envelope.text().unwrap_or(DEFAULT_RESULT).to_string();
            if mentions_confirmation(&text) {
                EnrollmentAnswer::Confirmed(text)
            } else {
                EnrollmentAnswer::Declined(text)
            }
        }
        None => EnrollmentAnswer::Acknowledged(
            envelope
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_ACKNOWLEDGEMENT.to_string()),
        ),
    }
}

impl App {
    /// Enroll the logged-in student in `code`.
    ///
    /// When `/inscribir` gives no result and the policy would fall back, the
    /// request is repeated as the chat command `inscribir en {code}` first.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Declined`] when the backend's answer declines the
    /// enrollment, [`FeatureError::Backend`] when the call fails and the
    /// policy keeps the failure.
    pub async fn enroll(&mut self, code: &str) -> Result<Page<EnrollView>, FeatureError> {
        let code = required(code, MISSING_CODE)?;
        let state = self.require_state()?;
        let student_id = state.session.user_id();
        let student = state.session.display_name().to_string();
        let course_name = state.course_name(code);

        self.notify(Notice::info(format!(
            "Solicitando inscripción en {course_name} ({code})..."
        )));
        let body = json!({ "estudiante_id": student_id, "codigo": code });
        let via_chat = json!({ "text": format!("inscribir en {code}"), "estudiante_id": student_id });
        let resolved = self
            .fetch_or_retry(&Endpoint::Enroll, &body, (&Endpoint::Chat, &via_chat))
            .await?;

        let view = match interpret_enrollment(&Envelope::from_value(&resolved.payload)) {
            EnrollmentAnswer::Confirmed(message) => {
                let receipt = Receipt::issue(
                    ReceiptKind::Enrollment,
                    code,
                    &course_name,
                    &student,
                    Utc::now(),
                );
                tracing::info!(code, transaction = %receipt.transaction_id, source = %resolved.source, "enrollment confirmed");
                EnrollView::Confirmed { message, receipt }
            }
            EnrollmentAnswer::Declined(message) => {
                tracing::info!(code, %message, "enrollment declined");
                return Err(FeatureError::declined(message));
            }
            EnrollmentAnswer::Acknowledged(message) => EnrollView::Acknowledged { message },
        };
        Ok(Page::new(resolved.source, view))
    }

    /// Hold a cancellation of `code` until it is confirmed or dismissed.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Validation`] for a blank code,
    /// [`FeatureError::NotAuthenticated`] without a session.
    pub fn request_cancellation(&mut self, code: &str) -> Result<CancellationPrompt, FeatureError> {
        let code = required(code, MISSING_CODE)?;
        let state = self.require_state_mut()?;
        let name = state.course_name(code);
        state.pending_action = Some(PendingAction::Cancel {
            code: code.to_string(),
            name: name.clone(),
        });
        Ok(CancellationPrompt {
            question: format!(
                "¿Estás seguro de que deseas cancelar tu inscripción en {name} ({code})? \
                 Esta acción liberará tu cupo en el curso."
            ),
            code: code.to_string(),
            name,
        })
    }

    /// Run the held action.
    ///
    /// # Errors
    ///
    /// [`FeatureError::NoPendingAction`] when nothing is held, otherwise as
    /// [`App::cancel`].
    pub async fn confirm_pending(&mut self) -> Result<Page<CancelView>, FeatureError> {
        let pending = self.require_state_mut()?.pending_action.take();
        match pending {
            Some(PendingAction::Cancel { code, .. }) => self.cancel(&code).await,
            None => Err(FeatureError::NoPendingAction),
        }
    }

    /// Drop the held action. Returns whether there was one.
    ///
    /// # Errors
    ///
    /// [`FeatureError::NotAuthenticated`] without a session.
    pub fn dismiss_pending(&mut self) -> Result<bool, FeatureError> {
        Ok(self.require_state_mut()?.pending_action.take().is_some())
    }

    /// Cancel the logged-in student's enrollment in `code`.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Declined`] when the backend answers without a
    /// confirmation, [`FeatureError::Backend`] when the call fails and the
    /// policy keeps the failure.
    pub async fn cancel(&mut self, code: &str) -> Result<Page<CancelView>, FeatureError> {
        let code = required(code, MISSING_CODE)?;
        let state = self.require_state_mut()?;
        if matches!(&state.pending_action, Some(PendingAction::Cancel { code: held, .. }) if held == code)
        {
            state.pending_action = None;
        }
        let student_id = state.session.user_id();
        let student = state.session.display_name().to_string();
        let course_name = state.course_name(code);

        self.notify(Notice::info(format!(
            "Cancelando inscripción en {course_name} ({code})..."
        )));
        let body = json!({ "estudiante_id": student_id, "codigo": code });
        let resolved = self.fetch(&Endpoint::Cancel, Some(&body)).await?;

        if resolved.source.is_demo() {
            let receipt = Receipt::issue(
                ReceiptKind::Cancellation,
                code,
                &course_name,
                &student,
                Utc::now(),
            );
            return Ok(Page::new(
                resolved.source,
                CancelView {
                    message: DEFAULT_CANCELLED.to_string(),
                    receipt: Some(receipt),
                },
            ));
        }

        let envelope = Envelope::from_value(&resolved.payload);
        let acknowledged = envelope.success.is_some()
            || envelope.message.is_some()
            || envelope.result.is_some();
        if !acknowledged || envelope.success == Some(false) {
            tracing::info!(code, "cancellation not confirmed");
            return Err(FeatureError::declined(CANCEL_FAILED));
        }
        Ok(Page::new(
            resolved.source,
            CancelView {
                message: envelope.text().unwrap_or(DEFAULT_CANCELLED).to_string(),
                receipt: None,
            },
        ))
    }

    /// Current enrollments of the logged-in student.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Backend`] when the call fails and the policy keeps
    /// the failure, [`FeatureError::Decode`] for a malformed list.
    pub async fn my_enrollments(&self) -> Result<Page<EnrollmentsView>, FeatureError> {
        self.require_state()?;
        self.notify(Notice::info("Consultando tus inscripciones..."));
        let resolved = self.fetch_data(&Endpoint::MyEnrollments).await?;
        let enrollments: Vec<Enrollment> = decode_data(&resolved, "enrollment list")?;
        Ok(Page::new(resolved.source, EnrollmentsView::new(enrollments)))
    }

    /// Academic progress of the logged-in student.
    ///
    /// # Errors
    ///
    /// [`FeatureError::Declined`] when no progress data is available,
    /// otherwise as [`App::my_enrollments`].
    pub async fn progress(&self) -> Result<Page<ProgressView>, FeatureError> {
        let state = self.require_state()?;
        self.notify(Notice::info("Consultando tu progreso académico..."));
        let resolved = self.fetch_data(&Endpoint::Progress).await?;
        let progress: Option<Progress> =
            Envelope::from_value(&resolved.payload).decode_data("progress")?;
        let progress = progress
            .ok_or_else(|| FeatureError::declined("El servidor no devolvió datos de progreso."))?;
        let view = ProgressView::new(
            state.session.display_name(),
            state.session.user.program.as_deref(),
            progress,
        );
        Ok(Page::new(resolved.source, view))
    }
}
