// src/handlers/report.rs
use axum::{extract::Form, http::StatusCode, response::Html};

use crate::services::notifier::ToastQueue;
use crate::services::report::{DraftController, DraftField, SelectedFile};
use crate::templates;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    #[default]
    Submit,
    Voice,
}

/// Replays the url-encoded report form into a fresh controller, then runs
/// the requested action. Browsers send only the chosen file's name for a
/// file input in this encoding; `photoName` carries an earlier selection
/// across re-renders.
pub async fn submit_report(Form(pairs): Form<Vec<(String, String)>>) -> (StatusCode, Html<String>) {
    let mut controller = DraftController::new(ToastQueue::new());
    let mut action = FormAction::default();
    let mut photo: Option<String> = None;

    for (key, value) in pairs {
        match key.as_str() {
            "action" => {
                action = if value == "voice" {
                    FormAction::Voice
                } else {
                    FormAction::Submit
                }
            }
            "photo" if !value.is_empty() => photo = Some(value),
            "photoName" if !value.is_empty() => {
                photo.get_or_insert(value);
            }
            other => match other.parse::<DraftField>() {
                Ok(field) => controller.update_field(field, value),
                Err(err) => tracing::debug!("ignoring form input: {}", err),
            },
        }
    }

    if let Some(name) = photo {
        controller.select_file(SelectedFile::new(name));
    }

    let status = match action {
        FormAction::Voice => {
            controller.request_voice_input();
            StatusCode::OK
        }
        FormAction::Submit => match controller.submit() {
            Ok(()) => StatusCode::OK,
            Err(err) => {
                tracing::info!("report not accepted: {}", err);
                StatusCode::UNPROCESSABLE_ENTITY
            }
        },
    };

    let (draft, toasts) = controller.into_parts();
    (
        status,
        Html(templates::report::render(&draft, toasts.toasts())),
    )
}
