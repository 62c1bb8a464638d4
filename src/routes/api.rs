use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use portfolio_contact::{ContactSubmission, FailureDetail, FieldErrors, SubmissionResult};

use crate::routes::AppState;

/// POST /api/contact - the gateway exposed to remote callers.
///
/// The body is always a `SubmissionResult`, including for payloads that do
/// not decode.
pub async fn contact(
    State(app_state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let result = match payload {
        Ok(Json(submission)) => app_state.gateway.handle(submission).await,
        Err(rejection) => {
            tracing::info!(error = %rejection, "Undecodable contact payload");

            let mut fields = FieldErrors::default();
            fields.insert("form", rejection.body_text());
            SubmissionResult::invalid(fields)
        }
    };

    (status_of(&result), Json(result))
}

fn status_of(result: &SubmissionResult) -> StatusCode {
    match &result.error {
        None => StatusCode::OK,
        Some(FailureDetail::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(FailureDetail::Config { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        Some(FailureDetail::Transport { .. }) => StatusCode::BAD_GATEWAY,
    }
}
