// src/handlers/submission.rs

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    mail::{MailQueue, ScorecardJob},
    models::submission::{SubmissionRequest, SubmitResponse},
};

/// Accepts a finished test and queues the scorecard email.
///
/// * The body is decoded by hand so that any decoding problem surfaces as the
///   500 submission error instead of an extractor rejection.
/// * Replies as soon as the job is queued. `email_sent` reports the dispatch,
///   the outcome of the SMTP session only reaches the log.
pub async fn submit_test(
    State(queue): State<MailQueue>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let submission: SubmissionRequest = serde_json::from_slice(&body)?;
    let (candidate, report) = submission.into_parts();

    let job = ScorecardJob::new(candidate, report);
    let job_id = job.id.clone();
    let recipient = job.candidate.email.clone();

    queue.enqueue(job)?;

    tracing::info!(%job_id, "Queued scorecard for {}", recipient);

    Ok(Json(SubmitResponse::dispatched()))
}
