//! Bounded background queue for scorecard emails.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};
use tracing::Instrument;

use super::Mailer;
use crate::models::submission::{Candidate, ScoreReport};

/// One scorecard waiting to be sent.
#[derive(Debug, Clone)]
pub struct ScorecardJob {
    pub id: String,
    pub candidate: Candidate,
    pub report: ScoreReport,
}

impl ScorecardJob {
    pub fn new(candidate: Candidate, report: ScoreReport) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            candidate,
            report,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The SMTP relay accepted the message.
    Delivered,
    Failed(String),
}

/// Result of one finished send, published on the outcome channel.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub job_id: String,
    pub recipient: String,
    pub status: DeliveryStatus,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnqueueError {
    #[error("mail queue is full")]
    Full,

    #[error("mail queue is closed")]
    Closed,
}

/// Handle for submitting scorecard jobs.
///
/// Cloning is cheap; all clones feed the same dispatcher. The dispatcher
/// stops once every handle is dropped and the channel drains.
#[derive(Clone)]
pub struct MailQueue {
    jobs: mpsc::Sender<ScorecardJob>,
}

impl MailQueue {
    /// Spawns the dispatcher and returns the queue handle together with the
    /// receiving end of the outcome channel.
    ///
    /// * `workers`: sends allowed to run at once (at least 1).
    /// * `capacity`: jobs that may wait before [`MailQueue::enqueue`] reports
    ///   [`EnqueueError::Full`] (at least 1).
    pub fn start<M: Mailer>(
        mailer: Arc<M>,
        workers: usize,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<DeliveryOutcome>) {
        let capacity = capacity.max(1);
        let (jobs_tx, jobs_rx) = mpsc::channel(capacity);
        let (outcomes_tx, outcomes_rx) = mpsc::channel(capacity);

        tokio::spawn(dispatch(mailer, jobs_rx, outcomes_tx, workers.max(1)));

        (Self { jobs: jobs_tx }, outcomes_rx)
    }

    /// Queues a job without waiting.
    pub fn enqueue(&self, job: ScorecardJob) -> Result<(), EnqueueError> {
        self.jobs.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => EnqueueError::Full,
            mpsc::error::TrySendError::Closed(_) => EnqueueError::Closed,
        })
    }
}

/// Takes a worker permit first, then the next job, so at most `workers`
/// sends are in flight and the rest stay in the bounded channel.
async fn dispatch<M: Mailer>(
    mailer: Arc<M>,
    mut jobs: mpsc::Receiver<ScorecardJob>,
    outcomes: mpsc::Sender<DeliveryOutcome>,
    workers: usize,
) {
    let semaphore = Arc::new(Semaphore::new(workers));

    loop {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };
        let Some(job) = jobs.recv().await else {
            break;
        };

        let mailer = mailer.clone();
        let outcomes = outcomes.clone();

        tokio::spawn(async move {
            let _permit = permit;

            let span = tracing::info_span!(
                "scorecard",
                job_id = %job.id,
                recipient = %job.candidate.email
            );
            let status = match mailer.send(&job.candidate, &job.report).instrument(span).await {
                Ok(()) => DeliveryStatus::Delivered,
                Err(e) => DeliveryStatus::Failed(e.to_string()),
            };

            let outcome = DeliveryOutcome {
                job_id: job.id,
                recipient: job.candidate.email,
                status,
            };
            if outcomes.send(outcome).await.is_err() {
                tracing::debug!("outcome receiver dropped");
            }
        });
    }

    tracing::info!("Mail queue closed, dispatcher stopping");
}

/// Drains the outcome channel into the log.
pub fn spawn_outcome_logger(
    mut outcomes: mpsc::Receiver<DeliveryOutcome>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(outcome) = outcomes.recv().await {
            match &outcome.status {
                DeliveryStatus::Delivered => tracing::info!(
                    job_id = %outcome.job_id,
                    "Scorecard email sent to {}",
                    outcome.recipient
                ),
                DeliveryStatus::Failed(reason) => tracing::error!(
                    job_id = %outcome.job_id,
                    "Failed to send email to {}: {}",
                    outcome.recipient,
                    reason
                ),
            }
        }
    })
}
