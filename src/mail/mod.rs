//! Scorecard delivery over SMTP.
//!
//! [`SmtpMailer`] turns a candidate and score report into a MIME message and
//! submits it through a STARTTLS relay using [lettre](https://lettre.rs).
//! [`MailQueue`] runs those sends in the background with a bounded job
//! channel and a fixed number of workers, reporting every result on an
//! outcome channel.
//!
//! # Environment Variables
//!
//! [`MailerConfig::from_env`] reads:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SMTP_HOST` | `smtp.gmail.com` | SMTP relay hostname |
//! | `SMTP_PORT` | `587` | Relay port |
//! | `SMTP_SENDER` | `scorecards@trinexial.example` | Sender and login address |
//! | `GMAIL_APP_PASSWORD` | unset | App password; without it every send fails |
//! | `SMTP_TIMEOUT` | `10` | Timeout in seconds |

mod mailer;
mod queue;

pub use mailer::{Mailer, MailerConfig, SmtpMailer};
pub use queue::{
    DeliveryOutcome, DeliveryStatus, EnqueueError, MailQueue, ScorecardJob, spawn_outcome_logger,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP password not set, set GMAIL_APP_PASSWORD to enable email")]
    MissingPassword,

    #[error("invalid email address: {0:?}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}
