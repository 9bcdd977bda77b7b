//! Mailer trait and SMTP implementation.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::MailError;
use crate::config::env_or;
use crate::models::submission::{Candidate, ScoreReport};
use crate::scorecard;

/// Scorecard delivery seam used by the mail queue.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Render and send the scorecard for one submission.
    async fn send(&self, candidate: &Candidate, report: &ScoreReport) -> Result<(), MailError>;
}

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP relay hostname.
    pub host: String,

    /// SMTP relay port (default: 587).
    pub port: u16,

    /// Sender address, also used as the SMTP login.
    pub sender: String,

    /// App password for the sender account. `None` disables sending.
    pub password: Option<String>,

    /// Connection timeout in seconds (default: 10).
    pub timeout: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            sender: "scorecards@trinexial.example".to_string(),
            password: None,
            timeout: 10,
        }
    }
}

impl MailerConfig {
    /// Reads `SMTP_HOST`, `SMTP_PORT`, `SMTP_SENDER`, `GMAIL_APP_PASSWORD`, `SMTP_TIMEOUT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("SMTP_HOST").unwrap_or(defaults.host),
            port: env_or("SMTP_PORT", defaults.port),
            sender: env::var("SMTP_SENDER").unwrap_or(defaults.sender),
            password: env::var("GMAIL_APP_PASSWORD")
                .ok()
                .filter(|p| !p.trim().is_empty()),
            timeout: env_or("SMTP_TIMEOUT", defaults.timeout),
        }
    }
}

/// SMTP-based mailer using lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    /// Absent when no password is configured.
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: Mailbox,
    contact: String,
}

impl SmtpMailer {
    /// Create a mailer from explicit configuration.
    ///
    /// Fails only when the sender address is malformed or the relay's TLS
    /// parameters cannot be built. A missing password is not an error: the
    /// mailer is created and every send reports [`MailError::MissingPassword`].
    pub fn from_config(config: MailerConfig) -> Result<Self, MailError> {
        let sender: Mailbox = config
            .sender
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.sender.clone()))?;

        let transport = match config.password {
            Some(password) => Some(
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| MailError::Smtp(e.to_string()))?
                    .port(config.port)
                    .timeout(Some(Duration::from_secs(config.timeout)))
                    .credentials(Credentials::new(config.sender.clone(), password))
                    .build(),
            ),
            None => None,
        };

        Ok(Self {
            transport,
            sender,
            contact: config.sender,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Build the scorecard message for a candidate.
    pub fn build_message(
        &self,
        candidate: &Candidate,
        report: &ScoreReport,
    ) -> Result<Message, MailError> {
        let to: Mailbox = candidate
            .email
            .trim()
            .parse()
            .map_err(|_| MailError::InvalidAddress(candidate.email.clone()))?;

        let subject = format!(
            "Trinexial Technologies - Mock Aptitude Test Scorecard for {}",
            candidate.display_name()
        );
        let html = scorecard::render(candidate, report, &self.contact);

        Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(html)))
            .map_err(|e| MailError::Build(e.to_string()))
    }

    /// Sends the scorecard and reports whether the SMTP session completed.
    ///
    /// Never fails: problems are logged and turned into `false`.
    pub async fn send_scorecard(&self, candidate: &Candidate, report: &ScoreReport) -> bool {
        match Mailer::send(self, candidate, report).await {
            Ok(()) => {
                tracing::info!("Scorecard email sent successfully to {}", candidate.email);
                true
            }
            Err(e) => {
                tracing::error!("Error sending email to {}: {}", candidate.email, e);
                false
            }
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, candidate: &Candidate, report: &ScoreReport) -> Result<(), MailError> {
        let transport = self.transport.as_ref().ok_or(MailError::MissingPassword)?;
        let message = self.build_message(candidate, report)?;

        transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}
