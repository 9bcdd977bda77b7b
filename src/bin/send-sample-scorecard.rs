// src/bin/send-sample-scorecard.rs
//
// Sends the built-in sample scorecard to the address given as the first
// argument. Useful for checking SMTP credentials without running the server.

use std::process::ExitCode;

use scorecard_server::mail::{MailerConfig, SmtpMailer};
use scorecard_server::models::submission::{Candidate, QuestionRecord, ScoreReport};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let Some(recipient) = std::env::args().nth(1) else {
        eprintln!("usage: send-sample-scorecard <recipient-email>");
        return ExitCode::from(2);
    };

    let mailer = match SmtpMailer::from_config(MailerConfig::from_env()) {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!("Invalid mail configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let candidate = Candidate {
        name: "John Doe".to_string(),
        email: recipient,
        roll: "EE23-001".to_string(),
    };

    tracing::info!("Sending sample scorecard to {}", candidate.email);
    if mailer.send_scorecard(&candidate, &sample_report()).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn sample_report() -> ScoreReport {
    let key = [
        ("Digital Electronics", 0),
        ("Digital Electronics", 1),
        ("VLSI", 2),
        ("VLSI", 1),
        ("DSP", 0),
        ("DSP", 2),
        ("DC (Circuits)", 1),
        ("DC (Circuits)", 0),
        ("Aptitude", 1),
        ("Aptitude", 2),
        ("Digital Electronics", 0),
        ("DSP", 1),
        ("VLSI", 2),
        ("DC (Circuits)", 1),
        ("Aptitude", 0),
    ];
    let answers = [0, 1, 2, 1, 0, 2, 1, 0, 1, 2, 0, 1, 2, 1, 0];

    ScoreReport {
        score: 12,
        total: 15,
        answers: answers.iter().copied().map(Some).collect(),
        questions: key
            .iter()
            .map(|&(subject, correct)| QuestionRecord {
                subject: subject.to_string(),
                correct: Some(correct),
            })
            .collect(),
        violations: 1,
    }
}
