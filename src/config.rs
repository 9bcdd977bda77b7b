// src/config.rs

use std::{env, path::PathBuf, str::FromStr};

use dotenvy::dotenv;

use crate::mail::MailerConfig;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding `index.html`, `styles.css` and `app.js`.
    pub static_dir: PathBuf,
    pub rust_log: String,
    pub log_dir: PathBuf,
    pub mailer: MailerConfig,
    /// Maximum number of SMTP sessions running at once.
    pub mail_workers: usize,
    /// Pending scorecard jobs accepted before submissions are refused.
    pub mail_queue_capacity: usize,
}

/// Settings needed to install the tracing subscriber.
///
/// Read on their own so logging is up before [`Config::from_env`] reports
/// any invalid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub rust_log: String,
    pub log_dir: PathBuf,
}

impl LogConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let LogConfig { rust_log, log_dir } = LogConfig::from_env();

        Self {
            port: DEFAULT_PORT,
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            rust_log,
            log_dir,
            mailer: MailerConfig::from_env(),
            mail_workers: env_or("MAIL_WORKERS", 4),
            mail_queue_capacity: env_or("MAIL_QUEUE_CAPACITY", 64),
        }
    }

    /// Applies the optional positional port argument.
    ///
    /// An unparsable value is logged and the default port is kept.
    pub fn with_port_arg(mut self, arg: Option<String>) -> Self {
        if let Some(raw) = arg {
            match parse_port(&raw) {
                Some(port) => self.port = port,
                None => {
                    tracing::warn!(
                        "Invalid port number {:?}. Using default port {}.",
                        raw,
                        DEFAULT_PORT
                    );
                    self.port = DEFAULT_PORT;
                }
            }
        }
        self
    }
}

pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok()
}

/// Reads an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}
