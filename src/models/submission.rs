// src/models/submission.rs

use serde::{Deserialize, Deserializer, Serialize};

/// A single question as reported by the test page.
///
/// The page sends its question bank verbatim, so the short keys `c`
/// (subject) and `a` (correct option index) are the primary names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionRecord {
    #[serde(rename = "c", alias = "subject", deserialize_with = "null_as_default")]
    pub subject: String,

    #[serde(rename = "a", alias = "correct")]
    pub correct: Option<i64>,
}

/// DTO for `POST /submit-test`.
/// Every field is optional; missing or `null` values become empty or zero,
/// and floats are accepted for the counters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub roll: String,
    #[serde(deserialize_with = "lenient_int")]
    pub score: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub total: i64,
    /// Selected option per question position; `null` or `-1` when left unanswered.
    #[serde(deserialize_with = "null_as_default")]
    pub answers: Vec<Option<i64>>,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<QuestionRecord>,
    #[serde(deserialize_with = "lenient_int")]
    pub violations: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON number or `null`. Fractions are truncated toward zero.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(n) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    Ok(n
        .as_i64()
        .unwrap_or_else(|| n.as_f64().map(|f| f as i64).unwrap_or_default()))
}

/// Who took the test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub roll: String,
}

impl Candidate {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Candidate"
        } else {
            &self.name
        }
    }

    pub fn display_roll(&self) -> &str {
        if self.roll.trim().is_empty() {
            "N/A"
        } else {
            &self.roll
        }
    }
}

/// The client-computed result of one attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: i64,
    pub total: i64,
    pub answers: Vec<Option<i64>>,
    pub questions: Vec<QuestionRecord>,
    pub violations: i64,
}

impl SubmissionRequest {
    pub fn into_parts(self) -> (Candidate, ScoreReport) {
        (
            Candidate {
                name: self.name,
                email: self.email,
                roll: self.roll,
            },
            ScoreReport {
                score: self.score,
                total: self.total,
                answers: self.answers,
                questions: self.questions,
                violations: self.violations,
            },
        )
    }
}

/// Body of every `/submit-test` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    /// True once the scorecard job is queued. It says nothing about delivery.
    pub email_sent: bool,
}

impl SubmitResponse {
    pub fn dispatched() -> Self {
        Self {
            success: true,
            message: "Test submitted successfully. Scorecard will be sent to your email shortly."
                .to_string(),
            email_sent: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            email_sent: false,
        }
    }
}
