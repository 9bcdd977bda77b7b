// src/scorecard/tally.rs

use crate::models::submission::QuestionRecord;

use super::round_to;

/// Subjects reported on the scorecard, in display order.
pub const SUBJECTS: [&str; 5] = [
    "Digital Electronics",
    "VLSI",
    "DSP",
    "DC (Circuits)",
    "Aptitude",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectScore {
    pub subject: &'static str,
    pub correct: u32,
    pub total: u32,
}

impl SubjectScore {
    /// Share of attempted questions answered correctly, one decimal.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to(f64::from(self.correct) / f64::from(self.total) * 100.0, 1)
    }
}

/// Counts attempted and correct answers per allowlisted subject.
///
/// Answers and questions are matched by position. A position without an
/// answer, or holding a negative index (the page sends `-1` for a skipped
/// question), is not attempted. Unknown subject labels are dropped. The result
/// always holds one entry per subject in [`SUBJECTS`] order.
pub fn tally(answers: &[Option<i64>], questions: &[QuestionRecord]) -> Vec<SubjectScore> {
    let mut scores: Vec<SubjectScore> = SUBJECTS
        .iter()
        .map(|&subject| SubjectScore {
            subject,
            correct: 0,
            total: 0,
        })
        .collect();

    for (question, answer) in questions.iter().zip(answers) {
        let Some(answer) = answer.filter(|a| *a >= 0) else {
            continue;
        };
        let Some(entry) = scores.iter_mut().find(|s| s.subject == question.subject) else {
            continue;
        };

        entry.total += 1;
        if question.correct == Some(answer) {
            entry.correct += 1;
        }
    }

    scores
}
