// src/scorecard/render.rs

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::{
    models::submission::{Candidate, ScoreReport},
    utils::html::escape_text,
};

use super::{SubjectScore, Tier, format_percent, percentage, tally};

/// Renders the scorecard email body, stamped with the current local time.
pub fn render(candidate: &Candidate, report: &ScoreReport, contact_email: &str) -> String {
    render_at(candidate, report, contact_email, Local::now())
}

/// Renders the scorecard email body for a given test date.
pub fn render_at(
    candidate: &Candidate,
    report: &ScoreReport,
    contact_email: &str,
    taken_at: DateTime<Local>,
) -> String {
    let percent = percentage(report.score, report.total);
    let tier = Tier::from_percentage(percent);
    let color = tier.color();

    let subjects = tally(&report.answers, &report.questions);
    let subject_rows = subject_rows(&subjects, color);

    let name = escape_text(candidate.display_name());
    let roll = escape_text(candidate.display_roll());
    let contact = escape_text(contact_email);
    let test_date = taken_at.format("%B %d, %Y at %I:%M %p");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #5b8cff, #8b5bff); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px; }}
        .scorecard {{ background: white; border-radius: 10px; padding: 25px; margin: 20px 0; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }}
        .score {{ font-size: 48px; font-weight: bold; color: {color}; text-align: center; margin: 20px 0; }}
        .performance {{ text-align: center; font-size: 18px; color: {color}; margin-bottom: 30px; }}
        table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
        th {{ background: #e9ecef; padding: 12px; text-align: left; font-weight: bold; }}
        .footer {{ text-align: center; margin-top: 30px; color: #6c757d; font-size: 14px; }}
        .highlight {{ background: #e3f2fd; padding: 15px; border-left: 4px solid #2196f3; margin: 20px 0; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Trinexial Technologies</h1>
            <h2>Mock Aptitude Test - Scorecard</h2>
        </div>

        <div class="content">
            <p>Dear <strong>{name}</strong>,</p>

            <p>Thank you for taking the Trinexial Technologies Mock Aptitude Test. We are pleased to share your detailed scorecard and performance analysis.</p>

            <div class="scorecard">
                <h3 style="text-align: center; margin-bottom: 20px;">Your Scorecard</h3>

                <div class="score">{score}/{total}</div>
                <div class="performance">{label} ({percent}%)</div>

                <table>
                    <tr>
                        <th>Subject</th>
                        <th style="text-align: center;">Score</th>
                        <th style="text-align: center;">Percentage</th>
                    </tr>{subject_rows}
                </table>

                <div style="margin-top: 20px;">
                    <p><strong>Test Details:</strong></p>
                    <ul>
                        <li>Candidate ID: {roll}</li>
                        <li>Test Date: {test_date}</li>
                        <li>Total Questions: {total}</li>
                        <li>Correct Answers: {score}</li>
                        <li>Proctoring Violations: {violations}</li>
                    </ul>
                </div>
            </div>

            <div class="highlight">
                <h4>Next Steps</h4>
                <p>Based on your performance, our team will review your results and contact you within 2-3 business days regarding the next phase of our selection process.</p>
                <p>If you have any questions about your results, please don't hesitate to reach out to us.</p>
            </div>

            <p>We appreciate your interest in Trinexial Technologies and wish you the best of luck!</p>

            <div class="footer">
                <p><strong>Trinexial Technologies</strong><br>
                Email: {contact}<br>
                <em>Innovating the Future of Technology</em></p>
            </div>
        </div>
    </div>
</body>
</html>
"#,
        score = report.score,
        total = report.total,
        label = tier.label(),
        percent = format_percent(percent),
        violations = report.violations,
    )
}

/// One table row per subject that had at least one attempted question.
fn subject_rows(subjects: &[SubjectScore], color: &str) -> String {
    let mut rows = String::new();
    for s in subjects.iter().filter(|s| s.total > 0) {
        // Writing to a String cannot fail.
        let _ = write!(
            rows,
            r#"
                    <tr>
                        <td style="padding: 8px; border-bottom: 1px solid #e9ecef;">{subject}</td>
                        <td style="padding: 8px; border-bottom: 1px solid #e9ecef; text-align: center;">{correct}/{total}</td>
                        <td style="padding: 8px; border-bottom: 1px solid #e9ecef; text-align: center; color: {color};">{percent}%</td>
                    </tr>"#,
            subject = escape_text(s.subject),
            correct = s.correct,
            total = s.total,
            percent = format_percent(s.percentage()),
        );
    }
    rows
}
