//! Form Checks
//!
//! The backend validates everything; these only stop obviously incomplete
//! forms from being submitted.

use crate::error::{ClientError, Result};

/// Minimum password length accepted at sign-up
pub const MIN_PASSWORD_LEN: usize = 8;

/// Session start and quiz generation both need a subject and a topic.
pub fn require_subject_and_topic(subject: &str, topic: &str) -> Result<()> {
    if subject.trim().is_empty() || topic.trim().is_empty() {
        return Err(ClientError::Validation(
            "Please select both subject and topic".into(),
        ));
    }
    Ok(())
}

/// Reject blank input for a named field
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Sign-up password rules
pub fn check_new_password(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        return Err(ClientError::Validation("Passwords do not match".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

/// Split a comma-separated list of learning gaps, dropping blanks
pub fn parse_learning_gaps(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|gap| !gap.is_empty())
        .map(String::from)
        .collect()
}

/// Number of questions without an answer
pub fn unanswered(answers: &[Option<usize>]) -> usize {
    answers.iter().filter(|a| a.is_none()).count()
}
