use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use lovemeet_types::{DatePlan, ProposalDraft, RevealPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every problem found in one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Seven or more characters from digits, spaces and `-+()`.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: Vec<char> = phone.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 7
        && compact
            .iter()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '(' | ')'))
}

/// Planner checks run before a share link is created.
pub fn validate_plan(plan: &DatePlan) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if blank(&plan.address_line1) {
        errors.push(FieldError {
            field: "addressLine1",
            message: "Address is required",
        });
    }
    if blank(&plan.city) {
        errors.push(FieldError {
            field: "city",
            message: "City is required",
        });
    }
    if blank(&plan.date) {
        errors.push(FieldError {
            field: "date",
            message: "Date is required",
        });
    } else if NaiveDate::parse_from_str(plan.date.trim(), "%Y-%m-%d").is_err() {
        errors.push(FieldError {
            field: "date",
            message: "Date must be YYYY-MM-DD",
        });
    }
    if blank(&plan.time) {
        errors.push(FieldError {
            field: "time",
            message: "Time is required",
        });
    } else if NaiveTime::parse_from_str(plan.time.trim(), "%H:%M").is_err()
        && NaiveTime::parse_from_str(plan.time.trim(), "%H:%M:%S").is_err()
    {
        errors.push(FieldError {
            field: "time",
            message: "Time must be HH:MM",
        });
    }
    if let Some(phone) = plan.recipient_phone.as_deref() {
        if !blank(phone) && !is_valid_phone(phone) {
            errors.push(FieldError {
                field: "recipientPhone",
                message: "Please enter a valid phone number",
            });
        }
    }

    finish(errors)
}

/// Composer checks run before a proposal is saved.
pub fn validate_proposal(draft: &ProposalDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if blank(&draft.message) {
        errors.push(FieldError {
            field: "message",
            message: "Message is required",
        });
    }
    if draft.reveal == RevealPolicy::Countdown {
        let valid = draft
            .countdown_date
            .as_deref()
            .is_some_and(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").is_ok());
        if !valid {
            errors.push(FieldError {
                field: "countdownDate",
                message: "A countdown reveal needs a YYYY-MM-DD date",
            });
        }
    }

    finish(errors)
}
