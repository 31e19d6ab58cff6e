//! Form validation rules shared by the registration form and the dashboard
//! editor. Messages are surfaced verbatim next to the offending field.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CoordinatorFields, NewParticipant};

static MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static AFFILIATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5,7}$").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub fn mobile(value: &str) -> Result<(), String> {
    if MOBILE.is_match(value) {
        Ok(())
    } else {
        Err("Mobile number must be 10 digits".to_string())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

/// Optional field; validated only when present.
pub fn affiliation_number(value: &str) -> Result<(), String> {
    if value.is_empty() || AFFILIATION.is_match(value) {
        Ok(())
    } else {
        Err("Affiliation number must be 5-7 digits".to_string())
    }
}

fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// First failing rule wins, mirroring per-field display order on the form.
pub fn registration(form: &NewParticipant) -> Result<(), String> {
    affiliation_number(&form.affiliation_number)?;
    required(&form.school_name, "School's name is required")?;
    required(
        &form.teacher_coordinator_name,
        "Name of Teacher Coordinator for the Event is required",
    )?;
    mobile(&form.teacher_coordinator_mobile)?;
    email(&form.teacher_coordinator_email)?;
    Ok(())
}

pub fn coordinator(fields: &CoordinatorFields) -> Result<(), String> {
    required(&fields.teacher_coordinator_name, "Name is required")?;
    mobile(&fields.teacher_coordinator_mobile)?;
    email(&fields.teacher_coordinator_email)?;
    Ok(())
}
