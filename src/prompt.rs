//! Interactive appointment form.
//!
//! Fills in a `FormInput` from terminal prompts. Dates and times are checked
//! as they are typed so the user can retry; the full validation still happens
//! in `FormInput::validate`.

use anyhow::Result;
use appointments_core::form::{validate_date, validate_time};
use appointments_core::{Appointment, FormInput, Status};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

/// Whether a new appointment still lacks a required field.
pub fn is_incomplete(input: &FormInput) -> bool {
    input.title.is_none()
        || input.date.is_none()
        || input.start_time.is_none()
        || input.end_time.is_none()
}

/// Prompt for whatever a new appointment is missing. Fields that were
/// already given are left alone.
pub fn fill_new(mut input: FormInput) -> Result<FormInput> {
    if input.title.is_none() {
        input.title = Some(prompt_with_retry("  Title", None, check_title)?);
    }
    if input.date.is_none() {
        input.date = Some(prompt_with_retry("  Date (YYYY-MM-DD)", None, |s| {
            validate_date(s).map(|_| ())
        })?);
    }
    if input.start_time.is_none() {
        input.start_time = Some(prompt_with_retry("  Start (HH:MM)", None, |s| {
            validate_time("start time", s).map(|_| ())
        })?);
    }
    if input.end_time.is_none() {
        input.end_time = Some(prompt_with_retry("  End (HH:MM)", None, |s| {
            validate_time("end time", s).map(|_| ())
        })?);
    }
    if input.location.is_none() {
        input.location = Some(prompt_optional("  Where? (skip)", "")?);
    }
    if input.department.is_none() {
        input.department = Some(prompt_optional("  Department (skip)", "")?);
    }
    if input.status.is_none() {
        input.status = Some(select_status(&Status::Pending)?);
    }

    Ok(input)
}

/// Prompt for every field, pre-filled with the current values.
pub fn edit_existing(current: &Appointment) -> Result<FormInput> {
    let date = current.date.format("%Y-%m-%d").to_string();
    let start = current.start_time.format("%H:%M").to_string();
    let end = current.end_time.format("%H:%M").to_string();

    Ok(FormInput {
        title: Some(prompt_with_retry("  Title", Some(&current.title), check_title)?),
        date: Some(prompt_with_retry("  Date (YYYY-MM-DD)", Some(&date), |s| {
            validate_date(s).map(|_| ())
        })?),
        start_time: Some(prompt_with_retry("  Start (HH:MM)", Some(&start), |s| {
            validate_time("start time", s).map(|_| ())
        })?),
        end_time: Some(prompt_with_retry("  End (HH:MM)", Some(&end), |s| {
            validate_time("end time", s).map(|_| ())
        })?),
        location: Some(prompt_optional("  Where?", &current.location)?),
        department: Some(prompt_optional("  Department", &current.department)?),
        status: Some(select_status(&current.status)?),
    })
}

fn check_title(s: &str) -> appointments_core::AppointmentResult<()> {
    FormInput {
        title: Some(s.to_string()),
        ..Default::default()
    }
    .validate()
    .map(|_| ())
}

/// Prompt the user with retry on validation errors.
fn prompt_with_retry<F>(prompt: &str, default: Option<&str>, check: F) -> Result<String>
where
    F: Fn(&str) -> appointments_core::AppointmentResult<()>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        let value = input.interact_text()?;
        match check(&value) {
            Ok(()) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_optional(prompt: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .show_default(!default.is_empty())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Pick a status. A custom current status is offered alongside the known ones.
fn select_status(current: &Status) -> Result<String> {
    let options = status_options(current);
    let labels: Vec<String> = options.iter().map(|s| s.label()).collect();
    let default = options.iter().position(|s| s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Status")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection].to_string())
}

fn status_options(current: &Status) -> Vec<Status> {
    let mut options = Status::KNOWN.to_vec();
    if !options.contains(current) {
        options.push(current.clone());
    }
    options
}
