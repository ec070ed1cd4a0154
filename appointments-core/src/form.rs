//! Validation of raw form input.
//!
//! The form hands over text. Everything is checked here, before it reaches
//! the appointment book, which trusts what it is given.

use crate::appointment::{AppointmentPatch, Filter, Status, parse_date, parse_time};
use crate::error::{AppointmentError, AppointmentResult};

/// Raw field values as typed by the user. `None` means the field was left out.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl FormInput {
    pub fn validate(self) -> AppointmentResult<AppointmentPatch> {
        let title = match self.title {
            Some(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(AppointmentError::InvalidField {
                        field: "title",
                        reason: "must not be empty".to_string(),
                    });
                }
                Some(t.to_string())
            }
            None => None,
        };

        Ok(AppointmentPatch {
            title,
            date: self.date.as_deref().map(validate_date).transpose()?,
            start_time: self
                .start_time
                .as_deref()
                .map(|s| validate_time("start time", s))
                .transpose()?,
            end_time: self
                .end_time
                .as_deref()
                .map(|s| validate_time("end time", s))
                .transpose()?,
            location: self.location.map(|s| s.trim().to_string()),
            department: self.department.map(|s| s.trim().to_string()),
            status: self.status.as_deref().map(validate_status).transpose()?,
        })
    }
}

/// Status text is trimmed and lower-cased. "all" is rejected because no
/// filter could ever select it.
pub fn validate_status(s: &str) -> AppointmentResult<Status> {
    let s = s.trim().to_lowercase();
    if s == Filter::ALL {
        return Err(AppointmentError::InvalidField {
            field: "status",
            reason: format!("'{}' is reserved for listing every appointment", s),
        });
    }
    Ok(Status::from(s))
}

pub fn validate_date(s: &str) -> AppointmentResult<chrono::NaiveDate> {
    parse_date(s.trim()).ok_or_else(|| AppointmentError::InvalidField {
        field: "date",
        reason: format!("'{}', expected YYYY-MM-DD", s),
    })
}

pub fn validate_time(field: &'static str, s: &str) -> AppointmentResult<chrono::NaiveTime> {
    parse_time(s.trim()).ok_or_else(|| AppointmentError::InvalidField {
        field,
        reason: format!("'{}', expected HH:MM", s),
    })
}
