//! Appointment types.
//!
//! `Appointment` is the stored record. `NewAppointment` is a complete record
//! that has not been given an id yet, and `AppointmentPatch` is the partial
//! shape used for edits (every field optional, merged shallowly).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppointmentError, AppointmentResult};

/// A scheduled appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: Status,
}

impl Appointment {
    /// Shallow-merge `patch` into this record. The id is never touched.
    pub fn apply(&mut self, patch: AppointmentPatch) {
        let AppointmentPatch {
            title,
            date,
            start_time,
            end_time,
            location,
            department,
            status,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(start_time) = start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = end_time {
            self.end_time = end_time;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(department) = department {
            self.department = department;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }

    /// "2024-01-01 09:00 - 09:30"
    pub fn render_when(&self) -> String {
        format!(
            "{} {} - {}",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A complete appointment that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub department: String,
    pub status: Status,
}

impl NewAppointment {
    pub fn with_id(self, id: String) -> Appointment {
        Appointment {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            department: self.department,
            status: self.status,
        }
    }
}

/// Partial appointment used for edits. `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub status: Option<Status>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        *self == AppointmentPatch::default()
    }

    /// Turn the patch into a complete record.
    ///
    /// Title, date and both times are required. Location and department
    /// default to empty text, status defaults to pending.
    pub fn into_new(self) -> AppointmentResult<NewAppointment> {
        Ok(NewAppointment {
            title: self.title.ok_or(AppointmentError::MissingField("title"))?,
            date: self.date.ok_or(AppointmentError::MissingField("date"))?,
            start_time: self
                .start_time
                .ok_or(AppointmentError::MissingField("start time"))?,
            end_time: self
                .end_time
                .ok_or(AppointmentError::MissingField("end time"))?,
            location: self.location.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Appointment status.
///
/// The known values are pending, completed and missed. Anything else is kept
/// verbatim in `Other` and rendered with a neutral tone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    Completed,
    Missed,
    Other(String),
}

/// How a status should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Status {
    pub const KNOWN: [Status; 3] = [Status::Pending, Status::Completed, Status::Missed];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
            Status::Missed => "missed",
            Status::Other(s) => s,
        }
    }

    /// Display label with the first character upper-cased ("Pending").
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Status::Completed => Tone::Success,
            Status::Pending => Tone::Warning,
            Status::Missed => Tone::Danger,
            Status::Other(_) => Tone::Neutral,
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s.to_string()))
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Status::Pending,
            "completed" => Status::Completed,
            "missed" => Status::Missed,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which appointments to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Filter {
    #[default]
    All,
    Status(Status),
}

impl Filter {
    /// Filter text that selects every appointment. Not usable as a status.
    pub const ALL: &'static str = "all";

    pub fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            Filter::All => true,
            Filter::Status(status) => appointment.status == *status,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::from(s.to_string()))
    }
}

/// Filter text is trimmed and lower-cased, the same way status input is.
impl From<String> for Filter {
    fn from(s: String) -> Self {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            Filter::ALL => Filter::All,
            _ => Filter::Status(Status::from(s)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Filter::All => f.write_str(Filter::ALL),
            Filter::Status(status) => write!(f, "{}", status),
        }
    }
}

/// Times are stored as "HH:MM", or "HH:MM:SS" when the seconds are not zero.
mod time_of_day {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        if time.second() == 0 && time.nanosecond() == 0 {
            serializer.collect_str(&time.format("%H:%M"))
        } else {
            serializer.collect_str(&time.format("%H:%M:%S%.f"))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid time '{}', expected HH:MM", raw))
        })
    }
}

/// Parse "HH:MM" (or "HH:MM:SS", with optional fractional seconds).
pub(crate) fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S%.f"))
        .ok()
}

/// Parse "YYYY-MM-DD".
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_appointment() -> Appointment {
        Appointment {
            id: "42".to_string(),
            title: "Checkup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            location: "Clinic A".to_string(),
            department: "General".to_string(),
            status: Status::Pending,
        }
    }

    // --- serialization ---

    #[test]
    fn serializes_with_string_fields() {
        let json = serde_json::to_value(make_test_appointment()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "title": "Checkup",
                "date": "2024-01-01",
                "startTime": "09:00",
                "endTime": "09:30",
                "location": "Clinic A",
                "department": "General",
                "status": "pending",
            })
        );
    }

    #[test]
    fn deserialize_tolerates_extra_and_missing_optional_fields() {
        let json = r#"{
            "id": "7",
            "title": "Dentist",
            "date": "2024-02-03",
            "startTime": "14:15:00",
            "endTime": "15:00",
            "color": "blue"
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.start_time, NaiveTime::from_hms_opt(14, 15, 0).unwrap());
        assert_eq!(appt.location, "");
        assert_eq!(appt.department, "");
        assert_eq!(appt.status, Status::Pending);
    }

    #[test]
    fn times_with_seconds_survive_a_round_trip() {
        let mut appt = make_test_appointment();
        appt.start_time = NaiveTime::from_hms_opt(9, 0, 30).unwrap();
        appt.end_time = NaiveTime::from_hms_milli_opt(9, 30, 45, 250).unwrap();

        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["startTime"], "09:00:30");
        assert_eq!(json["endTime"], "09:30:45.250");

        let back: Appointment = serde_json::from_value(json).unwrap();
        assert_eq!(back, appt);
    }

    #[test]
    fn deserialize_rejects_malformed_time() {
        let json = r#"{"id":"1","title":"x","date":"2024-01-01","startTime":"9am","endTime":"10:00"}"#;
        assert!(serde_json::from_str::<Appointment>(json).is_err());
    }

    // --- patch ---

    #[test]
    fn apply_patch_only_changes_given_fields() {
        let mut appt = make_test_appointment();
        appt.apply(AppointmentPatch {
            status: Some(Status::Completed),
            ..Default::default()
        });

        let mut expected = make_test_appointment();
        expected.status = Status::Completed;
        assert_eq!(appt, expected);
    }

    #[test]
    fn into_new_requires_title_date_and_times() {
        let patch = AppointmentPatch {
            title: Some("Checkup".to_string()),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            ..Default::default()
        };
        match patch.into_new() {
            Err(AppointmentError::MissingField(field)) => assert_eq!(field, "end time"),
            other => panic!("expected missing end time, got {:?}", other),
        }
    }

    #[test]
    fn into_new_defaults_optional_fields() {
        let patch = AppointmentPatch {
            title: Some("Checkup".to_string()),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            end_time: Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
            ..Default::default()
        };
        let new = patch.into_new().unwrap();
        assert_eq!(new.location, "");
        assert_eq!(new.status, Status::Pending);
    }

    // --- status ---

    #[test]
    fn status_keeps_unknown_values() {
        let status: Status = "rescheduled".parse().unwrap();
        assert_eq!(status, Status::Other("rescheduled".to_string()));
        assert_eq!(status.to_string(), "rescheduled");
        assert_eq!(status.tone(), Tone::Neutral);
    }

    #[test]
    fn status_label_capitalizes() {
        assert_eq!(Status::Pending.label(), "Pending");
        assert_eq!(Status::Missed.label(), "Missed");
        assert_eq!(Status::Other("on hold".to_string()).label(), "On hold");
        assert_eq!(Status::Other(String::new()).label(), "");
    }

    #[test]
    fn status_tones() {
        assert_eq!(Status::Completed.tone(), Tone::Success);
        assert_eq!(Status::Pending.tone(), Tone::Warning);
        assert_eq!(Status::Missed.tone(), Tone::Danger);
    }

    // --- filter ---

    #[test]
    fn filter_parses_all_and_statuses() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "missed".parse::<Filter>().unwrap(),
            Filter::Status(Status::Missed)
        );
    }

    #[test]
    fn filter_text_is_trimmed_and_lowercased() {
        assert_eq!(" Pending ".parse::<Filter>().unwrap(), Filter::Status(Status::Pending));
        assert_eq!("ALL".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "On Hold".parse::<Filter>().unwrap(),
            Filter::Status(Status::Other("on hold".to_string()))
        );
    }

    #[test]
    fn filter_matches_by_status() {
        let appt = make_test_appointment();
        assert!(Filter::All.matches(&appt));
        assert!(Filter::Status(Status::Pending).matches(&appt));
        assert!(!Filter::Status(Status::Completed).matches(&appt));
    }

    #[test]
    fn render_when_formats_range() {
        assert_eq!(make_test_appointment().render_when(), "2024-01-01 09:00 - 09:30");
    }
}
