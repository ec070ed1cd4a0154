//! Core types for the appointments tracker.
//!
//! - `appointment`: the record, its patch type, status and filter
//! - `form`: validation of raw text input into a patch
//! - `storage`: best-effort persistence of the whole collection
//! - `book`: the appointment book that owns and mutates the collection
//! - `settings`: global configuration

pub mod appointment;
pub mod book;
pub mod error;
pub mod form;
pub mod settings;
pub mod storage;

pub use appointment::{Appointment, AppointmentPatch, Filter, NewAppointment, Status, Tone};
pub use book::{AppointmentBook, IdGenerator, Notice, Notifier, SequentialIds, SilentNotifier, UuidIds};
pub use error::{AppointmentError, AppointmentResult};
pub use form::FormInput;
pub use settings::Settings;
pub use storage::{AppointmentStore, FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
