//! The appointment book: owner of the in-memory collection.
//!
//! Every mutation is followed by a save of the full collection, so memory and
//! storage agree at the end of each call (unless storage itself failed, which
//! is logged by the store and otherwise ignored).

use tracing::debug;

use crate::appointment::{Appointment, AppointmentPatch, Filter, NewAppointment};
use crate::error::AppointmentResult;
use crate::storage::{AppointmentStore, KeyValueStore};

/// Outcomes announced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Deleted { id: String },
}

/// Receives notices after operations complete.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Drops every notice.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Source of fresh appointment ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// "1", "2", "3", ... Predictable ids for tests and demos.
#[derive(Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn starting_after(last: u64) -> Self {
        SequentialIds { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

pub struct AppointmentBook<S> {
    appointments: Vec<Appointment>,
    store: AppointmentStore<S>,
    ids: Box<dyn IdGenerator>,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> AppointmentBook<S> {
    /// Load the collection from `backend`. This is the only read from storage.
    pub fn open(backend: S) -> Self {
        let store = AppointmentStore::new(backend);
        let appointments = store.load();

        AppointmentBook {
            appointments,
            store,
            ids: Box::new(UuidIds),
            notifier: Box::new(SilentNotifier),
        }
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn store(&self) -> &AppointmentStore<S> {
        &self.store
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Appointments matching `filter`, in insertion order.
    pub fn list(&self, filter: &Filter) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| filter.matches(a))
            .collect()
    }

    /// Edit the record with `editing_id` if it exists, otherwise create a new
    /// one from `patch`.
    ///
    /// Creating requires a complete patch; an incomplete one is rejected
    /// before anything changes.
    pub fn upsert(
        &mut self,
        patch: AppointmentPatch,
        editing_id: Option<&str>,
    ) -> AppointmentResult<&[Appointment]> {
        if let Some(id) = editing_id
            && self.get(id).is_some()
        {
            self.update(id, patch);
            return Ok(&self.appointments);
        }

        let new = patch.into_new()?;
        self.create(new);
        Ok(&self.appointments)
    }

    /// Append a new appointment with a freshly generated id.
    pub fn create(&mut self, new: NewAppointment) -> &Appointment {
        let id = self.fresh_id();
        debug!(%id, title = %new.title, "creating appointment");

        self.appointments.push(new.with_id(id));
        self.store.save(&self.appointments);

        let last = self.appointments.len() - 1;
        &self.appointments[last]
    }

    /// Merge `patch` into the appointment with `id`, keeping its position.
    /// Returns `None` (and changes nothing) if there is no such appointment.
    pub fn update(&mut self, id: &str, patch: AppointmentPatch) -> Option<&Appointment> {
        let index = self.appointments.iter().position(|a| a.id == id)?;
        debug!(%id, "updating appointment");

        self.appointments[index].apply(patch);
        self.store.save(&self.appointments);
        Some(&self.appointments[index])
    }

    /// Remove the appointment with `id`. Unknown ids leave the collection as
    /// it was. The notifier hears about the deletion either way.
    pub fn remove(&mut self, id: &str) -> &[Appointment] {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        debug!(%id, removed = before - self.appointments.len(), "removing appointment");

        self.store.save(&self.appointments);
        self.notifier.notify(&Notice::Deleted { id: id.to_string() });
        &self.appointments
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
