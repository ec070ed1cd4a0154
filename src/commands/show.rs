use anyhow::Result;
use appointments_core::{AppointmentBook, KeyValueStore};

use crate::render::Render;

pub fn run<S: KeyValueStore>(book: &AppointmentBook<S>, id: &str) -> Result<()> {
    let Some(appointment) = book.get(id) else {
        anyhow::bail!("Appointment '{}' not found. Run `appt list` to see ids.", id);
    };

    println!("{}", appointment.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appointments_core::MemoryStore;
    use appointments_core::storage::APPOINTMENTS_KEY;

    const STORED: &str = r#"[
        {"id":"42","title":"Checkup","date":"2024-01-01","startTime":"09:00","endTime":"09:30",
         "location":"Clinic A","department":"General","status":"pending"}
    ]"#;

    #[test]
    fn shows_known_appointment() {
        let book = AppointmentBook::open(MemoryStore::with_value(APPOINTMENTS_KEY, STORED));
        run(&book, "42").unwrap();
    }

    #[test]
    fn unknown_id_is_an_error() {
        let book = AppointmentBook::open(MemoryStore::with_value(APPOINTMENTS_KEY, STORED));
        let err = run(&book, "7").unwrap_err();
        assert!(err.to_string().contains("'7' not found"));
    }
}
