use anyhow::Result;
use appointments_core::{AppointmentBook, KeyValueStore};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(book: &mut AppointmentBook<S>, id: &str, yes: bool) -> Result<()> {
    let Some(appointment) = book.get(id) else {
        anyhow::bail!("Appointment '{}' not found. Run `appt list` to see ids.", id);
    };

    if !yes {
        println!("   {} {}", appointment.title.bold(), appointment.render_when().dimmed());
        let confirmed = Confirm::new()
            .with_prompt("  Are you sure you want to delete this appointment?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    // The notifier reports the outcome
    book.remove(id);
    Ok(())
}
