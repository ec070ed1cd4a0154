use anyhow::Result;
use appointments_core::{AppointmentBook, FormInput, KeyValueStore};
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

pub fn run<S: KeyValueStore>(book: &mut AppointmentBook<S>, id: &str, input: FormInput) -> Result<()> {
    let Some(current) = book.get(id) else {
        anyhow::bail!("Appointment '{}' not found. Run `appt list` to see ids.", id);
    };

    let mut patch = input.validate()?;
    if patch.is_empty() {
        patch = prompt::edit_existing(current)?.validate()?;
        println!();
    }

    book.upsert(patch, Some(id))?;

    let Some(updated) = book.get(id) else {
        anyhow::bail!("Appointment '{}' disappeared while editing", id);
    };
    println!("{}", format!("  Updated: {}", updated.title).yellow());
    println!("{}", updated.render());

    Ok(())
}
