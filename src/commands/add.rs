use anyhow::Result;
use appointments_core::{AppointmentBook, FormInput, KeyValueStore};
use owo_colors::OwoColorize;

use crate::prompt;
use crate::render::Render;

pub fn run<S: KeyValueStore>(book: &mut AppointmentBook<S>, input: FormInput) -> Result<()> {
    let interactive = prompt::is_incomplete(&input);

    let input = if interactive {
        prompt::fill_new(input)?
    } else {
        input
    };

    let patch = input.validate()?;
    let appointments = book.upsert(patch, None)?;
    let Some(created) = appointments.last() else {
        anyhow::bail!("Appointment was not created");
    };

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", created.title).green());
    println!("{}", created.render());

    Ok(())
}
