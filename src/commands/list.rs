use anyhow::Result;
use appointments_core::{AppointmentBook, Filter, KeyValueStore};
use owo_colors::OwoColorize;

use crate::render::render_table;

/// The `--filter` argument if given, otherwise the configured default.
pub fn resolve_filter(arg: Option<&str>, default: &Filter) -> Filter {
    match arg {
        Some(text) => Filter::from(text.to_string()),
        None => default.clone(),
    }
}

pub fn run<S: KeyValueStore>(book: &AppointmentBook<S>, filter: &Filter) -> Result<()> {
    let appointments = book.list(filter);

    if *filter != Filter::All {
        println!("{}", format!("   Showing {} appointments", filter).dimmed());
    }
    println!("{}", render_table(&appointments));

    Ok(())
}
