//! TUI rendering traits for appointment types.
//!
//! Extension traits that add colored terminal rendering to
//! appointments-core types using owo_colors.

use appointments_core::{Appointment, Status, Tone};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to a status tone
fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Danger => text.red().to_string(),
        Tone::Neutral => text.dimmed().to_string(),
    }
}

impl Render for Status {
    fn render(&self) -> String {
        paint(self.tone(), &self.label())
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let mut lines = vec![format!("   {}", self.title.bold())];
        lines.push(format!("   {}", self.render_when()));
        if !self.location.is_empty() {
            lines.push(format!("   {} {}", "Location:".dimmed(), self.location));
        }
        if !self.department.is_empty() {
            lines.push(format!("   {} {}", "Department:".dimmed(), self.department));
        }
        lines.push(format!("   {} {}", "Status:".dimmed(), self.status.render()));
        lines.push(format!("   {} {}", "Id:".dimmed(), self.id.dimmed()));
        lines.join("\n")
    }
}

const HEADERS: [&str; 6] = ["Title", "Date & Time", "Location", "Department", "Status", "Id"];

/// Render appointments as an aligned table.
pub fn render_table(appointments: &[&Appointment]) -> String {
    if appointments.is_empty() {
        return "   No appointments".dimmed().to_string();
    }

    let rows: Vec<[String; 6]> = appointments
        .iter()
        .map(|a| {
            [
                a.title.clone(),
                a.render_when(),
                a.location.clone(),
                a.department.clone(),
                a.status.label(),
                a.id.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Pad before coloring so escape codes don't throw off alignment
    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![format!("   {}", header)];
    for (row, appointment) in rows.iter().zip(appointments) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| match i {
                4 => paint(appointment.status.tone(), &pad(cell, w)),
                5 => pad(cell, w).dimmed().to_string(),
                _ => pad(cell, w),
            })
            .collect();
        lines.push(format!("   {}", cells.join("  ").trim_end()));
    }

    lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
