use appointments_core::{Notice, Notifier};
use owo_colors::OwoColorize;

/// Prints notices to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Deleted { .. } => {
                println!("{}", "  Appointment deleted successfully!".green());
            }
        }
    }
}
