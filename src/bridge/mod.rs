//! The two operations exposed on the command line and their JSON envelopes

mod conversation;
mod installation;
mod output;

pub use conversation::*;
pub use installation::*;
pub use output::*;

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

/// Spinner drawn on stderr, hidden when stderr is not a terminal
pub fn progress_spinner() -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner
}
