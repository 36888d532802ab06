// Terminal feedback: a spinner on stderr while the list is being fetched.
// indicatif hides it on its own when stderr is not a terminal, so piping
// the output somewhere stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a ticking spinner with an initial message.
pub fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
