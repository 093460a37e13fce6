//! Console notifier
//!
//! Prints the user-visible notification to stdout. The log gets the
//! failure reason as well.

use std::io::Write;

use tracing::{info, warn};
use vigil_core::alert::AlertOutcome;
use vigil_core::traits::Notifier;

/// Writes notifications to an output stream (stdout by default)
pub struct ConsoleNotifier<W = std::io::Stdout> {
    out: W,
}

impl ConsoleNotifier {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, outcome: &AlertOutcome) {
        match outcome.reason() {
            None => info!("{}", outcome.notification()),
            Some(reason) => warn!(reason, "{}", outcome.notification()),
        }
        if let Err(e) = writeln!(self.out, "{}", outcome.notification()) {
            warn!(error = %e, "Could not write notification");
        }
    }
}
