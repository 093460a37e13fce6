//! User notification trait

use crate::alert::AlertOutcome;

/// Shows the user how an alert dispatch ended
pub trait Notifier {
    fn notify(&mut self, outcome: &AlertOutcome);
}
