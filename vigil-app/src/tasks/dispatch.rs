//! Alert dispatch task
//!
//! Receives triggers, composes the alert from the persisted contacts and
//! location, posts it once and notifies the user of the result. Failures
//! are reported, never retried, and never touch the detector.

use tracing::{error, info, warn};
use vigil_core::alert::{AlertFailure, AlertOutcome, AlertRequest, TriggerSource};
use vigil_core::config::AlertConfig;
use vigil_core::traits::{AlertTransport, Notifier};
use vigil_hal::KeyValueStorage;
use vigil_protocol::MAX_BODY_SIZE;

use crate::channels::{Channels, DispatchRequest};
use crate::storage::{load_contacts, load_location};

/// What one dispatch session did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: u32,
    pub failed: u32,
}

/// Compose and post one alert
pub async fn dispatch_alert<S, T>(
    storage: &mut S,
    transport: &mut T,
    config: &AlertConfig,
    source: TriggerSource,
) -> AlertOutcome
where
    S: KeyValueStorage,
    T: AlertTransport,
{
    let contacts = load_contacts(storage).await;
    let location = load_location(storage).await;

    if location.is_none() {
        warn!(source = source.as_str(), "No known location for alert");
    }

    let request =
        match AlertRequest::compose(source, &config.username, &contacts, location.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                error!(source = source.as_str(), error = ?e, "Cannot compose alert");
                return AlertOutcome::Failed(AlertFailure::Compose(e));
            }
        };

    let mut body = [0u8; MAX_BODY_SIZE];
    let len = match request.encode(&mut body) {
        Ok(len) => len,
        Err(e) => {
            error!(error = ?e, "Cannot encode alert");
            return AlertOutcome::Failed(AlertFailure::Compose(e));
        }
    };

    info!(
        source = source.as_str(),
        contacts = request.emergency_contacts.len(),
        "Sending emergency alert"
    );

    let outcome = AlertOutcome::from(transport.post(&config.endpoint, &body[..len]).await);
    if let AlertOutcome::Failed(failure) = outcome {
        error!(?failure, "Emergency alert failed");
    }
    outcome
}

/// Dispatch task
///
/// Handles requests until [`DispatchRequest::Shutdown`].
pub async fn dispatch_task<S, T, N>(
    storage: &mut S,
    transport: &mut T,
    notifier: &mut N,
    config: &AlertConfig,
    channels: &Channels,
) -> DispatchReport
where
    S: KeyValueStorage,
    T: AlertTransport,
    N: Notifier,
{
    info!("Dispatch task started");
    let mut report = DispatchReport::default();

    loop {
        let source = match channels.dispatch.receive().await {
            DispatchRequest::Trigger(source) => source,
            DispatchRequest::Shutdown => break,
        };

        let outcome = dispatch_alert(storage, transport, config, source).await;
        notifier.notify(&outcome);

        if outcome.is_delivered() {
            report.delivered += 1;
        } else {
            report.failed += 1;
        }

        // The monitor may already be gone; the outcome is only informational
        let _ = channels.outcomes.try_send(outcome);
    }

    info!(
        delivered = report.delivered,
        failed = report.failed,
        "Dispatch task finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::DryRunTransport;
    use crate::storage::{save_contacts, save_location, MemoryStorage};
    use embassy_futures::block_on;
    use vigil_core::alert::AlertError;
    use vigil_core::contacts::{ContactBook, EmergencyContact};
    use vigil_core::location::LastKnownLocation;
    use vigil_core::traits::TransportError;

    #[derive(Default)]
    struct Recorded(Vec<AlertOutcome>);

    impl Notifier for Recorded {
        fn notify(&mut self, outcome: &AlertOutcome) {
            self.0.push(*outcome);
        }
    }

    fn storage_with(contacts: usize, location: bool) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        block_on(async {
            let mut book = ContactBook::new();
            for i in 0..contacts {
                book.add(EmergencyContact::new("Kim", &format!("kim{i}@example.com"), "555").unwrap())
                    .unwrap();
            }
            save_contacts(&mut storage, &book).await.unwrap();
            if location {
                let here = LastKnownLocation::new(40.7128, -74.006, 10.0).unwrap();
                save_location(&mut storage, &here).await.unwrap();
            }
        });
        storage
    }

    #[test]
    fn test_posts_backend_body() {
        let mut storage = storage_with(2, true);
        let mut transport = DryRunTransport::new();
        let config = AlertConfig::default();

        let outcome = block_on(dispatch_alert(
            &mut storage,
            &mut transport,
            &config,
            TriggerSource::Shake,
        ));

        assert_eq!(outcome, AlertOutcome::Delivered);
        let sent = &transport.sent()[0];
        assert_eq!(sent.endpoint, config.endpoint.as_str());
        assert_eq!(
            sent.body,
            "{\"username\":\"User\",\"emergency_contacts\":[\"kim0@example.com\",\"kim1@example.com\"],\
             \"user_message\":\"Emergency location data: Latitude 40.712800, Longitude -74.006000, Accuracy 10.0\"}"
        );
    }

    #[test]
    fn test_no_contacts_is_failure_without_post() {
        let mut storage = storage_with(0, true);
        let mut transport = DryRunTransport::new();

        let outcome = block_on(dispatch_alert(
            &mut storage,
            &mut transport,
            &AlertConfig::default(),
            TriggerSource::Shake,
        ));

        assert_eq!(
            outcome,
            AlertOutcome::Failed(AlertFailure::Compose(AlertError::NoContacts))
        );
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_manual_without_location_fails() {
        let mut storage = storage_with(1, false);
        let mut transport = DryRunTransport::new();

        let outcome = block_on(dispatch_alert(
            &mut storage,
            &mut transport,
            &AlertConfig::default(),
            TriggerSource::Manual,
        ));
        assert_eq!(
            outcome,
            AlertOutcome::Failed(AlertFailure::Compose(AlertError::NoLocation))
        );
    }

    #[test]
    fn test_shake_without_location_sends() {
        let mut storage = storage_with(1, false);
        let mut transport = DryRunTransport::new();

        let outcome = block_on(dispatch_alert(
            &mut storage,
            &mut transport,
            &AlertConfig::default(),
            TriggerSource::Shake,
        ));
        assert!(outcome.is_delivered());
        assert!(transport.sent()[0].body.contains("location unavailable"));
    }

    #[test]
    fn test_task_notifies_each_request() {
        let mut storage = storage_with(1, true);
        let mut transport = DryRunTransport::failing(TransportError::Unreachable);
        let mut notifier = Recorded::default();
        let channels = Channels::new();
        let config = AlertConfig::default();

        channels
            .dispatch
            .try_send(DispatchRequest::Trigger(TriggerSource::Shake))
            .unwrap();
        channels
            .dispatch
            .try_send(DispatchRequest::Trigger(TriggerSource::Manual))
            .unwrap();
        channels.dispatch.try_send(DispatchRequest::Shutdown).unwrap();

        let report = block_on(dispatch_task(
            &mut storage,
            &mut transport,
            &mut notifier,
            &config,
            &channels,
        ));

        assert_eq!(report, DispatchReport { delivered: 0, failed: 2 });
        assert_eq!(
            notifier.0,
            [AlertOutcome::Failed(AlertFailure::Transport(TransportError::Unreachable)); 2]
        );
        // No retry: nothing was recorded as sent
        assert!(transport.sent().is_empty());
        assert_eq!(
            channels.outcomes.try_receive().ok(),
            Some(AlertOutcome::Failed(AlertFailure::Transport(TransportError::Unreachable)))
        );
    }
}
