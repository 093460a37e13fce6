//! Motion monitoring task
//!
//! Feeds every sample from the sensor through the shake detector. On a
//! trigger it hands a request to the dispatch task without waiting for
//! it: a full channel drops the trigger with a warning.

use embassy_futures::yield_now;
use embassy_sync::channel::TrySendError;
use tracing::{debug, info, warn};
use vigil_core::alert::{AlertOutcome, TriggerSource};
use vigil_core::config::DetectorConfig;
use vigil_core::motion::{SampleOutcome, ShakeDetector};
use vigil_core::state::{Event, State};
use vigil_core::traits::MotionSensor;

use crate::channels::{Channels, DispatchRequest};

/// What one monitoring session saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorReport {
    /// Samples read from the sensor
    pub samples: u32,
    /// Samples the debounce window discarded
    pub debounced: u32,
    /// Sensor reads that failed
    pub sensor_errors: u32,
    /// Triggers handed to dispatch
    pub triggers: u32,
    /// Triggers dropped because dispatch was backed up
    pub dropped: u32,
    /// Queued alerts with no result yet when the stream ended
    pub in_flight: u8,
}

/// Monitor task
///
/// Runs until the sensor stream ends, then detaches the detector and
/// tells the dispatch task to shut down.
pub async fn monitor_task<M: MotionSensor>(
    sensor: &mut M,
    config: DetectorConfig,
    channels: &Channels,
) -> MonitorReport {
    info!("Monitor task started");

    let mut detector = ShakeDetector::new(config);
    let mut state = State::Detached.transition(Event::Attach);
    let mut report = MonitorReport::default();

    loop {
        // Fold in whatever dispatch has finished since the last sample
        while let Ok(outcome) = channels.outcomes.try_receive() {
            let event = match outcome {
                AlertOutcome::Delivered => Event::AlertDelivered,
                AlertOutcome::Failed(_) => Event::AlertFailed,
            };
            state = state.transition(event);
        }

        let sample = match sensor.next_sample().await {
            Ok(Some(sample)) => sample,
            Ok(None) => break,
            Err(e) => {
                warn!(error = ?e, "Sensor read failed, skipping");
                report.sensor_errors += 1;
                continue;
            }
        };
        report.samples += 1;

        if !state.accepts_samples() {
            continue;
        }

        match detector.process(&sample) {
            SampleOutcome::Triggered(trigger) => {
                info!(timestamp_ms = trigger.timestamp_ms, "Shake detected");
                match channels
                    .dispatch
                    .try_send(DispatchRequest::Trigger(TriggerSource::Shake))
                {
                    Ok(()) => {
                        report.triggers += 1;
                        state = state.transition(Event::AlertQueued(TriggerSource::Shake));
                    }
                    Err(TrySendError::Full(_)) => {
                        warn!("Dispatch queue full, shake alert dropped");
                        report.dropped += 1;
                    }
                }
            }
            SampleOutcome::Debounced => report.debounced += 1,
            SampleOutcome::Counted(n) => debug!(count = n, "High-magnitude sample"),
            SampleOutcome::Reset | SampleOutcome::Detached => {}
        }

        // Give dispatch a turn between samples
        yield_now().await;
    }

    report.in_flight = state.pending_alerts();
    detector.detach();
    state = state.transition(Event::Detach);
    debug!(?state, "Detector detached");

    channels.dispatch.send(DispatchRequest::Shutdown).await;

    info!(
        samples = report.samples,
        triggers = report.triggers,
        dropped = report.dropped,
        in_flight = report.in_flight,
        sensor_errors = report.sensor_errors,
        "Monitor task finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use vigil_core::motion::AccelerationSample;
    use vigil_core::traits::SensorError;

    /// Sensor that replays a fixed script
    struct Script(VecDeque<Result<AccelerationSample, SensorError>>);

    impl Script {
        fn shakes(count: usize, start_ms: u64) -> Vec<Result<AccelerationSample, SensorError>> {
            (0..count as u64)
                .map(|i| Ok(AccelerationSample::new(0.0, 0.0, 2.0, start_ms + i * 250)))
                .collect()
        }
    }

    impl MotionSensor for Script {
        async fn next_sample(&mut self) -> Result<Option<AccelerationSample>, SensorError> {
            self.0.pop_front().transpose()
        }
    }

    fn drain(channels: &Channels) -> Vec<DispatchRequest> {
        std::iter::from_fn(|| channels.dispatch.try_receive().ok()).collect()
    }

    #[test]
    fn test_trigger_queues_request_and_shutdown() {
        let channels = Channels::new();
        let mut sensor = Script(Script::shakes(5, 0).into());

        let report = embassy_futures::block_on(monitor_task(
            &mut sensor,
            DetectorConfig::default(),
            &channels,
        ));

        assert_eq!(report.samples, 5);
        assert_eq!(report.triggers, 1);
        // Nobody answered the queued alert
        assert_eq!(report.in_flight, 1);
        assert_eq!(
            drain(&channels),
            [
                DispatchRequest::Trigger(TriggerSource::Shake),
                DispatchRequest::Shutdown
            ]
        );
    }

    #[test]
    fn test_sensor_errors_are_skipped() {
        let channels = Channels::new();
        let mut script = Script::shakes(5, 0);
        script.insert(2, Err(SensorError::Malformed));
        let mut sensor = Script(script.into());

        let report = embassy_futures::block_on(monitor_task(
            &mut sensor,
            DetectorConfig::default(),
            &channels,
        ));

        assert_eq!(report.sensor_errors, 1);
        assert_eq!(report.samples, 5);
        assert_eq!(report.triggers, 1);
    }

    #[test]
    fn test_full_queue_drops_trigger_without_blocking() {
        let channels = Channels::new();
        let config = DetectorConfig {
            trigger_count: 1,
            ..DetectorConfig::default()
        };
        // Every sample triggers; nobody drains the queue until the end
        let mut sensor = Script(Script::shakes(6, 0).into());

        let monitor = monitor_task(&mut sensor, config, &channels);
        let drain_after = async {
            // Let the monitor fill the queue, then consume it so Shutdown fits
            for _ in 0..8 {
                yield_now().await;
            }
            let mut seen = Vec::new();
            loop {
                let request = channels.dispatch.receive().await;
                seen.push(request);
                if request == DispatchRequest::Shutdown {
                    break seen;
                }
            }
        };
        let (report, seen) = embassy_futures::block_on(embassy_futures::join::join(monitor, drain_after));

        assert_eq!(report.triggers as usize, crate::channels::DISPATCH_CHANNEL_SIZE);
        assert_eq!(report.dropped, 2);
        assert_eq!(seen.len(), crate::channels::DISPATCH_CHANNEL_SIZE + 1);
    }

    #[test]
    fn test_debounced_samples_counted() {
        let channels = Channels::new();
        let mut sensor = Script(
            vec![
                Ok(AccelerationSample::new(0.0, 0.0, 1.0, 0)),
                Ok(AccelerationSample::new(0.0, 0.0, 1.0, 50)),
                Ok(AccelerationSample::new(0.0, 0.0, 1.0, 100)),
            ]
            .into(),
        );

        let report = embassy_futures::block_on(monitor_task(
            &mut sensor,
            DetectorConfig::default(),
            &channels,
        ));
        assert_eq!(report.debounced, 2);
        assert_eq!(report.triggers, 0);
        assert_eq!(drain(&channels), [DispatchRequest::Shutdown]);
    }
}
