//! Monitoring session
//!
//! Joins the monitor and dispatch tasks on the current thread. The
//! session ends when the sensor stream ends and dispatch has drained.

use embassy_futures::join::join;
use vigil_core::traits::{AlertTransport, MotionSensor, Notifier};
use vigil_hal::KeyValueStorage;

use crate::channels::Channels;
use crate::config::AppConfig;
use crate::tasks::{dispatch_task, monitor_task, DispatchReport, MonitorReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub monitor: MonitorReport,
    pub dispatch: DispatchReport,
}

pub async fn run_session<M, S, T, N>(
    sensor: &mut M,
    storage: &mut S,
    transport: &mut T,
    notifier: &mut N,
    config: &AppConfig,
) -> SessionReport
where
    M: MotionSensor,
    S: KeyValueStorage,
    T: AlertTransport,
    N: Notifier,
{
    let channels = Channels::new();
    let (monitor, dispatch) = join(
        monitor_task(sensor, config.detector, &channels),
        dispatch_task(storage, transport, notifier, &config.alert, &channels),
    )
    .await;
    SessionReport { monitor, dispatch }
}
