//! Async tasks
//!
//! Each task is a plain async fn generic over its collaborators. The
//! runtime joins them on one thread with `embassy_futures`.

pub mod dispatch;
pub mod location;
pub mod motion;

pub use dispatch::{dispatch_alert, dispatch_task, DispatchReport};
pub use location::location_task;
pub use motion::{monitor_task, MonitorReport};
