//! Command execution
//!
//! Each command runs to completion on the current thread. Output meant
//! for the user goes to the given writer; diagnostics go to the log.

use std::io::Write;

use anyhow::{bail, Context, Result};
use embassy_futures::block_on;
use tracing::info;
use vigil_core::alert::TriggerSource;
use vigil_core::contacts::EmergencyContact;
use vigil_core::location::LastKnownLocation;
use vigil_core::traits::{AlertTransport, Notifier};
use vigil_hal::KeyValueStorage;

use crate::cli::{Cli, Commands, ConfigCommand, ContactsCommand, LocationCommand, MonitorArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::platform::{ConsoleNotifier, DryRunTransport, FixedLocation, TraceSensor};
use crate::session::{run_session, SessionReport};
use crate::storage::{load_contacts, load_location, save_contacts, save_location, FileStorage};
use crate::tasks::{dispatch_alert, location_task};

/// Run a parsed command line
pub fn execute(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| config.storage.data_dir.clone());
    let open_storage = || {
        FileStorage::open(&data_dir)
            .with_context(|| format!("cannot open data directory {}", data_dir.display()))
    };
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Monitor(args) => {
            monitor(&config, &mut open_storage()?, &args)?;
        }
        Commands::Contacts(cmd) => contacts(&mut open_storage()?, cmd, &mut out)?,
        Commands::Location(cmd) => location(&mut open_storage()?, cmd, &mut out)?,
        Commands::Alert => {
            let mut transport = DryRunTransport::new();
            let mut notifier = ConsoleNotifier::stdout();
            alert(&config, &mut open_storage()?, &mut transport, &mut notifier)?;
        }
        Commands::Config(ConfigCommand::Check) => config_check(&config, &mut out)?,
    }

    Ok(())
}

/// Replay a trace through a full monitoring session
pub fn monitor<S: KeyValueStorage>(
    config: &AppConfig,
    storage: &mut S,
    args: &MonitorArgs,
) -> Result<SessionReport> {
    let mut sensor = TraceSensor::open(&args.trace)?;
    let mut transport = DryRunTransport::new();
    let mut notifier = ConsoleNotifier::stdout();

    let report = block_on(async {
        if let Some((lat, lon, accuracy)) = args.fix.values() {
            let mut provider = FixedLocation::new(lat, lon, accuracy)
                .map_err(|e| anyhow::anyhow!("invalid position fix: {e}"))?;
            location_task(&mut provider, storage).await;
        }
        Ok::<_, anyhow::Error>(
            run_session(&mut sensor, storage, &mut transport, &mut notifier, config).await,
        )
    })?;

    info!(
        samples = report.monitor.samples,
        triggers = report.monitor.triggers,
        delivered = report.dispatch.delivered,
        failed = report.dispatch.failed,
        "Session finished"
    );
    Ok(report)
}

/// Send a manual alert
pub fn alert<S, T, N>(
    config: &AppConfig,
    storage: &mut S,
    transport: &mut T,
    notifier: &mut N,
) -> Result<()>
where
    S: KeyValueStorage,
    T: AlertTransport,
    N: Notifier,
{
    let outcome = block_on(dispatch_alert(
        storage,
        transport,
        &config.alert,
        TriggerSource::Manual,
    ));
    notifier.notify(&outcome);

    match outcome.reason() {
        None => Ok(()),
        Some(reason) => bail!("emergency alert not sent: {reason}"),
    }
}

pub fn contacts<S, W>(storage: &mut S, cmd: ContactsCommand, out: &mut W) -> Result<()>
where
    S: KeyValueStorage,
    W: Write,
{
    block_on(async {
        let mut book = load_contacts(storage).await;
        match cmd {
            ContactsCommand::Add { name, email, phone } => {
                let contact =
                    EmergencyContact::new(&name, &email, &phone).map_err(AppError::from)?;
                let index = book.add(contact).map_err(AppError::from)?;
                save_contacts(storage, &book).await?;
                writeln!(out, "Added contact {index}: {}", name.trim())?;
            }
            ContactsCommand::Remove { index } => {
                let removed = book.remove(index).map_err(AppError::from)?;
                save_contacts(storage, &book).await?;
                writeln!(out, "Removed contact {index}: {}", removed.name)?;
            }
            ContactsCommand::List => {
                if book.is_empty() {
                    writeln!(out, "No emergency contacts")?;
                }
                for (i, c) in book.iter().enumerate() {
                    writeln!(out, "{i}: {} <{}> {}", c.name, c.email, c.phone_number)?;
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

pub fn location<S, W>(storage: &mut S, cmd: LocationCommand, out: &mut W) -> Result<()>
where
    S: KeyValueStorage,
    W: Write,
{
    block_on(async {
        match cmd {
            LocationCommand::Set { lat, lon, accuracy } => {
                let fix = LastKnownLocation::new(lat, lon, accuracy).map_err(AppError::from)?;
                save_location(storage, &fix).await?;
                writeln!(out, "Location saved")?;
            }
            LocationCommand::Show => match load_location(storage).await {
                Some(loc) => writeln!(
                    out,
                    "Latitude {:.6}, Longitude {:.6}, Accuracy {:.1} m",
                    loc.latitude, loc.longitude, loc.accuracy
                )?,
                None => writeln!(out, "Location not available")?,
            },
        }
        Ok::<(), anyhow::Error>(())
    })
}

pub fn config_check<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let d = &config.detector;
    writeln!(out, "Configuration OK")?;
    writeln!(
        out,
        "detector: interval {} ms, threshold {} g, trigger count {}",
        d.sampling_interval_ms, d.magnitude_threshold, d.trigger_count
    )?;
    writeln!(
        out,
        "alert: username {}, endpoint {}",
        config.alert.username, config.alert.endpoint
    )?;
    writeln!(out, "storage: {}", config.storage.data_dir.display())?;
    Ok(())
}
