//! Main app runner

use std::process::ExitCode;
use std::time::Duration;

use crate::application::first_device;
use crate::application::ports::{DeviceDiscovery, SettingsStore};
use crate::application::{CommandOutcome, CommandSession, SaveError};
use crate::domain::settings::Settings;
use crate::infrastructure::{DnsSdDiscovery, FsSignalStore, HttpDeviceClient, TomlSettingsStore};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// How long the implicit first-device lookup may browse before giving up.
/// `list` is not bounded by this; it browses until interrupted.
const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the CLI
pub async fn run(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new(cli.verbose);

    let first = cli.commands.first().map(String::as_str).unwrap_or_default();

    // `list` only browses; it touches neither settings nor the store
    if first == "list" {
        return run_list(&DnsSdDiscovery::new(), &presenter).await;
    }

    // Reject a bare `save` before any settings or network I/O
    if first == "save" && cli.commands.len() < 2 {
        presenter.error("save requires a signal name, e.g. `irkit save tv power`");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let settings_store = TomlSettingsStore::new();
    let mut settings = match settings_store.load().await {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let device = match settings.device.clone() {
        Some(device) => device,
        None => match discover_device(&mut presenter).await {
            Some(device) => {
                settings.device = Some(device.clone());
                device
            }
            None => {
                presenter.error("No IRKit found on the local network");
                // Leave the device unset so the next run discovers again
                persist(&settings_store, &settings, &presenter).await;
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };
    presenter.debug(&format!("Using device {}", device));

    let client = HttpDeviceClient::new(&device);
    let mut session = CommandSession::new(FsSignalStore::new(), client);
    session.set_scope(&settings.scope);

    let code = if first == "save" {
        match session.save(&cli.commands[1..]).await {
            Ok(path) => {
                presenter.info(&format!("Saved to {}", path.display()));
                EXIT_SUCCESS
            }
            Err(e @ (SaveError::NoData | SaveError::Device(_))) => {
                // A failed save is reported but does not fail the process
                presenter.error(&e.to_string());
                EXIT_SUCCESS
            }
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        match session.execute(&cli.commands).await {
            Ok(outcomes) => {
                present_outcomes(&outcomes, &presenter);
                EXIT_SUCCESS
            }
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    // Scope changes and a freshly discovered device survive to the next run
    // even when individual commands were not found or a save failed.
    settings.scope = session.scope();
    if !persist(&settings_store, &settings, &presenter).await {
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(code)
}

/// Enumerate devices to stdout as they are discovered
async fn run_list<D: DeviceDiscovery>(discovery: &D, presenter: &Presenter) -> ExitCode {
    let mut stream = match discovery.browse().await {
        Ok(stream) => stream,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    loop {
        match stream.next_device().await {
            Ok(Some(name)) => presenter.output(&name),
            Ok(None) => return ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }
}

/// Browse for the first device, bounded by `DISCOVERY_TIMEOUT`.
///
/// The timeout drops the browse stream, which kills the underlying browser.
async fn discover_device(presenter: &mut Presenter) -> Option<String> {
    let discovery = DnsSdDiscovery::new();

    if presenter.shows_info() {
        presenter.info("Looking for IRKit...");
    } else {
        presenter.start_spinner("Looking for IRKit...");
    }

    match tokio::time::timeout(DISCOVERY_TIMEOUT, first_device(&discovery)).await {
        Ok(Ok(Some(name))) => {
            presenter.spinner_success(&format!("Found {}", name));
            Some(name)
        }
        Ok(Ok(None)) => {
            presenter.stop_spinner();
            None
        }
        Ok(Err(e)) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            None
        }
        Err(_) => {
            presenter.stop_spinner();
            None
        }
    }
}

/// Report what `execute` did with each token
fn present_outcomes(outcomes: &[CommandOutcome], presenter: &Presenter) {
    for outcome in outcomes {
        if let Some(sent) = &outcome.sent {
            if sent.times == 1 {
                presenter.info(&format!("Sent {}", sent.path.display()));
            } else {
                presenter.info(&format!("Sent {} x{}", sent.path.display(), sent.times));
            }
        }
        if let Some(scope) = &outcome.entered {
            presenter.info(&format!("scope={}", scope.join("/")));
        }
        if !outcome.matched() {
            presenter.error(&format!("Command \"{}\" not found", outcome.token));
        }
    }
}

/// Save settings, reporting failure; returns whether the write succeeded
async fn persist<S: SettingsStore>(store: &S, settings: &Settings, presenter: &Presenter) -> bool {
    match store.save(settings).await {
        Ok(()) => true,
        Err(e) => {
            presenter.error(&e.to_string());
            false
        }
    }
}
