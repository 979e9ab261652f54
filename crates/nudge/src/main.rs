//! Terminal host for Nudge update prompts.
//!
//! Reads an update config from a JSON file, decides whether this build is out
//! of date and shows the resulting prompt in the terminal.

mod cli;
mod error;
mod logging;
mod settings;
mod terminal_host;

use std::collections::HashMap;
use std::process::ExitCode;

use log::{error, info};
use nudge_core::UpdateConfig;
use nudge_platform::AppPaths;
use nudge_present::ui_channel;

use crate::cli::{Args, USAGE};
use crate::error::AppError;
use crate::settings::HostSettings;
use crate::terminal_host::TerminalHost;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(message)) => {
            eprintln!("{message}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("nudge: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse(std::env::args().skip(1))?;

    let paths = AppPaths::new().ok();
    if let Some(paths) = &paths
        && let Err(e) = paths.ensure_dirs()
    {
        eprintln!("nudge: could not create application directories: {e}");
    }
    let settings = paths.as_ref().map(HostSettings::load).unwrap_or_default();
    if let Some(paths) = &paths
        && !paths.settings_file().exists()
    {
        let _ = settings.save(paths);
    }

    let log_path = paths.as_ref().map(AppPaths::log_file);
    logging::init_logging(
        log_path.as_deref(),
        args.debug || settings.debug_logging,
        settings.max_log_size_bytes,
    );

    let config = load_config(&args)?;
    let current_version = args
        .current_version
        .or(settings.current_version_override)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let platform = args.store.unwrap_or(settings.store_platform);
    info!(
        "Checking {current_version} against {} ({platform:?})",
        config.latest_version()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()?;

    let (handle, ui_loop) = ui_channel(TerminalHost::stdio());
    let check = runtime.spawn(async move {
        handle
            .check(&config, &current_version, platform, None)
            .await
    });

    // This thread owns the terminal; it serves presentation jobs until the
    // check drops its handle.
    let mut host = ui_loop.run();
    let outcome = runtime.block_on(check)?;
    info!("Update check finished: {outcome:?}");

    host.interact()?;
    Ok(())
}

fn load_config(args: &Args) -> Result<UpdateConfig, AppError> {
    let content =
        std::fs::read_to_string(&args.config_path).map_err(|source| AppError::ReadConfig {
            path: args.config_path.clone(),
            source,
        })?;

    if args.remote {
        let values: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(UpdateConfig::from_remote_values(&values)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}
