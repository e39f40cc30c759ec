use anyhow::{Context, Result};
use privilege_reducer::config::{load_config, validate_config, Config};
use privilege_reducer::core::VERSION;
use privilege_reducer::logging::init_logging;
use tracing::info;
#[cfg(windows)]
use tracing::debug;

fn main() -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    validate_config(&config)?;
    init_logging(&config.logging)?;

    info!("Starting privilege-reducer v{}", VERSION);
    run(&config)
}

#[cfg(windows)]
fn run(config: &Config) -> Result<()> {
    use privilege_reducer::core::types::names;
    use privilege_reducer::{console, report, PrivilegeReducer};
    use std::io;

    // Privileges stripped from the target on every run
    const PRIVILEGES_TO_REMOVE: [&str; 2] = [names::SE_UNDOCK_NAME, names::SE_SHUTDOWN_NAME];

    let target = config.target.process();
    info!(process = %target, "reducing privileges");

    let outcome = PrivilegeReducer::new().reduce(Some(&target), &PRIVILEGES_TO_REMOVE);
    for failure in &outcome {
        if let Some(code) = failure.code() {
            debug!(%code, system_message = %code.system_message(), "{}", failure);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &outcome)?;

    if config.console.pause_on_exit {
        console::prompt_and_wait(&mut out, &mut console::ConsoleInput)?;
    }

    // Reduction failures are reported above, not through the exit status
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: &Config) -> Result<()> {
    anyhow::bail!("privilege-reducer only supports Windows platform");
}
