// Log setup. Diagnostics go through `tracing` to stderr; what the user asked
// for (listings, confirmations, skipped numbers) is printed by `ui`.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map the number of `--verbose` flags to a log level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// file contents printed by `get --view`.
pub fn setup_logging(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(level >= Level::DEBUG)
        .with_ansi(std::io::stderr().is_terminal())
        .with_level(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
