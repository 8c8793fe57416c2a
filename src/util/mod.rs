use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;

/// Installs a global [`tracing`] subscriber that writes to [`LOG_FILE`], truncating it first.
///
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)
        .with_context(|| format!("setup_log(): could not open {LOG_FILE}"))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("setup_log(): {e}"))?;
    Ok(())
}
