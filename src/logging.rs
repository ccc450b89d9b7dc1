//! Diagnostic tracing
//!
//! Level comes from `RUST_LOG` and defaults to `warn`. Output goes to stderr,
//! or to a file when one is given. The terminal viewer owns the screen, so
//! without a file it logs nowhere.
//!
//! ```bash
//! RUST_LOG=sortstep=trace sortstep "9 8 3 2 4 6 1"
//! RUST_LOG=info sortstep --log-file sortstep.log
//! ```

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput<'a> {
    Stderr,
    File(&'a Path),
    /// No subscriber is installed
    Discard,
}

impl<'a> LogOutput<'a> {
    /// A log file always wins; otherwise stderr, unless a full-screen UI is
    /// about to draw over it
    pub fn select(log_file: Option<&'a Path>, full_screen: bool) -> Self {
        match (log_file, full_screen) {
            (Some(path), _) => LogOutput::File(path),
            (None, false) => LogOutput::Stderr,
            (None, true) => LogOutput::Discard,
        }
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(output: LogOutput<'_>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match output {
        LogOutput::File(path) => {
            let file = File::create(path)?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).compact())
                .init();
        }
        LogOutput::Stderr => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .init();
        }
        LogOutput::Discard => {}
    }

    Ok(())
}
