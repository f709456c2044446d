//! Output formatting
//!
//! Global output preferences (quiet, JSON, verbosity), status prefixes and
//! error display for the command-line tool. Results go to stdout; status
//! lines and errors go to stderr.

use std::sync::OnceLock;

use serde::Serialize;

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

/// Output preferences selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress status output
    pub quiet: bool,
    /// Emit JSON instead of text
    pub json: bool,
    /// Verbosity level (0 = warnings only)
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Install this configuration for the rest of the process.
    ///
    /// Only the first call takes effect.
    pub fn apply_global(self) {
        let _ = OUTPUT.set(self);
    }

    /// The installed configuration, or defaults if none was installed
    pub fn current() -> Self {
        OUTPUT.get().copied().unwrap_or_default()
    }

    /// Tracing level matching the verbosity
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Print a status line to stderr unless quiet or JSON output is active
pub fn print_status(prefix: &str, message: &str) {
    let config = OutputConfig::current();
    if !config.quiet && !config.json {
        eprintln!("{prefix} {message}");
    }
}

/// Print a serializable value as pretty JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display an error and its causes on stderr
pub fn display_error(error: &anyhow::Error) {
    if OutputConfig::current().json {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        let payload = serde_json::json!({
            "error": error.to_string(),
            "causes": causes,
        });
        eprintln!("{payload}");
        return;
    }

    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}
