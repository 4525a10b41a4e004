//! Runtime settings.
//!
//! Defaults, then environment (a `.env` file is loaded by `main` through
//! `dotenv`), then command line flags.

use crate::cli::Args;
use std::path::PathBuf;

pub const DEFAULT_PREVIEW_ROWS: usize = 10;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub color: bool,
    pub banner: bool,
    /// Subnets listed before "... and N more subnets".
    pub preview_rows: usize,
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Problems found while reading the environment. Logged by
    /// [`Settings::log_warnings`] once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            color: true,
            banner: true,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            warnings: Vec::new(),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, the process environment in practice.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        // NO_COLOR disables color whatever its value, see no-color.org
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty())
            || lookup("SUBNETTA_NO_COLOR").is_some_and(|v| is_truthy(&v))
        {
            settings.color = false;
        }
        if lookup("SUBNETTA_NO_BANNER").is_some_and(|v| is_truthy(&v)) {
            settings.banner = false;
        }
        if let Some(rows) = lookup("SUBNETTA_PREVIEW_ROWS") {
            match rows.trim().parse::<usize>() {
                Ok(n) => settings.preview_rows = n,
                Err(e) => settings
                    .warnings
                    .push(format!("Ignoring SUBNETTA_PREVIEW_ROWS={rows:?}: {e}")),
            }
        }
        if let Some(path) = lookup("SUBNETTA_LOG_CONFIG") {
            settings.log_config = PathBuf::from(path);
        }
        settings
    }

    /// Emit the warnings collected by [`Settings::from_lookup`].
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }

    /// Apply command line overrides.
    pub fn with_args(mut self, args: &Args) -> Settings {
        if args.no_color {
            self.color = false;
        }
        // JSON goes to stdout, keep it clean
        if args.no_banner || args.json {
            self.banner = false;
        }
        if let Some(rows) = args.preview {
            self.preview_rows = rows;
        }
        self
    }
}

/// Switch `colored` off globally when color is disabled; otherwise leave
/// its terminal detection alone.
pub fn apply_color(settings: &Settings) {
    if !settings.color {
        colored::control::set_override(false);
    }
}
