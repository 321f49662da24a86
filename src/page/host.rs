//! The browser window as seen by page behaviours: a place to show alerts
//! and a way to reload the page.

use tracing::{info, warn};

pub trait Host {
    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Discard client state and re-fetch the page.
    fn reload(&mut self);
}

/// Remembers what was asked of it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingHost {
    pub alerts: Vec<String>,
    pub reloads: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Host for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

/// Terminal host for the CLI: alerts go to stderr.
#[derive(Debug, Default)]
pub struct LoggingHost;

impl Host for LoggingHost {
    fn alert(&mut self, message: &str) {
        warn!(alert = message, "Alert shown");
        eprintln!("{}", message);
    }

    fn reload(&mut self) {
        info!("Page reload requested");
    }
}
