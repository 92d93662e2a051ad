//! Logging for the NAS IE codec
//!
//! The codec crates only emit `tracing` events: one `trace!` per IE that
//! crosses the wire and one `debug!` per failure, tagged with a [`Direction`]
//! and the octets rendered by [`HexDump`]. Installing a subscriber is left to
//! the application; [`init_logging`] is a convenience for binaries and tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Crates whose events [`LogLevel::codec_filter`] enables
const CODEC_TARGETS: [&str; 2] = ["nas5g_common", "nas5g_ie"];

/// Verbosity of codec events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every IE, with its octets
    Trace,
    /// Failures only
    Debug,
    /// Default
    #[default]
    Info,
    /// Warnings and errors
    Warn,
    /// Errors only
    Error,
}

impl LogLevel {
    /// Lowercase name, as accepted by `EnvFilter`.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Filter directive that applies this level to the codec crates and
    /// keeps everything else at `warn`.
    pub fn codec_filter(self) -> String {
        CODEC_TARGETS
            .iter()
            .fold(String::from("warn"), |mut directive, target| {
                directive.push(',');
                directive.push_str(target);
                directive.push('=');
                directive.push_str(self.as_str());
                directive
            })
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.trim().to_ascii_lowercase();
        [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str() == level)
        .ok_or_else(|| Error::Config(format!("unknown log level: {s}")))
    }
}

/// Install a `fmt` subscriber for the codec crates at `level`.
///
/// `RUST_LOG` takes precedence when set. Does nothing if a global
/// subscriber is already installed.
///
/// # Example
///
/// ```
/// use nas5g_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Trace);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.codec_filter());
}

/// Install a `fmt` subscriber with an explicit `EnvFilter` directive.
///
/// ```
/// use nas5g_common::logging::init_logging_with_filter;
///
/// init_logging_with_filter("info,nas5g_ie=trace");
/// ```
pub fn init_logging_with_filter(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

/// Which way an IE crossed the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read from a received message
    Decode,
    /// Written into an outgoing message
    Encode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Decode => "decode",
            Direction::Encode => "encode",
        })
    }
}

/// Octets rendered as space-separated hex pairs, e.g. `7e 00 45`
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut octets = self.0.iter();
        if let Some(first) = octets.next() {
            f.write_str(&hex::encode([*first]))?;
        }
        for octet in octets {
            write!(f, " {}", hex::encode([*octet]))?;
        }
        Ok(())
    }
}
