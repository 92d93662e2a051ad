//! Common types and utilities for nas5g
//!
//! This crate provides the plumbing shared by the NAS IE codec crates:
//! bounds-checked octet views over caller-owned buffers, logging setup,
//! and YAML configuration.

pub mod config;
pub mod error;
pub mod logging;
pub mod octet_view;

pub use config::{CodecConfig, ValueCheck};
pub use error::{Error, OctetError};
pub use logging::{init_logging, init_logging_with_filter, Direction, HexDump, LogLevel};
pub use octet_view::{OctetView, OctetViewMut};
