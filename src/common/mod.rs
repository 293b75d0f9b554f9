//! # Common Components
//!
//! Shared utilities used by the library and the `stego` binary.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration parsing
//! - [`logging`]: Logger initialization

pub mod config;
pub mod logging;
