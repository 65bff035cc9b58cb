//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, format parsing)
//! - `plan` - Plan computation and output
//! - `config` - Config inspection commands
//! - `serve` - Web server command

pub mod config;
pub mod core;
pub mod plan;
pub mod serve;

// Re-export command functions for main.rs
pub use config::*;
pub use self::core::*;
pub use plan::*;
pub use serve::*;
