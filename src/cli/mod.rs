//! CLI module for the shiftplan command-line interface.
//!
//! This module provides command handlers that load configuration and state,
//! run a calendar operation and print the result as text or JSON.

mod commands;
mod output;
pub mod types;

pub use commands::*;
