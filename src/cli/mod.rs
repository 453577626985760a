// src/cli/mod.rs
//! CLI argument types, dispatch, and command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;

pub use args::{Cli, Commands};
