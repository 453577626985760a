pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod shell;
pub mod store;
