// ABOUTME: Long Drive Log command line front end
// ABOUTME: Environment configuration, command handlers, and output rendering

pub mod commands;
pub mod config;

pub use config::{Config, ConfigError};

#[cfg(test)]
mod tests;
