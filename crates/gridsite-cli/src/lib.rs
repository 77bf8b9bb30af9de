//! Command-line interface for gridsite.
//!
//! # Modules
//!
//! - `app`: application wiring and command execution
//! - `cli`: argument parsing and command definitions
//! - `config`: site configuration loading
//! - `config_handlers`: config subcommand handlers

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
