//! Scripts for deploying the LifePoint token and its TokenLock, then wiring them together.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod utils;

/// Our build utils
pub mod build;

/// Our deploy utils
mod deploy;

/// Our output utils
mod output_writer;

pub mod tx;
