//! Interactive wizard that sets the git identity, creates an ed25519 SSH key
//! and enables SSH commit signing.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod signing;
pub mod ssh;
pub mod summary;
pub mod validation;
