pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::ConsoleNotifier, CliConfig};
pub use crate::core::{
    dispatcher::SubmissionDispatcher, estimator::estimate, session::BudgetSession,
};
pub use crate::utils::error::{BudgetError, Result};
