pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::unconfigured::Unconfigured;
pub use core::dispatch::{Command, DevAction, Dispatcher};
pub use domain::model::Value;
pub use utils::error::{MaliceError, Result};
