#[cfg(feature = "cli")]
pub mod cli;
pub mod ini_file;

use crate::domain::ports::HandlerContext;
use crate::utils::error::Result;
use std::path::Path;

/// Builds the handler context, loading the configuration file when one is given.
pub fn load_context(config_path: Option<&Path>) -> Result<HandlerContext> {
    let Some(path) = config_path else {
        return Ok(HandlerContext::default());
    };

    let config = ini_file::load_ini_file(path)?;
    tracing::debug!(
        "Loaded {} sections from {}",
        config.sections().count(),
        path.display()
    );

    Ok(HandlerContext {
        config_path: Some(path.to_path_buf()),
        config: Some(config),
    })
}
