use crate::utils::error::Result;
use async_trait::async_trait;
use ini::Ini;
use std::path::PathBuf;

/// What a handler gets to see about the current invocation.
#[derive(Default)]
pub struct HandlerContext {
    pub config_path: Option<PathBuf>,
    pub config: Option<Ini>,
}

impl HandlerContext {
    /// Looks a key up in the loaded configuration file, if any.
    pub fn setting(&self, section: &str, key: &str) -> Option<&str> {
        self.config.as_ref()?.section(Some(section))?.get(key)
    }
}

/// Lifecycle of the local development environment.
#[async_trait]
pub trait DevEnvironment: Send + Sync {
    async fn start(&self, ctx: &HandlerContext) -> Result<()>;
    async fn restart(&self, ctx: &HandlerContext) -> Result<()>;
    async fn stop(&self, ctx: &HandlerContext) -> Result<()>;
    async fn kill(&self, ctx: &HandlerContext) -> Result<()>;
    async fn clean(&self, ctx: &HandlerContext) -> Result<()>;
}

/// Health check of the tool installation.
#[async_trait]
pub trait SelfCheck: Send + Sync {
    async fn check(&self, ctx: &HandlerContext) -> Result<()>;
}
