use crate::core::{DevEnvironment, HandlerContext, Result, SelfCheck};
use async_trait::async_trait;

/// Backend used until a container or VM driver is wired in.
///
/// Every action succeeds without touching the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl Unconfigured {
    fn skip(&self, action: &str, ctx: &HandlerContext) -> Result<()> {
        match &ctx.config_path {
            Some(path) => tracing::debug!(
                "{}: no backend configured (config: {})",
                action,
                path.display()
            ),
            None => tracing::debug!("{}: no backend configured", action),
        }
        Ok(())
    }
}

#[async_trait]
impl DevEnvironment for Unconfigured {
    async fn start(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("dev:start", ctx)
    }

    async fn restart(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("dev:restart", ctx)
    }

    async fn stop(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("dev:stop", ctx)
    }

    async fn kill(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("dev:kill", ctx)
    }

    async fn clean(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("dev:clean", ctx)
    }
}

#[async_trait]
impl SelfCheck for Unconfigured {
    async fn check(&self, ctx: &HandlerContext) -> Result<()> {
        self.skip("self:check", ctx)
    }
}
