use crate::core::{DevEnvironment, HandlerContext, SelfCheck};
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
pub enum DevAction {
    /// Start the development environment
    Start,
    /// Restart the development environment
    Restart,
    /// Stop the development environment
    Stop,
    /// Kill the development environment
    Kill,
    /// Remove everything the development environment created
    Clean,
}

/// A fully resolved command line. Every variant has exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Dev(DevAction),
    SelfCheck,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Dev(DevAction::Start) => "dev:start",
            Command::Dev(DevAction::Restart) => "dev:restart",
            Command::Dev(DevAction::Stop) => "dev:stop",
            Command::Dev(DevAction::Kill) => "dev:kill",
            Command::Dev(DevAction::Clean) => "dev:clean",
            Command::SelfCheck => "self:check",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Dispatcher<D: DevEnvironment, S: SelfCheck> {
    dev: D,
    self_check: S,
}

impl<D: DevEnvironment, S: SelfCheck> Dispatcher<D, S> {
    pub fn new(dev: D, self_check: S) -> Self {
        Self { dev, self_check }
    }

    /// Runs the single handler bound to `command`.
    pub async fn dispatch(&self, command: Command, ctx: &HandlerContext) -> Result<()> {
        tracing::debug!("Dispatching {}", command);

        match command {
            Command::Dev(DevAction::Start) => self.dev.start(ctx).await,
            Command::Dev(DevAction::Restart) => self.dev.restart(ctx).await,
            Command::Dev(DevAction::Stop) => self.dev.stop(ctx).await,
            Command::Dev(DevAction::Kill) => self.dev.kill(ctx).await,
            Command::Dev(DevAction::Clean) => self.dev.clean(ctx).await,
            Command::SelfCheck => self.self_check.check(ctx).await,
        }
    }
}
