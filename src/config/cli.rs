use crate::core::dispatch::{Command, DevAction};
use crate::utils::error::{MaliceError, Result};
use crate::utils::validation::{validate_existing_file, validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "malice", version)]
#[command(about = "Manipulate docker for this project")]
pub struct CliArgs {
    #[arg(long, short = 'c', value_name = "FILE", global = true, help = "Configuration file location")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<GroupArgs>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum GroupArgs {
    /// Manage the local development environment
    Dev {
        #[command(subcommand)]
        sub_command: Option<DevAction>,
    },
    /// Inspect the malice installation
    #[command(name = "self")]
    SelfGroup {
        #[command(subcommand)]
        sub_command: Option<SelfAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum SelfAction {
    /// Check that malice can run on this machine
    Check,
}

impl CliArgs {
    /// Turns the parsed tokens into a command, or a usage error.
    pub fn resolve(&self) -> Result<Command> {
        let usage = |message: &str| MaliceError::UsageError {
            message: message.to_string(),
        };

        match &self.command {
            None => Err(usage("No command provided")),
            Some(GroupArgs::Dev {
                sub_command: Some(action),
            }) => Ok(Command::Dev(*action)),
            Some(GroupArgs::SelfGroup {
                sub_command: Some(SelfAction::Check),
            }) => Ok(Command::SelfCheck),
            Some(_) => Err(usage("Missing check sub command")),
        }
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            let text = config.to_string_lossy();
            validate_path("config", &text)?;
            validate_existing_file("config", config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("malice").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_dev_actions() {
        assert_eq!(parse(&["dev", "start"]).resolve().unwrap(), Command::Dev(DevAction::Start));
        assert_eq!(parse(&["dev", "clean"]).resolve().unwrap(), Command::Dev(DevAction::Clean));
        assert_eq!(parse(&["self", "check"]).resolve().unwrap(), Command::SelfCheck);
    }

    #[test]
    fn test_missing_command() {
        let err = parse(&[]).resolve().unwrap_err();
        assert_eq!(err.to_string(), "No command provided");
    }

    #[test]
    fn test_missing_sub_command() {
        for group in ["dev", "self"] {
            let err = parse(&[group]).resolve().unwrap_err();
            assert!(matches!(err, MaliceError::UsageError { .. }));
            assert_eq!(err.to_string(), "Missing check sub command");
        }
    }

    #[test]
    fn test_unknown_sub_command_is_rejected_by_parser() {
        let result = CliArgs::try_parse_from(["malice", "dev", "explode"]);
        assert!(result.is_err());
        let result = CliArgs::try_parse_from(["malice", "self", "start"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_options() {
        let args = parse(&["-c", "malice.ini", "dev", "stop", "--verbose"]);
        assert_eq!(args.config, Some(PathBuf::from("malice.ini")));
        assert!(args.verbose);
    }

    #[test]
    fn test_validate_config_path() {
        assert!(parse(&["dev", "start"]).validate().is_ok());
        assert!(parse(&["-c", "/no/such/malice.ini", "dev", "start"])
            .validate()
            .is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[Job]\nname = test").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(parse(&["-c", &path, "dev", "start"]).validate().is_ok());
    }
}
