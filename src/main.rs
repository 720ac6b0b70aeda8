use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use malice::config::load_context;
use malice::utils::process::log_error;
use malice::utils::{logger, validation::Validate};
use malice::{CliArgs, Command, Dispatcher, MaliceError, Unconfigured};

async fn run(args: &CliArgs, command: Command) -> malice::Result<()> {
    args.validate()?;

    let ctx = load_context(args.config.as_deref())?;
    let dispatcher = Dispatcher::new(Unconfigured, Unconfigured);
    dispatcher.dispatch(command, &ctx).await
}

fn report(err: &MaliceError, verbose: bool) -> i32 {
    if verbose {
        log_error(err);
    }
    eprintln!("\n{}", err);
    err.exit_code()
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let command = match args.resolve() {
        Ok(command) => command,
        Err(e) => CliArgs::command()
            .error(ErrorKind::MissingSubcommand, e.to_string())
            .exit(),
    };

    let exit_code = tokio::select! {
        result = run(&args, command) => match result {
            Ok(()) => 0,
            Err(e) => report(&e, args.verbose),
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nAborted");
            0
        }
    };

    std::process::exit(exit_code);
}
