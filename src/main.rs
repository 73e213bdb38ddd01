use clap::Parser;
use env_logger::Env;
use gramcheck::errors::ErrorHandler;
use gramcheck::structs::cli::Cli;
use gramcheck::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(error.into());
    }

    Ok(())
}
