use std::process::ExitCode;
use clap::Parser;
use webhook_tester::structs::cli::Cli;
use webhook_tester::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    // Commands print their own operator-facing failure lines.
    match runner.run_command(cli.command.unwrap_or_default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
