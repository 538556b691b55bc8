use anyhow::Result;
use clap::Parser;
use recapper::cli::{
    handle_actions_command, handle_config_command, handle_format_command, handle_prep_command,
    handle_recap_command, handle_schedule_command, handle_steps_command, Cli, CliCommand,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        CliCommand::Version => {
            println!("Recapper {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Actions(args) => handle_actions_command(args),
        CliCommand::Steps(args) => handle_steps_command(args),
        CliCommand::Format(args) => handle_format_command(args),
        CliCommand::Recap(args) => handle_recap_command(args),
        CliCommand::Prep(args) => handle_prep_command(args),
        CliCommand::Schedule(args) => handle_schedule_command(args),
        CliCommand::Config(args) => handle_config_command(args),
    }
}
