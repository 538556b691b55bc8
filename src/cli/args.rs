use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "recapper")]
#[command(about = "Turn meeting next steps into action items", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Select up to three action items from next-steps text
    Actions(ActionsCliArgs),
    /// List every parsed step with its category and summary
    Steps(StepsCliArgs),
    /// Render bullet lines as HTML lists
    Format(FormatCliArgs),
    /// Render a stored meeting recap (JSON) with its action items
    Recap(RecapCliArgs),
    /// Render a meeting prep brief (JSON)
    Prep(PrepCliArgs),
    /// Summarize a day of meetings from a JSON array
    Schedule(ScheduleCliArgs),
    /// Inspect or initialize the config file
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ActionsCliArgs {
    /// File containing next-steps text (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Raw step text whose action is currently in flight
    #[arg(long, conflicts_with = "pending_key")]
    pub pending_text: Option<String>,
    /// Synthetic key (e.g. step-2) whose action is currently in flight
    #[arg(long)]
    pub pending_key: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct StepsCliArgs {
    /// File containing next-steps text (reads stdin when omitted)
    pub file: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(ClapArgs, Debug)]
pub struct FormatCliArgs {
    /// File containing recap text (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct RecapCliArgs {
    /// JSON file holding one meeting recap (reads stdin when omitted)
    pub file: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Override the configured UTC offset, in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
}

#[derive(ClapArgs, Debug)]
pub struct PrepCliArgs {
    /// JSON file holding one meeting prep record (reads stdin when omitted)
    pub file: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(ClapArgs, Debug)]
pub struct ScheduleCliArgs {
    /// JSON file holding an array of meetings
    pub file: PathBuf,
    /// Only show meetings on this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Reference time for past/now/upcoming (RFC 3339, defaults to now)
    #[arg(long)]
    pub now: Option<String>,
    /// Override the configured UTC offset, in minutes
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write the default config file, replacing any existing one
    Init,
}
