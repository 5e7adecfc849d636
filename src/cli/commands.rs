use clap::{Parser, Args};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paperdiff", version, about = "Score how much a candidate text copies an original")]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Absolute path of the original document
    pub original: PathBuf,

    /// Absolute path of the suspected copy
    pub candidate: PathBuf,

    /// Absolute path the two-decimal score is written to
    pub output: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the per-signal score breakdown as JSON on stdout
    #[arg(long)]
    pub breakdown: bool,

    /// Accept relative paths
    #[arg(long)]
    pub allow_relative: bool,
}
