use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "gramcheck")]
#[clap(about = "Community guideline reports for social media accounts", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/gramcheck/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
