use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Show the analysis report for an account
    Report {
        /// Account username; prompts for one when omitted
        username: Option<String>,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Export a printable copy of the report once it is loaded
        #[clap(short, long)]
        export: bool,
        /// Render once and exit instead of showing the action menu
        #[clap(long)]
        no_interactive: bool,
    },
    /// Serve the report view over HTTP
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the entry page in the default browser
        #[clap(long)]
        open: bool,
    },
}
