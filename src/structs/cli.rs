use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "webhook-tester")]
#[clap(about = "Test the SAI website's n8n webhook with a sample submission", long_about = None)]
pub struct Cli {
    /// Defaults to `test` with its default options
    #[clap(subcommand)]
    pub command: Option<Commands>,
}
