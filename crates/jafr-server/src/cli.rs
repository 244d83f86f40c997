use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `jafr` binary.
#[derive(Debug, Parser)]
#[command(name = "jafr", version, about = "Jafr - abjad numerology with narrative readings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Compute traditional results locally and print them as JSON
    Compute(ComputeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Person's name
    #[arg(long)]
    pub name: String,

    /// Mother's name
    #[arg(long)]
    pub mother: String,

    /// The question being asked
    #[arg(long)]
    pub question: String,

    /// Birth date in any digit script, e.g. 1990-05-17
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Include per-letter breakdowns
    #[arg(long)]
    pub details: bool,
}
