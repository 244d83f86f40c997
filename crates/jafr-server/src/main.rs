use anyhow::Context;
use clap::Parser;
use jafr_config::JafrConfig;
use jafr_core::AnalysisRequest;
use jafr_core::responses::NumerologyResponse;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("jafr error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        cli::Commands::Serve(args) => serve(args).await,
        cli::Commands::Compute(args) => compute(args),
    }
}

async fn serve(args: cli::ServeArgs) -> anyhow::Result<()> {
    let mut config = JafrConfig::load_with_dotenv().context("failed to load jafr configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
        .validate()
        .context("invalid configuration after CLI overrides")?;

    if config.oracle.enabled && !config.oracle.has_server_key() {
        tracing::info!("no server-side oracle key configured; callers must supply one");
    }

    jafr_server::run(config).await?;
    Ok(())
}

fn compute(args: cli::ComputeArgs) -> anyhow::Result<()> {
    println!("{}", render_compute(args)?);
    Ok(())
}

/// Trim, validate, and compute offline, returning pretty JSON.
fn render_compute(args: cli::ComputeArgs) -> anyhow::Result<String> {
    let mut request = AnalysisRequest::new(args.name, args.mother, args.question);
    request.birth_date = args.birth_date;
    request.options.numerology_details = args.details;

    let request = request.normalized();
    request.validate()?;

    let response = NumerologyResponse {
        success: true,
        traditional_results: jafr_core::compute_traditional(&request),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("JAFR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
