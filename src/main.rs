use clap::Parser;
use tracing::debug;

use nftsentry::adapter::inbound::cli::command::{Cli, Commands};
use nftsentry::adapter::inbound::cli::output::{self, OutputConfig};
use nftsentry::adapter::inbound::cli::{analyze, config, portfolio, verify};
use nftsentry::error::Result;
use nftsentry::infrastructure::config::settings::Config;

/// Log level implied by repeated `-v` flags.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let level = verbosity_level(cli.verbose);

    // `config` commands load the file themselves and must not fail early.
    if let Commands::Config(command) = &cli.command {
        let mut logging = Config::default().logging;
        logging.apply_overrides(level, cli.json);
        logging.init();
        return config::execute(command);
    }

    let mut settings = Config::load_or_default(cli.command.config_path())?;
    settings.logging.apply_overrides(level, cli.json);
    settings.init_logging();
    debug!(path = %cli.command.config_path().display(), "Configuration loaded");

    match &cli.command {
        Commands::Analyze(args) => analyze::execute(args, &settings).await,
        Commands::Portfolio(args) => portfolio::execute(args, &settings).await,
        Commands::Verify(args) => verify::execute(args, &settings).await,
        Commands::Config(command) => config::execute(command),
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(),
    ));

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
