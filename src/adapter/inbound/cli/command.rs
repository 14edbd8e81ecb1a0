//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "nftsentry.toml";

/// NFT portfolio health and risk scoring
#[derive(Parser, Debug)]
#[command(name = "nftsentry")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no answer for the current stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        use std::io::IsTerminal;

        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score NFT records from a JSON file and summarize portfolio health
    Analyze(AnalyzeArgs),

    /// Fetch a wallet's NFTs from the API and summarize portfolio health
    Portfolio(PortfolioArgs),

    /// Check a single token for authenticity risks
    Verify(VerifyArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Shared `--config` argument.
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for `nftsentry analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of NFT records
    pub file: PathBuf,

    /// Trust the health scores in the file instead of rescoring
    #[arg(long, conflicts_with = "risk_only")]
    pub keep_scores: bool,

    /// Score from risk factors alone, ignoring price history and liquidity
    #[arg(long)]
    pub risk_only: bool,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `nftsentry portfolio`.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Wallet address
    pub address: String,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for `nftsentry verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Contract address of the collection
    pub contract: String,

    /// Token ID within the contract
    pub token_id: String,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Subcommands for `nftsentry config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show(ConfigPathArg),
    /// Validate a configuration file
    Validate(ConfigPathArg),
}

impl Commands {
    /// Config file path selected for this command.
    #[must_use]
    pub fn config_path(&self) -> &PathBuf {
        match self {
            Self::Analyze(args) => &args.config.config,
            Self::Portfolio(args) => &args.config.config,
            Self::Verify(args) => &args.config.config,
            Self::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => &arg.config,
        }
    }
}
