use assistant::cli::{Cli, Commands};
use assistant::types::config::Config;
use assistant::AssistantResult;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AssistantResult<()> {
    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("assistant={}", log_level)
            .parse()
            .unwrap_or_else(|_| "assistant=warn".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            assistant::cli::commands::init(path)?;
        }
        Commands::Bot => {
            assistant::cli::commands::bot(&config)?;
        }
        Commands::Fib { n } => {
            assistant::cli::commands::fib(&n)?;
        }
        Commands::Logs { file, level, json } => {
            assistant::cli::commands::logs(&file, level.as_deref(), json, &config)?;
        }
        Commands::Profit { text, file } => {
            assistant::cli::commands::profit(text, file)?;
        }
        Commands::Version => {
            assistant::cli::commands::version();
        }
    }

    Ok(())
}
