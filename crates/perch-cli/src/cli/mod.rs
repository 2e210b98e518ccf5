//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perch_core::auth::{AuthClient, Session};
use perch_core::config::{Config, paths};
use perch_core::validate;

#[derive(Parser)]
#[command(name = "perch")]
#[command(version = "0.1")]
#[command(about = "Terminal client for the Perch posts service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ${PERCH_HOME}/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in without the TUI and persist the session
    Login {
        /// Account email address
        #[arg(long)]
        email: String,

        /// Account password (falls back to the PERCH_PASSWORD env var)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the persisted session
    Logout,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (or refresh an existing one)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(paths::config_path);
    let config = Config::load_from(&config_path).context("load config")?;

    // default to the interactive client
    let Some(command) = cli.command else {
        config.validate()?;
        let _guard = perch_core::logging::init(&config.log_filter)?;
        return perch_tui::run(&config).await;
    };

    match command {
        Commands::Login { email, password } => {
            config.validate()?;
            login(&config, &email, password).await
        }

        Commands::Logout => {
            Session::clear().context("clear session")?;
            println!("Signed out.");
            Ok(())
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigCommands::Init => {
                Config::init_at(&config_path)?;
                println!("Config written to {}", config_path.display());
                Ok(())
            }
        },
    }
}

async fn login(config: &Config, email: &str, password: Option<String>) -> Result<()> {
    let password = password
        .or_else(|| std::env::var("PERCH_PASSWORD").ok())
        .context("provide --password or set PERCH_PASSWORD")?;

    validate::check_credentials(email, &password)
        .map_err(|reason| anyhow::anyhow!("{reason}"))?;

    let client = AuthClient::new(&config.backend);
    let session = client
        .sign_in(email, &password)
        .await
        .map_err(|error| anyhow::anyhow!("{error}"))
        .context("sign in")?;

    session.save().context("persist session")?;
    tracing::info!(email = %session.email, "session persisted");
    println!("Signed in as {}.", session.email);
    Ok(())
}
