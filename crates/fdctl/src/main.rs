use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use config::Config;
use connection::ConnectionManager;
use error::FdctlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load configuration from specified path or default location
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    let conn_mgr = ConnectionManager::with_config_path(config, config_path);

    if let Err(e) = execute_command(&cli, &conn_mgr).await {
        eprintln!("{}", e.display_with_suggestions());
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over the verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "fdctl=warn,frontdoor_mgmt=warn",
            1 => "fdctl=info,frontdoor_mgmt=info",
            2 => "fdctl=debug,frontdoor_mgmt=debug",
            _ => "fdctl=trace,frontdoor_mgmt=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &ConnectionManager) -> Result<(), FdctlError> {
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::RulesEngine(cmd) => {
            commands::rules_engine::handle_rules_engine_command(
                conn_mgr,
                cli.profile.as_deref(),
                cmd,
                cli.output,
            )
            .await
        }
        Commands::Profile(cmd) => {
            commands::profile::handle_profile_command(cmd, conn_mgr, cli.output).await
        }
        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Format command for logging without sensitive data
fn format_command(command: &Commands) -> String {
    match command {
        Commands::RulesEngine(cmd) => {
            use cli::RulesEngineCommands::*;
            match cmd {
                Get {
                    resource_group,
                    front_door,
                    name,
                } => format!(
                    "rules-engine get {} {} {}",
                    resource_group,
                    front_door,
                    name.as_deref().unwrap_or("(all)")
                ),
                Set {
                    resource_group,
                    front_door,
                    name,
                    ..
                } => format!("rules-engine set {resource_group} {front_door} {name}"),
            }
        }
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {name}"),
                Set { name, .. } => format!("profile set {name} [credentials redacted]"),
                Remove { name } => format!("profile remove {name}"),
                Default { name } => format!("profile default {name}"),
            }
        }
        Commands::Completions { shell } => format!("completions {shell:?}"),
    }
}

fn generate_completions(shell: cli::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, name, &mut std::io::stdout())
        }
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut std::io::stdout()),
    }
}
