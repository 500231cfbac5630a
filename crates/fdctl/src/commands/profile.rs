//! Profile management command implementations

use colored::Colorize;
use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, ProfileCommands};
use crate::config::{Config, Profile};
use crate::connection::ConnectionManager;
use crate::error::{FdctlError, Result as CliResult};
use crate::output;

/// Handle profile management commands
pub async fn handle_profile_command(
    command: &ProfileCommands,
    conn_mgr: &ConnectionManager,
    output_format: OutputFormat,
) -> CliResult<()> {
    match command {
        ProfileCommands::List => handle_list(conn_mgr, output_format),
        ProfileCommands::Path => handle_path(conn_mgr),
        ProfileCommands::Show { name } => handle_show(conn_mgr, name, output_format),
        ProfileCommands::Set {
            name,
            subscription,
            access_token,
            api_url,
        } => handle_set(conn_mgr, name, subscription, access_token.as_deref(), api_url),
        ProfileCommands::Remove { name } => handle_remove(conn_mgr, name),
        ProfileCommands::Default { name } => handle_default(conn_mgr, name),
    }
}

fn active_config_path(conn_mgr: &ConnectionManager) -> Option<String> {
    conn_mgr
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| {
            Config::config_path()
                .ok()
                .map(|p| p.display().to_string())
        })
}

fn handle_list(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    debug!("Listing all configured profiles");
    let profiles = conn_mgr.config.list_profiles();

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let profile_list: Vec<serde_json::Value> = profiles
                .iter()
                .map(|(name, profile)| {
                    json!({
                        "name": name,
                        "subscription_id": profile.subscription_id,
                        "api_url": profile.api_url,
                        "has_access_token": profile.access_token.is_some(),
                        "is_default": conn_mgr.config.default_profile.as_deref() == Some(name.as_str()),
                    })
                })
                .collect();

            let data = json!({
                "config_path": active_config_path(conn_mgr),
                "profiles": profile_list,
                "count": profiles.len(),
            });

            let fmt = match output_format {
                OutputFormat::Yaml => output::OutputFormat::Yaml,
                _ => output::OutputFormat::Json,
            };
            emit(data, fmt)
        }
        _ => {
            if let Some(path) = active_config_path(conn_mgr) {
                println!("Configuration file: {path}");
                println!();
            }

            if profiles.is_empty() {
                println!("No profiles configured.");
                println!("Use 'fdctl profile set' to create a profile.");
                return Ok(());
            }

            for (name, profile) in profiles {
                if conn_mgr.config.default_profile.as_deref() == Some(name.as_str()) {
                    println!("  {} {}", name.bold().cyan(), "(default)".green());
                } else {
                    println!("  {}", name.bold().cyan());
                }
                println!("    Subscription: {}", profile.subscription_id);
                println!("    Endpoint:     {}", profile.api_url);
            }
            Ok(())
        }
    }
}

fn handle_path(conn_mgr: &ConnectionManager) -> CliResult<()> {
    match active_config_path(conn_mgr) {
        Some(path) => println!("{path}"),
        None => println!("(no configuration file)"),
    }
    Ok(())
}

fn handle_show(
    conn_mgr: &ConnectionManager,
    name: &str,
    output_format: OutputFormat,
) -> CliResult<()> {
    let profile = conn_mgr
        .config
        .profiles
        .get(name)
        .ok_or_else(|| FdctlError::ProfileNotFound {
            name: name.to_string(),
        })?;

    // Never print the token itself.
    let data = json!({
        "name": name,
        "subscription_id": profile.subscription_id,
        "api_url": profile.api_url,
        "access_token": if profile.access_token.is_some() { "configured" } else { "not set" },
        "is_default": conn_mgr.config.default_profile.as_deref() == Some(name),
    });

    let fmt = match output_format {
        OutputFormat::Json => output::OutputFormat::Json,
        OutputFormat::Yaml => output::OutputFormat::Yaml,
        _ => output::OutputFormat::Table,
    };
    emit(data, fmt)
}

fn handle_set(
    conn_mgr: &ConnectionManager,
    name: &str,
    subscription: &str,
    access_token: Option<&str>,
    api_url: &str,
) -> CliResult<()> {
    let mut config = conn_mgr.config.clone();
    config.set_profile(
        name.to_string(),
        Profile {
            subscription_id: subscription.to_string(),
            access_token: access_token.map(String::from),
            api_url: api_url.to_string(),
        },
    );

    // First profile becomes the default.
    if config.profiles.len() == 1 {
        config.default_profile = Some(name.to_string());
    }

    conn_mgr.save_config(&config)?;
    println!("Profile '{name}' saved.");
    Ok(())
}

fn handle_remove(conn_mgr: &ConnectionManager, name: &str) -> CliResult<()> {
    let mut config = conn_mgr.config.clone();
    if config.remove_profile(name).is_none() {
        return Err(FdctlError::ProfileNotFound {
            name: name.to_string(),
        });
    }

    conn_mgr.save_config(&config)?;
    println!("Profile '{name}' removed.");
    Ok(())
}

fn handle_default(conn_mgr: &ConnectionManager, name: &str) -> CliResult<()> {
    if !conn_mgr.config.profiles.contains_key(name) {
        return Err(FdctlError::ProfileNotFound {
            name: name.to_string(),
        });
    }

    let mut config = conn_mgr.config.clone();
    config.default_profile = Some(name.to_string());
    conn_mgr.save_config(&config)?;
    println!("Default profile set to '{name}'.");
    Ok(())
}

fn emit<T: serde::Serialize>(data: T, format: output::OutputFormat) -> CliResult<()> {
    output::print_output(data, format).map_err(|e| FdctlError::OutputError {
        message: e.to_string(),
    })
}
