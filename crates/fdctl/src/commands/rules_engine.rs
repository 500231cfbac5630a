//! Rules engine command implementations

use serde_json::json;
use tracing::debug;

use crate::cli::{OutputFormat, RulesEngineCommands};
use crate::connection::ConnectionManager;
use crate::error::{FdctlError, Result as CliResult};
use crate::output;
use frontdoor_mgmt::{
    MgmtError, RulesEngine, RulesEngineHandler, RulesEngineRule, RulesEngineUpdateParameters,
};

/// Handle rules engine commands
pub async fn handle_rules_engine_command(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    command: &RulesEngineCommands,
    output_format: OutputFormat,
) -> CliResult<()> {
    match command {
        RulesEngineCommands::Get {
            resource_group,
            front_door,
            name,
        } => {
            let client = conn_mgr.create_client(profile_name).await?;
            let handler = RulesEngineHandler::new(client);

            match name {
                Some(name) => {
                    debug!("Fetching rules engine '{}'", name);
                    let engine = handler
                        .get(resource_group, front_door, name)
                        .await
                        .map_err(|e| match e {
                            MgmtError::NotFound => FdctlError::RulesEngineNotFound {
                                name: name.clone(),
                                resource_group: resource_group.clone(),
                            },
                            other => other.into(),
                        })?;
                    print_engine(&engine, output_format)
                }
                None => {
                    debug!("Listing rules engines on '{}'", front_door);
                    let engines = handler
                        .list_by_front_door(resource_group, front_door)
                        .await?;
                    print_engine_list(&engines, output_format)
                }
            }
        }

        RulesEngineCommands::Set {
            resource_group,
            front_door,
            name,
            rules,
        } => {
            // Validate the rule input before touching the network.
            let rules = match rules {
                Some(input) => parse_rules_input(input)?,
                None => Vec::new(),
            };

            let client = conn_mgr.create_client(profile_name).await?;
            let handler = RulesEngineHandler::new(client);

            let parameters = RulesEngineUpdateParameters::new(rules);
            let engine = handler
                .create_or_update(resource_group, front_door, name, &parameters)
                .await
                .map_err(|e| match e {
                    MgmtError::ApiError { body, .. } => FdctlError::ServerError { body },
                    other => other.into(),
                })?;
            print_engine(&engine, output_format)
        }
    }
}

/// Parse the --rules argument: an inline JSON array or @file reference.
fn parse_rules_input(input: &str) -> CliResult<Vec<RulesEngineRule>> {
    let json_str = if let Some(file_path) = input.strip_prefix('@') {
        std::fs::read_to_string(file_path).map_err(|e| FdctlError::InvalidInput {
            message: format!("Failed to read file {file_path}: {e}"),
        })?
    } else {
        input.to_string()
    };

    serde_json::from_str(&json_str).map_err(|e| FdctlError::InvalidInput {
        message: format!("Invalid JSON: {e}"),
    })
}

/// Summary projection used for list output in table mode.
fn engine_summary(engine: &RulesEngine) -> serde_json::Value {
    let (rule_count, state) = match &engine.properties {
        Some(p) => (
            p.rules.as_ref().map(Vec::len).unwrap_or(0),
            p.resource_state.clone().unwrap_or_default(),
        ),
        None => (0, String::new()),
    };
    json!({
        "NAME": engine.name.clone().unwrap_or_default(),
        "RULES": rule_count,
        "STATE": state,
    })
}

fn print_engine(engine: &RulesEngine, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => emit(engine, output::OutputFormat::Json),
        OutputFormat::Yaml => emit(engine, output::OutputFormat::Yaml),
        OutputFormat::Table | OutputFormat::Auto => {
            emit(engine_summary(engine), output::OutputFormat::Table)
        }
    }
}

fn print_engine_list(engines: &[RulesEngine], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => emit(engines, output::OutputFormat::Json),
        OutputFormat::Yaml => emit(engines, output::OutputFormat::Yaml),
        OutputFormat::Table | OutputFormat::Auto => {
            let rows: Vec<_> = engines.iter().map(engine_summary).collect();
            emit(rows, output::OutputFormat::Table)
        }
    }
}

fn emit<T: serde::Serialize>(data: T, format: output::OutputFormat) -> CliResult<()> {
    output::print_output(data, format).map_err(|e| FdctlError::OutputError {
        message: e.to_string(),
    })
}
