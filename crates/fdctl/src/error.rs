//! Error types for fdctl
//!
//! Structured error types using thiserror, with actionable suggestions
//! surfaced alongside the diagnostic.

use colored::Colorize;
use thiserror::Error;

use crate::config::ConfigError;
use frontdoor_mgmt::MgmtError;

/// Main error type for the fdctl application
#[derive(Error, Debug)]
pub enum FdctlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("No profiles configured. {suggestion}")]
    NoProfileConfigured { suggestion: String },

    #[error("Missing access token for profile '{name}'")]
    MissingCredentials { name: String },

    #[error("Rules engine '{name}' not found in resource group '{resource_group}'")]
    RulesEngineNotFound { name: String, resource_group: String },

    #[error("Error response from server: {body}")]
    ServerError { body: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for fdctl operations
pub type Result<T> = std::result::Result<T, FdctlError>;

impl FdctlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            FdctlError::ProfileNotFound { name } => vec![
                "List available profiles: fdctl profile list".to_string(),
                format!(
                    "Create profile '{}': fdctl profile set {} --subscription <id>",
                    name, name
                ),
            ],
            FdctlError::NoProfileConfigured { .. } => vec![
                "Create a profile: fdctl profile set <name> --subscription <id>".to_string(),
                "Or export AZURE_SUBSCRIPTION_ID and AZURE_MGMT_ACCESS_TOKEN".to_string(),
            ],
            FdctlError::MissingCredentials { name } => vec![
                "Export a token: AZURE_MGMT_ACCESS_TOKEN=$(az account get-access-token --query accessToken -o tsv)".to_string(),
                format!(
                    "Or store one in the profile: fdctl profile set {} --subscription <id> --access-token <token>",
                    name
                ),
            ],
            FdctlError::RulesEngineNotFound { resource_group, .. } => vec![
                format!(
                    "List rules engines: fdctl rules-engine get --resource-group {} --front-door <name>",
                    resource_group
                ),
                "Check the rules engine name spelling".to_string(),
            ],
            FdctlError::AuthenticationFailed { .. } => vec![
                "The access token may be expired; acquire a fresh one".to_string(),
                "Verify the token was issued for the management endpoint".to_string(),
            ],
            FdctlError::ConnectionError { .. } => vec![
                "Check network connectivity".to_string(),
                "Verify the management endpoint URL: fdctl profile show <profile>".to_string(),
            ],
            FdctlError::ServerError { .. } => vec![
                "Check the rule definitions for invalid values".to_string(),
                "Inspect the server response above for the rejected field".to_string(),
            ],
            FdctlError::ApiError { message } if message.contains("404") => vec![
                "Verify the resource group and front door names are correct".to_string(),
            ],
            FdctlError::InvalidInput { .. } => vec![
                "Check the command syntax: fdctl <command> --help".to_string(),
                "Verify the rules JSON is a well-formed array".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Render the error plus its suggestions as a cargo-style diagnostic.
    pub fn display_with_suggestions(&self) -> String {
        let mut out = format!("{}{} {}", "error".red().bold(), ":".bold(), self);
        for suggestion in self.suggestions() {
            out.push('\n');
            out.push_str(&format!(
                "  {}{} {}",
                "tip".yellow().bold(),
                ":".bold(),
                suggestion
            ));
        }
        out
    }
}

impl From<MgmtError> for FdctlError {
    fn from(err: MgmtError) -> Self {
        match err {
            MgmtError::AuthenticationFailed { code } => FdctlError::AuthenticationFailed {
                message: format!("HTTP {code}"),
            },
            MgmtError::NotFound => FdctlError::ApiError {
                message: "404 Not Found: the requested resource does not exist".to_string(),
            },
            MgmtError::ApiError { code, body } => FdctlError::ApiError {
                message: format!("HTTP {code}: {body}"),
            },
            MgmtError::RequestFailed(e) => FdctlError::ConnectionError {
                message: e.to_string(),
            },
            MgmtError::InvalidUrl(e) => FdctlError::ConnectionError {
                message: e.to_string(),
            },
            MgmtError::InvalidInput(message) => FdctlError::InvalidInput { message },
        }
    }
}

impl From<ConfigError> for FdctlError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name } => FdctlError::ProfileNotFound { name },
            ConfigError::NoProfileConfigured { suggestion } => {
                FdctlError::NoProfileConfigured { suggestion }
            }
            other => FdctlError::Config(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FdctlError {
    fn from(err: serde_json::Error) -> Self {
        FdctlError::OutputError {
            message: format!("JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for FdctlError {
    fn from(err: std::io::Error) -> Self {
        FdctlError::OutputError {
            message: format!("IO error: {err}"),
        }
    }
}

impl From<anyhow::Error> for FdctlError {
    fn from(err: anyhow::Error) -> Self {
        FdctlError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_name_and_group() {
        let err = FdctlError::RulesEngineNotFound {
            name: "edge-rules".to_string(),
            resource_group: "prod-rg".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("edge-rules"));
        assert!(message.contains("prod-rg"));
    }

    #[test]
    fn server_error_carries_body() {
        let err = FdctlError::ServerError {
            body: "rules quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("rules quota exceeded"));
    }

    #[test]
    fn mgmt_not_found_maps_to_generic_api_error() {
        // The rules-engine-specific NotFound is mapped at the command layer;
        // the blanket conversion stays generic.
        let err = FdctlError::from(MgmtError::NotFound);
        assert!(matches!(err, FdctlError::ApiError { .. }));
    }

    #[test]
    fn key_errors_have_suggestions() {
        let errors = [
            FdctlError::ProfileNotFound {
                name: "prod".to_string(),
            },
            FdctlError::MissingCredentials {
                name: "prod".to_string(),
            },
            FdctlError::RulesEngineNotFound {
                name: "edge-rules".to_string(),
                resource_group: "prod-rg".to_string(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err}");
        }
    }
}
