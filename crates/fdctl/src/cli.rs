//! CLI structure and command definitions

use clap::{Parser, Subcommand};

/// Azure Front Door management CLI
#[derive(Parser, Debug)]
#[command(name = "fdctl")]
#[command(version, about = "Azure Front Door management CLI")]
#[command(long_about = "
Azure Front Door management CLI

Manage rules engine configurations on a Front Door:
    fdctl rules-engine get --resource-group prod-rg --front-door contoso-fd
    fdctl rules-engine get --resource-group prod-rg --front-door contoso-fd --name edge-rules
    fdctl rules-engine set --resource-group prod-rg --front-door contoso-fd --name edge-rules --rules @rules.json

EXAMPLES:
    # Set up a profile
    fdctl profile set prod --subscription 00000000-0000-0000-0000-000000000001

    # Get JSON output for scripting
    fdctl rules-engine get -g prod-rg -f contoso-fd -o json

    # Credentials from the environment (no profile needed)
    export AZURE_SUBSCRIPTION_ID=...
    export AZURE_MGMT_ACCESS_TOKEN=$(az account get-access-token --query accessToken -o tsv)

For more help on a specific command, run:
    fdctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "FDCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "FDCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Automatically choose format based on command and context
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rules engine configurations on a Front Door
    #[command(subcommand, name = "rules-engine", visible_alias = "re")]
    RulesEngine(RulesEngineCommands),

    /// Profile management
    #[command(subcommand, visible_alias = "prof")]
    Profile(ProfileCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Rules engine commands
#[derive(Subcommand, Debug)]
pub enum RulesEngineCommands {
    /// Get rules engine configurations
    #[command(after_help = "EXAMPLES:
    # List every rules engine on a front door
    fdctl rules-engine get --resource-group prod-rg --front-door contoso-fd

    # Get a single rules engine by name
    fdctl rules-engine get --resource-group prod-rg --front-door contoso-fd --name edge-rules

    # JSON output for scripting
    fdctl rules-engine get -g prod-rg -f contoso-fd -n edge-rules -o json
")]
    Get {
        /// Resource group of the Front Door
        #[arg(long, short = 'g', value_parser = non_empty)]
        resource_group: String,

        /// Front Door name
        #[arg(long, short = 'f', value_parser = non_empty)]
        front_door: String,

        /// Rules engine name (omit to list all)
        #[arg(long, short = 'n', value_parser = non_empty)]
        name: Option<String>,
    },

    /// Create or update a rules engine configuration
    #[command(after_help = "EXAMPLES:
    # Replace the rule list from a file
    fdctl rules-engine set --resource-group prod-rg --front-door contoso-fd \\
      --name edge-rules --rules @rules.json

    # Inline rule definitions
    fdctl rules-engine set -g prod-rg -f contoso-fd -n edge-rules \\
      --rules '[{\"name\":\"r1\",\"priority\":1,\"action\":{},\"matchConditions\":[]}]'

    # Clear all rules
    fdctl rules-engine set -g prod-rg -f contoso-fd -n edge-rules
")]
    Set {
        /// Resource group of the Front Door
        #[arg(long, short = 'g', value_parser = non_empty)]
        resource_group: String,

        /// Front Door name
        #[arg(long, short = 'f', value_parser = non_empty)]
        front_door: String,

        /// Rules engine name
        #[arg(long, short = 'n', value_parser = non_empty)]
        name: String,

        /// Rule definitions as a JSON array (string or @file)
        #[arg(long)]
        rules: Option<String>,
    },
}

/// Profile management commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List configured profiles
    List,

    /// Show the configuration file path
    Path,

    /// Show profile details
    Show { name: String },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,

        /// Azure subscription id
        #[arg(long)]
        subscription: String,

        /// Management access token (omit to rely on AZURE_MGMT_ACCESS_TOKEN)
        #[arg(long)]
        access_token: Option<String>,

        /// Management endpoint URL
        #[arg(long, default_value = frontdoor_mgmt::DEFAULT_MANAGEMENT_URL)]
        api_url: String,
    },

    /// Remove a profile
    Remove { name: String },

    /// Set the default profile
    Default { name: String },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value cannot be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn non_empty_rejects_whitespace() {
        assert!(non_empty("   ").is_err());
        assert!(non_empty("").is_err());
        assert_eq!(non_empty("prod-rg").unwrap(), "prod-rg");
    }
}
