//! Connection management for the Front Door management client

use anyhow::Context;
use frontdoor_mgmt::FrontDoorMgmtClient;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FdctlError, Result as CliResult};

/// User agent string for fdctl HTTP requests
const FDCTL_USER_AGENT: &str = concat!("fdctl/", env!("CARGO_PKG_VERSION"));

/// Connection manager for creating authenticated management clients
#[derive(Clone)]
pub struct ConnectionManager {
    pub config: Config,
    pub config_path: Option<std::path::PathBuf>,
}

impl ConnectionManager {
    pub fn with_config_path(config: Config, config_path: Option<std::path::PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    /// Persist a modified configuration to the active location.
    pub fn save_config(&self, config: &Config) -> CliResult<()> {
        if let Some(ref path) = self.config_path {
            config
                .save_to_path(path)
                .context("Failed to save configuration")?;
        } else {
            config.save().context("Failed to save configuration")?;
        }
        Ok(())
    }

    /// Create a management client from profile credentials with environment
    /// variable override support.
    ///
    /// When --config-file is explicitly specified, environment variables are
    /// ignored so the config file fully determines the connection. Otherwise a
    /// complete `AZURE_SUBSCRIPTION_ID` + `AZURE_MGMT_ACCESS_TOKEN` pair wins
    /// over the profile, and partial overrides apply on top of it.
    pub async fn create_client(&self, profile_name: Option<&str>) -> CliResult<FrontDoorMgmtClient> {
        let use_env_vars = self.config_path.is_none();
        if !use_env_vars {
            debug!("--config-file specified explicitly, ignoring environment variables");
        }

        let env_subscription = if use_env_vars {
            std::env::var("AZURE_SUBSCRIPTION_ID").ok()
        } else {
            None
        };
        let env_token = if use_env_vars {
            std::env::var("AZURE_MGMT_ACCESS_TOKEN").ok()
        } else {
            None
        };
        let env_url = if use_env_vars {
            std::env::var("AZURE_MGMT_URL").ok()
        } else {
            None
        };

        let (subscription_id, access_token, api_url) =
            if let (Some(sub), Some(token)) = (&env_subscription, &env_token) {
                info!("Using management credentials from environment variables");
                let url = env_url
                    .clone()
                    .unwrap_or_else(|| frontdoor_mgmt::DEFAULT_MANAGEMENT_URL.to_string());
                (sub.clone(), token.clone(), url)
            } else {
                let resolved = self.config.resolve_profile(profile_name)?;
                info!("Using profile: {}", resolved);

                let profile = self.config.profiles.get(&resolved).ok_or_else(|| {
                    FdctlError::ProfileNotFound {
                        name: resolved.clone(),
                    }
                })?;

                let access_token = env_token
                    .clone()
                    .or_else(|| profile.access_token.clone())
                    .ok_or_else(|| FdctlError::MissingCredentials {
                        name: resolved.clone(),
                    })?;
                let subscription_id = env_subscription
                    .clone()
                    .unwrap_or_else(|| profile.subscription_id.clone());
                let api_url = env_url.clone().unwrap_or_else(|| profile.api_url.clone());

                (subscription_id, access_token, api_url)
            };

        info!("Connecting to management endpoint: {}", api_url);
        debug!("Subscription: {}", subscription_id);

        let client = FrontDoorMgmtClient::builder()
            .subscription_id(&subscription_id)
            .access_token(&access_token)
            .base_url(&api_url)
            .user_agent(FDCTL_USER_AGENT)
            .build()
            .context("Failed to create management client")?;

        Ok(client)
    }
}
