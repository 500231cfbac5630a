//! Management-plane REST client for Azure Front Door rules engines
//!
//! Provides a typed client for the `Microsoft.Network/frontDoors/rulesEngines`
//! resource family: get-by-name, paginated list, and create-or-update. The
//! client is a thin wrapper over the management REST API; it performs no
//! retries, caching, or concurrent requests of its own.
//!
//! # Example
//!
//! ```no_run
//! use frontdoor_mgmt::{FrontDoorMgmtClient, RulesEngineHandler};
//!
//! # async fn example() -> frontdoor_mgmt::Result<()> {
//! let client = FrontDoorMgmtClient::builder()
//!     .subscription_id("00000000-0000-0000-0000-000000000001")
//!     .access_token("eyJ0...")
//!     .build()?;
//!
//! let handler = RulesEngineHandler::new(client);
//! let engines = handler.list_by_front_door("prod-rg", "contoso-fd").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod rules_engines;

pub use client::{API_VERSION, DEFAULT_MANAGEMENT_URL, FrontDoorMgmtClient};
pub use error::{MgmtError, Result};
pub use models::{
    HeaderAction, HeaderActionType, MatchProcessingBehavior, RulesEngine, RulesEngineAction,
    RulesEngineListResult, RulesEngineMatchCondition, RulesEngineProperties, RulesEngineRule,
    RulesEngineUpdateParameters,
};
pub use rules_engines::RulesEngineHandler;
