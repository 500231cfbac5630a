//! Rules engine operations on a Front Door parent resource

use tracing::debug;

use crate::client::FrontDoorMgmtClient;
use crate::error::Result;
use crate::models::{RulesEngine, RulesEngineListResult, RulesEngineUpdateParameters};

/// Handler for the `rulesEngines` sub-resource of a Front Door.
pub struct RulesEngineHandler {
    client: FrontDoorMgmtClient,
}

impl RulesEngineHandler {
    pub fn new(client: FrontDoorMgmtClient) -> Self {
        Self { client }
    }

    fn collection_path(&self, resource_group: &str, front_door: &str) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/frontDoors/{}/rulesEngines",
            self.client.subscription_id(),
            resource_group,
            front_door
        )
    }

    /// Fetch a single rules engine configuration by name.
    pub async fn get(
        &self,
        resource_group: &str,
        front_door: &str,
        name: &str,
    ) -> Result<RulesEngine> {
        let path = format!(
            "{}/{}",
            self.collection_path(resource_group, front_door),
            name
        );
        self.client.get_json(&path).await
    }

    /// List every rules engine configured on a Front Door.
    ///
    /// Follows the `nextLink` continuation until the service stops returning
    /// one, preserving server order across page boundaries. Traversal is
    /// sequential; each page is requested only after the previous one arrived.
    pub async fn list_by_front_door(
        &self,
        resource_group: &str,
        front_door: &str,
    ) -> Result<Vec<RulesEngine>> {
        let path = self.collection_path(resource_group, front_door);
        let mut page: RulesEngineListResult = self.client.get_json(&path).await?;

        let mut engines = Vec::new();
        loop {
            engines.append(&mut page.value);
            match page.next_link.take() {
                Some(link) if !link.is_empty() => {
                    debug!(%link, "following continuation link");
                    page = self.client.get_absolute(&link).await?;
                }
                _ => break,
            }
        }
        Ok(engines)
    }

    /// Create or update a rules engine configuration.
    pub async fn create_or_update(
        &self,
        resource_group: &str,
        front_door: &str,
        name: &str,
        parameters: &RulesEngineUpdateParameters,
    ) -> Result<RulesEngine> {
        let path = format!(
            "{}/{}",
            self.collection_path(resource_group, front_door),
            name
        );
        self.client.put_json(&path, parameters).await
    }
}
