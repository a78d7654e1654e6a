use {
    crate::domain::{
        error::ConnectorError,
        id::ServiceId,
        provider::{ProviderApi, ServiceEntry},
    },
    tokio::sync::Mutex,
};

/// Process-wide cache of the Provider's service catalog.
///
/// Populated lazily on first lookup and kept for the life of the process;
/// it refetches only while the cached list is empty. The mutex is held
/// across the populate call, so concurrent cold-cache lookups trigger a
/// single remote fetch.
pub struct ServiceCatalog {
    entries: Mutex<Vec<ServiceEntry>>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Finds the catalog entry for `service_id`, fetching the list from the
    /// Provider first if the cache is empty.
    pub async fn get_service(
        &self,
        api: &dyn ProviderApi,
        service_id: ServiceId,
    ) -> Result<ServiceEntry, ConnectorError> {
        let mut entries = self.entries.lock().await;

        if entries.is_empty() {
            *entries = api.get_services_list().await?;
            tracing::debug!(count = entries.len(), "service catalog populated");
        }

        entries
            .iter()
            .find(|entry| entry.id_servicio == service_id.value())
            .cloned()
            .ok_or(ConnectorError::ServiceNotFound(service_id.value()))
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
