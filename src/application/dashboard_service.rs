// Dashboard service - Use cases for dashboards and their cells
use crate::application::cell_validator::valid_dashboard_cell_request;
use crate::application::dashboard_store::DashboardStore;
use crate::application::id_generator::IdGenerator;
use crate::domain::cell::{Axis, DashboardCell};
use crate::domain::dashboard::{Dashboard, DashboardId};
use crate::domain::errors::CellError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("ID {0} not found")]
    NotFound(String),

    #[error(transparent)]
    InvalidData(#[from] CellError),

    #[error("{message}: {cause}")]
    IdGeneration { message: String, cause: anyhow::Error },

    #[error("{message}: {cause}")]
    Persistence { message: String, cause: anyhow::Error },
}

/// Every mutation is a read-modify-write of the whole dashboard.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    ids: Arc<dyn IdGenerator>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn dashboard(&self, id: DashboardId) -> Result<Dashboard, ServiceError> {
        self.store.get(id).await.map_err(|e| {
            tracing::debug!("Dashboard {} unavailable: {:#}", id, e);
            ServiceError::NotFound(id.to_string())
        })
    }

    /// Validate and store a new dashboard; every cell gets a fresh id.
    pub async fn create_dashboard(
        &self,
        mut dashboard: Dashboard,
    ) -> Result<Dashboard, ServiceError> {
        for cell in &mut dashboard.cells {
            valid_dashboard_cell_request(cell)?;
            cell.id = self.ids.generate().map_err(|cause| ServiceError::IdGeneration {
                message: format!("Error creating cell ID of new dashboard {}", dashboard.name),
                cause,
            })?;
        }

        let created = self.store.add(dashboard).await.map_err(|cause| ServiceError::Persistence {
            message: "Error storing dashboard".to_string(),
            cause,
        })?;

        tracing::info!("Created dashboard {} with {} cells", created.id, created.cells.len());
        Ok(created)
    }

    /// Append a validated cell and return it as stored.
    pub async fn add_cell(
        &self,
        mut dashboard: Dashboard,
        mut cell: DashboardCell,
    ) -> Result<DashboardCell, ServiceError> {
        let dashboard_id = dashboard.id;
        valid_dashboard_cell_request(&mut cell)?;

        let cell_id = self.ids.generate().map_err(|cause| ServiceError::IdGeneration {
            message: format!("Error creating cell ID of dashboard {}", dashboard_id),
            cause,
        })?;
        cell.id = cell_id.clone();

        dashboard.cells.push(cell.clone());
        self.store.update(dashboard).await.map_err(|cause| ServiceError::Persistence {
            message: format!("Error adding cell {} to dashboard {}", cell_id, dashboard_id),
            cause,
        })?;

        tracing::info!("Added cell {} to dashboard {}", cell_id, dashboard_id);
        Ok(cell)
    }

    /// Replace a cell wholesale. The stored cell keeps `cell_id` whatever id the
    /// submitted body carries.
    pub async fn replace_cell(
        &self,
        mut dashboard: Dashboard,
        cell_id: &str,
        mut cell: DashboardCell,
    ) -> Result<DashboardCell, ServiceError> {
        let dashboard_id = dashboard.id;
        let index = dashboard
            .cell_index(cell_id)
            .ok_or_else(|| ServiceError::NotFound(cell_id.to_string()))?;

        for axis in cell.axes.values_mut() {
            if axis.bounds.is_empty() {
                axis.bounds = Axis::unbounded().bounds;
            }
        }

        valid_dashboard_cell_request(&mut cell)?;
        cell.id = cell_id.to_string();

        dashboard.cells[index] = cell.clone();
        self.store.update(dashboard).await.map_err(|cause| ServiceError::Persistence {
            message: format!("Error updating cell {} in dashboard {}", cell_id, dashboard_id),
            cause,
        })?;

        tracing::info!("Replaced cell {} in dashboard {}", cell_id, dashboard_id);
        Ok(cell)
    }

    pub async fn remove_cell(
        &self,
        mut dashboard: Dashboard,
        cell_id: &str,
    ) -> Result<(), ServiceError> {
        let dashboard_id = dashboard.id;
        let index = dashboard
            .cell_index(cell_id)
            .ok_or_else(|| ServiceError::NotFound(dashboard_id.to_string()))?;

        dashboard.cells.remove(index);
        self.store.update(dashboard).await.map_err(|cause| ServiceError::Persistence {
            message: format!("Error removing cell {} from dashboard {}", cell_id, dashboard_id),
            cause,
        })?;

        tracing::info!("Removed cell {} from dashboard {}", cell_id, dashboard_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::InMemoryDashboardStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> anyhow::Result<String> {
            Ok(format!("cell-{}", self.0.fetch_add(1, Ordering::SeqCst)))
        }
    }

    /// Serves reads from an inner store but refuses every write
    struct ReadOnlyStore(InMemoryDashboardStore);

    #[async_trait]
    impl DashboardStore for ReadOnlyStore {
        async fn get(&self, id: DashboardId) -> anyhow::Result<Dashboard> {
            self.0.get(id).await
        }

        async fn update(&self, _dashboard: Dashboard) -> anyhow::Result<()> {
            anyhow::bail!("store is read-only")
        }

        async fn add(&self, _dashboard: Dashboard) -> anyhow::Result<Dashboard> {
            anyhow::bail!("store is read-only")
        }
    }

    async fn service_with_dashboard() -> (DashboardService, DashboardId) {
        let store = Arc::new(InMemoryDashboardStore::new());
        let dashboard = store
            .add(Dashboard::new("ops".to_string(), Vec::new()))
            .await
            .unwrap();
        let service = DashboardService::new(store, Arc::new(SequentialIds(AtomicUsize::new(0))));
        (service, dashboard.id)
    }

    #[tokio::test]
    async fn test_add_cell_assigns_id_and_persists() {
        let (service, id) = service_with_dashboard().await;
        let dashboard = service.dashboard(id).await.unwrap();

        let cell = service.add_cell(dashboard, DashboardCell::default()).await.unwrap();
        assert_eq!(cell.id, "cell-0");
        assert_eq!((cell.w, cell.h), (4, 4));

        let stored = service.dashboard(id).await.unwrap();
        assert_eq!(stored.cells, vec![cell]);
    }

    #[tokio::test]
    async fn test_add_invalid_cell_is_not_stored() {
        let (service, id) = service_with_dashboard().await;
        let dashboard = service.dashboard(id).await.unwrap();
        let mut cell = DashboardCell::default();
        cell.legend.kind = "static".to_string();

        let err = service.add_cell(dashboard, cell).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidData(CellError::InvalidLegend)));
        assert!(service.dashboard(id).await.unwrap().cells.is_empty());
    }

    #[tokio::test]
    async fn test_replace_cell_keeps_path_id_and_backfills_bounds() {
        let (service, id) = service_with_dashboard().await;
        let dashboard = service.dashboard(id).await.unwrap();
        let original = service.add_cell(dashboard, DashboardCell::default()).await.unwrap();

        let mut replacement = DashboardCell {
            id: "something-else".to_string(),
            name: "renamed".to_string(),
            ..Default::default()
        };
        replacement.axes.insert("y".to_string(), Axis::default());

        let dashboard = service.dashboard(id).await.unwrap();
        let updated = service
            .replace_cell(dashboard, &original.id, replacement)
            .await
            .unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.axes["y"].bounds, vec!["", ""]);

        let stored = service.dashboard(id).await.unwrap();
        assert_eq!(stored.cells.len(), 1);
        assert_eq!(stored.cells[0].name, "renamed");
    }

    #[tokio::test]
    async fn test_remove_missing_cell_is_not_found() {
        let (service, id) = service_with_dashboard().await;
        let dashboard = service.dashboard(id).await.unwrap();

        let err = service.remove_cell(dashboard, "nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_dashboard_is_not_found() {
        let (service, _) = service_with_dashboard().await;
        let err = service.dashboard(DashboardId(99)).await.unwrap_err();
        assert_eq!(err.to_string(), "ID 99 not found");
    }

    #[tokio::test]
    async fn test_persistence_failure_names_cell_and_dashboard() {
        let inner = InMemoryDashboardStore::new();
        let dashboard = inner
            .add(Dashboard::new("ops".to_string(), Vec::new()))
            .await
            .unwrap();
        let service = DashboardService::new(
            Arc::new(ReadOnlyStore(inner)),
            Arc::new(SequentialIds(AtomicUsize::new(7))),
        );

        let err = service
            .add_cell(dashboard, DashboardCell::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Persistence { .. }));
        assert_eq!(
            err.to_string(),
            "Error adding cell cell-7 to dashboard 1: store is read-only"
        );
    }

    #[tokio::test]
    async fn test_create_dashboard_validates_and_assigns_cell_ids() {
        let (service, _) = service_with_dashboard().await;
        let dashboard = Dashboard::new(
            "network".to_string(),
            vec![DashboardCell::default(), DashboardCell::default()],
        );

        let created = service.create_dashboard(dashboard).await.unwrap();
        assert_eq!(created.id, DashboardId(2));
        let ids: Vec<_> = created.cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cell-0", "cell-1"]);
        assert!(created.cells.iter().all(|c| c.w == 4 && c.h == 4));
    }
}
