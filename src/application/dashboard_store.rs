// Store trait for dashboard persistence
use crate::domain::dashboard::{Dashboard, DashboardId};
use async_trait::async_trait;

/// Key-value access to dashboards. Updates replace the whole dashboard;
/// there is no version check, so concurrent writers race and the last one wins.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Fetch a dashboard by id; errors when it does not exist
    async fn get(&self, id: DashboardId) -> anyhow::Result<Dashboard>;

    /// Replace an existing dashboard
    async fn update(&self, dashboard: Dashboard) -> anyhow::Result<()>;

    /// Store a new dashboard, assigning it the next free id
    async fn add(&self, dashboard: Dashboard) -> anyhow::Result<Dashboard>;
}
