// In-memory dashboard store with an optional JSON snapshot file
use crate::application::dashboard_store::DashboardStore;
use crate::domain::dashboard::{Dashboard, DashboardId};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryDashboardStore {
    dashboards: RwLock<BTreeMap<DashboardId, Dashboard>>,
    snapshot: Option<PathBuf>,
}

impl InMemoryDashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load dashboards from `path` if it exists. Every later write rewrites the file.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut dashboards = BTreeMap::new();

        let exists = tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check snapshot {}", path.display()))?;
        if exists {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            let stored: Vec<Dashboard> = serde_json::from_slice(&bytes)
                .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
            for dashboard in stored {
                dashboards.insert(dashboard.id, dashboard);
            }
            tracing::info!("Loaded {} dashboards from {}", dashboards.len(), path.display());
        } else {
            tracing::info!("No snapshot at {}, starting empty", path.display());
        }

        Ok(Self {
            dashboards: RwLock::new(dashboards),
            snapshot: Some(path),
        })
    }

    /// Write the snapshot before the in-memory map changes so a failed
    /// write leaves both sides untouched.
    async fn write_snapshot(&self, dashboards: &BTreeMap<DashboardId, Dashboard>) -> Result<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };

        let all: Vec<&Dashboard> = dashboards.values().collect();
        let bytes = serde_json::to_vec_pretty(&all).context("Failed to encode dashboards")?;
        ensure_parent(path).await?;

        // Replace the snapshot by rename so a crash mid-write never truncates it.
        let staging = staging_path(path);
        tokio::fs::write(&staging, bytes)
            .await
            .with_context(|| format!("Failed to write snapshot {}", staging.display()))?;
        tokio::fs::rename(&staging, path)
            .await
            .with_context(|| format!("Failed to replace snapshot {}", path.display()))
    }
}

/// Sibling of the snapshot that receives each new version before the rename
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

async fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display())),
        _ => Ok(()),
    }
}

#[async_trait]
impl DashboardStore for InMemoryDashboardStore {
    async fn get(&self, id: DashboardId) -> Result<Dashboard> {
        self.dashboards
            .read()
            .await
            .get(&id)
            .cloned()
            .with_context(|| format!("Dashboard {} not found", id))
    }

    async fn update(&self, dashboard: Dashboard) -> Result<()> {
        let mut dashboards = self.dashboards.write().await;
        if !dashboards.contains_key(&dashboard.id) {
            anyhow::bail!("Dashboard {} not found", dashboard.id);
        }

        let mut next = dashboards.clone();
        next.insert(dashboard.id, dashboard);
        self.write_snapshot(&next).await?;
        *dashboards = next;
        Ok(())
    }

    async fn add(&self, mut dashboard: Dashboard) -> Result<Dashboard> {
        let mut dashboards = self.dashboards.write().await;
        let next_id = dashboards.keys().next_back().map_or(1, |id| id.0 + 1);
        dashboard.id = DashboardId(next_id);

        let mut next = dashboards.clone();
        next.insert(dashboard.id, dashboard.clone());
        self.write_snapshot(&next).await?;
        *dashboards = next;

        tracing::debug!("Stored dashboard {}", dashboard.id);
        Ok(dashboard)
    }
}
