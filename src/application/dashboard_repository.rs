// Repository trait for the dashboard service
use crate::domain::dashboard::Dashboard;
use crate::error::SyncError;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, SyncError>;

    async fn get_dashboard(&self, id: &str) -> Result<Dashboard, SyncError>;

    /// Returns whether the service accepted the new dashboard (201)
    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<bool, SyncError>;

    /// Returns whether the service accepted the update (200)
    async fn update_dashboard(&self, id: &str, dashboard: &Dashboard) -> Result<bool, SyncError>;
}
