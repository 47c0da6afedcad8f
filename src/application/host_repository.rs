// Repository trait for the monitoring store
use crate::error::SyncError;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
pub trait HostRepository: Send + Sync {
    /// Every distinct host the monitoring store has ever seen
    async fn list_hosts(&self) -> Result<BTreeSet<String>, SyncError>;
}
