// Reconciler - Finds monitored hosts without a dashboard and creates them
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::host_repository::HostRepository;
use crate::application::template_service::{Outcome, TemplateService};
use crate::error::SyncError;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct Reconciler {
    hosts: Arc<dyn HostRepository>,
    dashboards: Arc<dyn DashboardRepository>,
    templates: TemplateService,
}

impl Reconciler {
    pub fn new(
        hosts: Arc<dyn HostRepository>,
        dashboards: Arc<dyn DashboardRepository>,
        templates: TemplateService,
    ) -> Self {
        Self {
            hosts,
            dashboards,
            templates,
        }
    }

    /// Hosts already bound by some dashboard's host variable
    pub async fn dashboard_hosts(&self) -> Result<BTreeSet<String>, SyncError> {
        let host_var = self.templates.host_var();
        let dashboards = self.dashboards.list_dashboards().await?;

        Ok(dashboards
            .iter()
            .flat_map(|d| d.host_values(host_var))
            .map(str::to_string)
            .collect())
    }

    pub async fn hosts_missing_dashboards(&self) -> Result<BTreeSet<String>, SyncError> {
        let monitored = self.hosts.list_hosts().await?;
        let covered = self.dashboard_hosts().await?;

        tracing::debug!(
            "{} monitored hosts, {} hosts with dashboards",
            monitored.len(),
            covered.len()
        );

        Ok(monitored.difference(&covered).cloned().collect())
    }

    /// Create a dashboard from `template_id` for every uncovered host.
    /// A rejected create is reported and the run continues; any other
    /// error stops it.
    pub async fn create_missing_dashboards(&self, template_id: &str) -> Result<Vec<Outcome>, SyncError> {
        let missing = self.hosts_missing_dashboards().await?;
        tracing::info!("{} hosts are missing a dashboard", missing.len());

        let mut outcomes = Vec::with_capacity(missing.len());
        for host in &missing {
            outcomes.push(self.templates.create_for_host(template_id, host).await?);
        }

        Ok(outcomes)
    }
}
