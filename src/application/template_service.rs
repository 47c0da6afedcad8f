// Template service - Builds host dashboards from a template dashboard
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::Dashboard;
use crate::error::SyncError;
use std::fmt;
use std::sync::Arc;

/// Result of a single-host write against the dashboard service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { host: String },
    CreateFailed { host: String },
    /// `accepted` is false when the service did not answer 200
    Updated { id: String, host: String, accepted: bool },
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        match self {
            Outcome::Created { .. } => true,
            Outcome::CreateFailed { .. } => false,
            Outcome::Updated { accepted, .. } => *accepted,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { host } => write!(f, "Dashboard created: {}", host),
            Outcome::CreateFailed { host } => write!(f, "Failed to create dashboard: {}", host),
            Outcome::Updated { id, host, .. } => write!(f, "Dashboard updated ({}): {}", id, host),
        }
    }
}

#[derive(Clone)]
pub struct TemplateService {
    dashboards: Arc<dyn DashboardRepository>,
    host_var: String,
}

impl TemplateService {
    pub fn new(dashboards: Arc<dyn DashboardRepository>, host_var: String) -> Self {
        Self {
            dashboards,
            host_var,
        }
    }

    pub fn host_var(&self) -> &str {
        &self.host_var
    }

    /// Fetch the template and rebind it to `host` under `name`
    pub async fn materialize(
        &self,
        template_id: &str,
        name: &str,
        host: &str,
    ) -> Result<Dashboard, SyncError> {
        let mut dashboard = self.dashboards.get_dashboard(template_id).await?;
        dashboard.name = name.to_string();
        dashboard.bind_host(&self.host_var, host)?;

        tracing::debug!("Materialized template {} for host {}", template_id, host);
        Ok(dashboard)
    }

    pub async fn create_for_host(&self, template_id: &str, host: &str) -> Result<Outcome, SyncError> {
        let dashboard = self.materialize(template_id, host, host).await?;

        if self.dashboards.create_dashboard(&dashboard).await? {
            tracing::info!("Created dashboard for host {}", host);
            Ok(Outcome::Created {
                host: host.to_string(),
            })
        } else {
            tracing::warn!("Dashboard service rejected dashboard for host {}", host);
            Ok(Outcome::CreateFailed {
                host: host.to_string(),
            })
        }
    }

    pub async fn update_for_host(
        &self,
        template_id: &str,
        id: &str,
        host: &str,
    ) -> Result<Outcome, SyncError> {
        let dashboard = self.materialize(template_id, host, host).await?;
        let accepted = self.dashboards.update_dashboard(id, &dashboard).await?;

        if !accepted {
            tracing::warn!("Dashboard service did not confirm update of dashboard {}", id);
        }

        Ok(Outcome::Updated {
            id: id.to_string(),
            host: host.to_string(),
            accepted,
        })
    }
}
