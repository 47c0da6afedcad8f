// Chronograf repository implementation
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::Dashboard;
use crate::error::SyncError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const API_PREFIX: &str = "/chronograf/v1";

#[derive(Debug, Clone)]
pub struct ChronografRepository {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DashboardList {
    #[serde(default)]
    dashboards: Vec<Dashboard>,
}

impl ChronografRepository {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            base_url: format!("{}{}", url.trim_end_matches('/'), API_PREFIX),
        }
    }

    fn dashboards_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/dashboards/{}", self.base_url, urlencoding::encode(id)),
            None => format!("{}/dashboards", self.base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        let transport = |source: reqwest::Error| SyncError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(SyncError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| SyncError::Parse {
            url: url.to_string(),
            source,
        })
    }

    async fn post_dashboard(&self, url: &str, dashboard: &Dashboard) -> Result<StatusCode, SyncError> {
        let response = self
            .client
            .post(url)
            .json(dashboard)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("POST {} answered {}", url, status);
        Ok(status)
    }
}

#[async_trait]
impl DashboardRepository for ChronografRepository {
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, SyncError> {
        let list: DashboardList = self.get_json(&self.dashboards_url(None)).await?;
        tracing::debug!("Chronograf lists {} dashboards", list.dashboards.len());
        Ok(list.dashboards)
    }

    async fn get_dashboard(&self, id: &str) -> Result<Dashboard, SyncError> {
        self.get_json(&self.dashboards_url(Some(id))).await
    }

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<bool, SyncError> {
        let status = self.post_dashboard(&self.dashboards_url(None), dashboard).await?;
        Ok(status == StatusCode::CREATED)
    }

    async fn update_dashboard(&self, id: &str, dashboard: &Dashboard) -> Result<bool, SyncError> {
        let status = self.post_dashboard(&self.dashboards_url(Some(id)), dashboard).await?;
        Ok(status == StatusCode::OK)
    }
}
