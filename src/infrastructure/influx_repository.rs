// InfluxDB repository implementation
use crate::application::host_repository::HostRepository;
use crate::error::SyncError;
use crate::infrastructure::config::{InfluxSettings, quote_identifier};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Tag Sensu writes the entity name into
pub const HOST_TAG: &str = "sensu_entity_name";

/// `SHOW TAG VALUES` for the host tag across the whole database
fn host_tag_query(database: &str) -> String {
    format!(
        r#"SHOW TAG VALUES ON "{}" WITH KEY = "{}""#,
        quote_identifier(database),
        HOST_TAG
    )
}

#[derive(Debug, Clone)]
pub struct InfluxRepository {
    client: reqwest::Client,
    host: String,
    database: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResponse {
    #[serde(default)]
    results: Vec<InfluxQLResult>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResult {
    #[serde(default)]
    series: Option<Vec<InfluxQLSeries>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLSeries {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl InfluxRepository {
    pub fn new(client: reqwest::Client, settings: InfluxSettings) -> Self {
        Self {
            client,
            host: settings.url.trim_end_matches('/').to_string(),
            database: settings.database,
            username: settings.username,
            password: settings.password,
        }
    }

    fn build_query_url(&self, database: &str, query: &str) -> String {
        format!(
            "{}/query?db={}&q={}",
            self.host,
            urlencoding::encode(database),
            urlencoding::encode(query)
        )
    }

    async fn execute_query(&self, database: &str, query: &str) -> Result<InfluxQLResponse, SyncError> {
        let url = self.build_query_url(database, query);
        tracing::debug!("Executing InfluxQL query: {}", query);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        // A password alone is sent with an empty username
        if self.username.is_some() || self.password.is_some() {
            let username = self.username.as_deref().unwrap_or_default();
            request = request.basic_auth(username, self.password.as_ref());
        }

        let response = request.send().await.map_err(|source| SyncError::Transport {
            url: self.host.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| SyncError::Transport {
            url: self.host.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(SyncError::UnexpectedStatus {
                url: self.host.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let data: InfluxQLResponse =
            serde_json::from_str(&body).map_err(|source| SyncError::Parse {
                url: self.host.clone(),
                source,
            })?;

        // Check for errors in the response
        if let Some(error) = data.results.iter().find_map(|r| r.error.as_ref()) {
            return Err(SyncError::QueryFailed(error.clone()));
        }

        Ok(data)
    }
}

/// Values of every `key`/`value` row whose key is `tag`
fn tag_values(response: &InfluxQLResponse, tag: &str) -> BTreeSet<String> {
    let mut values = BTreeSet::new();

    for series in response.results.iter().filter_map(|r| r.series.as_ref()).flatten() {
        let key_idx = series.columns.iter().position(|c| c == "key").unwrap_or(0);
        let value_idx = series.columns.iter().position(|c| c == "value").unwrap_or(1);

        for row in &series.values {
            let key = row.get(key_idx).and_then(|k| k.as_str());
            let value = row.get(value_idx).and_then(|v| v.as_str());

            if let (Some(key), Some(value)) = (key, value) {
                if key == tag {
                    values.insert(value.to_string());
                }
            }
        }
    }

    values
}

#[async_trait]
impl HostRepository for InfluxRepository {
    async fn list_hosts(&self) -> Result<BTreeSet<String>, SyncError> {
        let database = self
            .database
            .as_deref()
            .ok_or(SyncError::MissingSetting("--influxdb-db"))?;

        let query = host_tag_query(database);

        let response = self.execute_query(database, &query).await?;
        let hosts = tag_values(&response, HOST_TAG);

        tracing::debug!("Found {} hosts in InfluxDB database {}", hosts.len(), database);
        Ok(hosts)
    }
}
