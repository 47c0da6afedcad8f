// In-memory repositories for use case tests
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::host_repository::HostRepository;
use crate::domain::dashboard::{Dashboard, DashboardId};
use crate::error::SyncError;
use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct StaticHosts {
    hosts: Vec<String>,
    pub calls: AtomicUsize,
}

impl StaticHosts {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HostRepository for StaticHosts {
    async fn list_hosts(&self) -> Result<BTreeSet<String>, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.hosts.iter().cloned().collect())
    }
}

/// Dashboard store that assigns ids on create and answers with
/// configurable acceptance.
pub struct InMemoryDashboards {
    pub dashboards: Mutex<Vec<Dashboard>>,
    pub created: Mutex<Vec<Dashboard>>,
    pub updated: Mutex<Vec<(String, Dashboard)>>,
    pub accept_writes: bool,
    pub calls: AtomicUsize,
}

impl InMemoryDashboards {
    pub fn new(dashboards: Vec<Dashboard>) -> Self {
        Self {
            dashboards: Mutex::new(dashboards),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            accept_writes: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(dashboards: Vec<Dashboard>) -> Self {
        Self {
            accept_writes: false,
            ..Self::new(dashboards)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboards {
    async fn list_dashboards(&self) -> Result<Vec<Dashboard>, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.dashboards.lock().unwrap().clone())
    }

    async fn get_dashboard(&self, id: &str) -> Result<Dashboard, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.dashboards
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id.as_ref().map(|i| i.to_string()).as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| SyncError::UnexpectedStatus {
                url: format!("/dashboards/{}", id),
                status: 404,
                body: String::new(),
            })
    }

    async fn create_dashboard(&self, dashboard: &Dashboard) -> Result<bool, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(dashboard.clone());
        if self.accept_writes {
            let mut dashboards = self.dashboards.lock().unwrap();
            let mut stored = dashboard.clone();
            stored.id = Some(DashboardId::Number(100 + dashboards.len() as u64));
            dashboards.push(stored);
        }
        Ok(self.accept_writes)
    }

    async fn update_dashboard(&self, id: &str, dashboard: &Dashboard) -> Result<bool, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), dashboard.clone()));
        Ok(self.accept_writes)
    }
}

/// A dashboard bound to `hosts` through the `host` template variable
pub fn dashboard(id: u64, name: &str, hosts: &[&str]) -> Dashboard {
    let values: Vec<_> = hosts
        .iter()
        .map(|h| json!({"value": h, "type": "tagValue", "selected": false}))
        .collect();

    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "cells": [{"i": "cpu", "queries": [{"query": "SELECT mean(usage) FROM cpu WHERE host = :host:"}]}],
        "templates": [
            {"tempVar": "host", "type": "tagValues", "values": values}
        ]
    }))
    .unwrap()
}
