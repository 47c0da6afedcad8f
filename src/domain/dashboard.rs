// Dashboard domain model
use crate::error::SyncError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Dashboard identifier as assigned by Chronograf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardId {
    Number(u64),
    Text(String),
}

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardId::Number(n) => write!(f, "{}", n),
            DashboardId::Text(s) => f.write_str(s),
        }
    }
}

/// A Chronograf dashboard. Only `name` and the template variables are
/// interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DashboardId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub templates: Vec<TemplateEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of `templates`. Entries that do not look like a template
/// variable are kept as raw JSON so they still round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateEntry {
    Variable(TemplateVariable),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    #[serde(rename = "tempVar")]
    pub temp_var: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<TemplateValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateValue {
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Go encodes nil slices as `null`; treat that like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Dashboard {
    pub fn variables(&self) -> impl Iterator<Item = &TemplateVariable> {
        self.templates.iter().filter_map(|entry| match entry {
            TemplateEntry::Variable(variable) => Some(variable),
            TemplateEntry::Other(_) => None,
        })
    }

    /// All values of every template variable keyed by `host_var`
    pub fn host_values<'a>(&'a self, host_var: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.variables()
            .filter(move |t| t.temp_var == host_var)
            .flat_map(|t| t.values.iter().map(|v| v.value.as_str()))
    }

    /// Point the first `host_var` template variable at `host`
    pub fn bind_host(&mut self, host_var: &str, host: &str) -> Result<(), SyncError> {
        let variable = self
            .templates
            .iter_mut()
            .find_map(|entry| match entry {
                TemplateEntry::Variable(variable) if variable.temp_var == host_var => Some(variable),
                _ => None,
            })
            .ok_or_else(|| SyncError::TemplateBindingNotFound {
                dashboard: self.name.clone(),
                host_var: host_var.to_string(),
            })?;

        let slot = variable
            .values
            .first_mut()
            .ok_or_else(|| SyncError::EmptyCandidateList {
                dashboard: self.name.clone(),
                host_var: host_var.to_string(),
            })?;

        slot.value = host.to_string();
        Ok(())
    }
}
