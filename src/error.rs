// Error type shared by every layer
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{url} answered with status {status}: {body}")]
    UnexpectedStatus { url: String, status: u16, body: String },

    #[error("InfluxDB query error: {0}")]
    QueryFailed(String),

    #[error("dashboard '{dashboard}' has no template variable named '{host_var}'")]
    TemplateBindingNotFound { dashboard: String, host_var: String },

    #[error("template variable '{host_var}' of dashboard '{dashboard}' has no values")]
    EmptyCandidateList { dashboard: String, host_var: String },

    #[error("Invalid action '{0}'")]
    InvalidAction(String),

    #[error("action '{action}' requires argument {argument}")]
    MissingArgument {
        action: &'static str,
        argument: &'static str,
    },

    #[error("missing setting {0}")]
    MissingSetting(&'static str),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
