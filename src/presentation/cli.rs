// Command line definition
use crate::infrastructure::config::{
    ChronografSettings, DEFAULT_CHRONOGRAF_URL, DEFAULT_INFLUX_URL, InfluxSettings, Settings,
};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chronograf-dashboards")]
#[command(version, about = "Create Chronograf dashboards for hosts known to InfluxDB")]
pub struct Cli {
    /// Id of the dashboard used as template
    #[arg(long)]
    pub template: String,

    /// Template variable that selects the host
    #[arg(long = "host-var")]
    pub host_var: String,

    /// Chronograf base URL
    #[arg(long = "chronograf-url", value_name = "URL", default_value = DEFAULT_CHRONOGRAF_URL)]
    pub chronograf_url: String,

    /// InfluxDB base URL
    #[arg(long = "influxdb-url", value_name = "URL", default_value = DEFAULT_INFLUX_URL)]
    pub influxdb_url: String,

    /// InfluxDB database holding the Sensu metrics
    #[arg(long = "influxdb-db", value_name = "DB")]
    pub influxdb_db: Option<String>,

    #[arg(long = "influxdb-username", value_name = "USERNAME")]
    pub influxdb_username: Option<String>,

    #[arg(long = "influxdb-password", value_name = "PASSWORD")]
    pub influxdb_password: Option<String>,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// create-missing | create HOST | update ID HOST
    #[arg(value_name = "ACTION")]
    pub args: Vec<String>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            template: self.template.clone(),
            host_var: self.host_var.clone(),
            chronograf: ChronografSettings {
                url: self.chronograf_url.clone(),
            },
            influx: InfluxSettings {
                url: self.influxdb_url.clone(),
                database: self.influxdb_db.clone(),
                username: self.influxdb_username.clone(),
                password: self.influxdb_password.clone(),
            },
        }
    }
}
