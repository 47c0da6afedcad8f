pub const DEFAULT_CHRONOGRAF_URL: &str = "http://localhost:8888";
pub const DEFAULT_INFLUX_URL: &str = "http://localhost:8086";

/// Everything the tool needs to know, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Settings {
    pub template: String,
    pub host_var: String,
    pub chronograf: ChronografSettings,
    pub influx: InfluxSettings,
}

#[derive(Debug, Clone)]
pub struct ChronografSettings {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct InfluxSettings {
    pub url: String,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Escape a value for use inside a double-quoted InfluxQL identifier
pub fn quote_identifier(identifier: &str) -> String {
    identifier.replace('\\', "\\\\").replace('"', "\\\"")
}
