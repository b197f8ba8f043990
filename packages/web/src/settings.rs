use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Deployment mode, `REMARK_MODE`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Test,
    Production,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`.
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub mode: Mode,
    pub server: Server,
    pub log: Log,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_environment(environment())
    }

    fn with_environment(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("mode", "development")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000_i64)?
            .set_default("log.filter", "info,tower_http=debug")?
            .add_source(
                File::with_name("remark.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

/// `REMARK_SERVER__PORT=8080` sets `server.port`.
fn environment() -> Environment {
    Environment::with_prefix("REMARK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let source: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::with_environment(environment().source(Some(source)))
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[]).unwrap();
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.log.filter, "info,tower_http=debug");
    }

    #[test]
    fn test_environment_overrides() {
        let settings = load(&[
            ("REMARK_MODE", "production"),
            ("REMARK_SERVER__HOST", "0.0.0.0"),
            ("REMARK_SERVER__PORT", "8080"),
            ("REMARK_LOG__FILTER", "warn"),
        ])
        .unwrap();
        assert_eq!(settings.mode, Mode::Production);
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.log.filter, "warn");
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(load(&[("REMARK_MODE", "staging")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(load(&[("REMARK_SERVER__PORT", "not-a-port")]).is_err());
    }
}
