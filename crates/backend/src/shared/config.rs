use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory produced by `trunk build`
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dist_dir = "dist"

[logging]
dir = "target/logs"
"#;

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address '{}': {}", addr, e))
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Runs before logging is initialized, so the caller reports the source.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

/// Resolves a configured path.
///
/// Absolute paths are used as is. Relative paths are taken relative to the
/// directory of the config file, or to the working directory for the
/// embedded default.
pub fn resolve_path(source: &ConfigSource, path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match source {
        ConfigSource::File(config_path) => match config_path.parent() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        },
        ConfigSource::Embedded => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dist_dir, "dist");
        assert_eq!(config.logging.dir, "target/logs");
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_custom_config() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [static_files]
            dist_dir = "/srv/site"

            [logging]
            dir = "logs"
            "#,
        )
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 8081);
        assert_eq!(config.static_files.dist_dir, "/srv/site");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".to_string();
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_resolve_path() {
        let file = ConfigSource::File(PathBuf::from("/opt/site/config.toml"));
        assert_eq!(resolve_path(&file, "dist"), PathBuf::from("/opt/site/dist"));
        assert_eq!(resolve_path(&file, "/var/www"), PathBuf::from("/var/www"));
        assert_eq!(
            resolve_path(&ConfigSource::Embedded, "dist"),
            PathBuf::from("dist")
        );
    }
}
