use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const USAGE: &str = "Usage: staticserve <document_root> <port>\n       staticserve <config.yaml>";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub access_log: AccessLogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. "0.0.0.0:8080".
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory all servable files live under.
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessLogConfig {
    /// Directory the daily access log files are written to.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

/// A startup problem: bad arguments, an unusable document root or an
/// unreadable config file. Reported together with [`USAGE`] before any
/// socket is bound.
#[derive(Debug)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Builds a config from the command line: either `<document_root>
    /// <port>`, or a single YAML config file.
    pub fn from_args<I>(mut args: I) -> Result<Self, ConfigError>
    where
        I: Iterator<Item = String>,
    {
        match (args.next(), args.next(), args.next()) {
            (Some(path), None, None) if path.ends_with(".yaml") || path.ends_with(".yml") => {
                Self::from_yaml_file(Path::new(&path))
            }
            (Some(root), Some(port), None) => Self::from_root_and_port(&root, &port),
            _ => Err(ConfigError(
                "expected a document root and a port".to_string(),
            )),
        }
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&text)
            .map_err(|e| ConfigError(format!("invalid config {}: {}", path.display(), e)))?;

        cfg.validate_root()?;
        Ok(cfg)
    }

    fn from_root_and_port(root: &str, port: &str) -> Result<Self, ConfigError> {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError(format!("invalid port: {}", port)))?;
        if port == 0 {
            return Err(ConfigError("port must be positive".to_string()));
        }

        let cfg = Config {
            server: ServerConfig {
                listen_addr: format!("0.0.0.0:{}", port),
            },
            static_files: StaticFilesConfig {
                root: PathBuf::from(root),
            },
            access_log: AccessLogConfig::default(),
        };

        cfg.validate_root()?;
        Ok(cfg)
    }

    // The document root must exist, be a directory and be both readable
    // and writable before the listener binds.
    fn validate_root(&self) -> Result<(), ConfigError> {
        let root = &self.static_files.root;

        let meta = fs::metadata(root).map_err(|_| {
            ConfigError(format!("document root does not exist: {}", root.display()))
        })?;
        if !meta.is_dir() {
            return Err(ConfigError(format!(
                "document root is not a directory: {}",
                root.display()
            )));
        }
        if fs::read_dir(root).is_err() {
            return Err(ConfigError(format!(
                "document root is not readable: {}",
                root.display()
            )));
        }
        if meta.permissions().readonly() {
            return Err(ConfigError(format!(
                "document root is not writable: {}",
                root.display()
            )));
        }

        Ok(())
    }
}
