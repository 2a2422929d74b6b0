use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the auth file location.
const AUTH_FILE_ENV: &str = "MEERKAT_AUTH_FILE";

/// Default auth file path, relative to the working directory.
const DEFAULT_AUTH_FILE: &str = "mongo/mongodb_auth.json";

/// MongoDB credentials, loaded from a local JSON file.
///
/// The file is a flat object with `hostname`, `port`, `username` and
/// `password` fields. `port` is kept as a string because existing auth
/// files store it with a leading colon (e.g. `":27017"`).
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub hostname: String,
    pub port: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read auth file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed auth file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl StoreConfig {
    /// Load configuration from the auth file.
    ///
    /// The path comes from `MEERKAT_AUTH_FILE` when set, otherwise the
    /// default `mongo/mongodb_auth.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(AUTH_FILE_ENV).unwrap_or_else(|_| DEFAULT_AUTH_FILE.to_string());
        Self::from_file(&path)
    }

    /// Load configuration from a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }

    /// Connection URI for the driver, without credentials.
    ///
    /// Credentials are attached as driver options rather than embedded in
    /// the URI, so passwords never appear in logged connection strings.
    pub fn connection_uri(&self) -> String {
        let port = self.port.strip_prefix(':').unwrap_or(&self.port);
        format!("mongodb://{}:{}", self.hostname, port)
    }
}
