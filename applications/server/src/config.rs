/// Server configuration
use crate::error::{Result, ServerError};
use config::{builder::DefaultState, ConfigBuilder};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_web")]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Static content served next to the API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebSettings {
    /// Directory holding `index.html` for the landing page
    #[serde(default = "default_views_dir")]
    pub views_dir: PathBuf,

    /// Directory served under `/public`
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `./config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an explicit file, then layer the environment.
    ///
    /// Precedence, lowest first: file, `STRIDE_*` variables
    /// (`STRIDE_SERVER__PORT`, `STRIDE_STORAGE__DATABASE_URL`, ...), then the
    /// bare `PORT` and `DATABASE_URL` variables.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let settings = file_sources(path)
            .add_source(
                config::Environment::with_prefix("STRIDE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())
            .map_err(|e| ServerError::Config(e.to_string()))?
            .set_override_option("storage.database_url", std::env::var("DATABASE_URL").ok())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        finish(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "database URL is required (set DATABASE_URL)".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self.server.host.parse().map_err(|e| {
            ServerError::Config(format!("invalid host {:?}: {}", self.server.host, e))
        })?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

fn file_sources(path: Option<&Path>) -> ConfigBuilder<DefaultState> {
    let settings = config::Config::builder();

    match path {
        // An explicitly named file must exist
        Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
        None => {
            let config_path = PathBuf::from("config.toml");
            if config_path.exists() {
                settings.add_source(config::File::from(config_path))
            } else {
                settings
            }
        }
    }
}

fn finish(settings: ConfigBuilder<DefaultState>) -> Result<ServerConfig> {
    let config = settings
        .build()
        .map_err(|e| ServerError::Config(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ServerError::Config(e.to_string()))
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/stride.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_web() -> WebSettings {
    WebSettings {
        views_dir: default_views_dir(),
        public_dir: default_public_dir(),
    }
}

fn default_views_dir() -> PathBuf {
    PathBuf::from("./views")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            web: default_web(),
        }
    }
}
