use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub pagination: PaginationConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_not_modified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub recipes_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub recipes_per_page: usize,
    pub search_limit: usize,
    pub api_max_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub frontend: Frontend,
    pub thumbnail_base_url: String,
}

/// Which incremental-update library the HTML pages are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    Htmx,
    Datastar,
}

impl FromStr for Frontend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "htmx" => Ok(Frontend::Htmx),
            "datastar" => Ok(Frontend::Datastar),
            other => Err(Error::Config(format!(
                "Invalid FRONTEND value '{other}' (expected 'htmx' or 'datastar')"
            ))),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: &str) -> Result<T> {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {name} value")))
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                static_dir: "static".into(),
                log_not_modified: false,
            },
            data: DataConfig {
                recipes_path: "data/recipes.json".into(),
            },
            pagination: PaginationConfig {
                recipes_per_page: 10,
                search_limit: crate::store::DEFAULT_SEARCH_LIMIT,
                api_max_limit: 100,
            },
            web: WebConfig {
                frontend: Frontend::Htmx,
                thumbnail_base_url: "https://static.photos/food".to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_or("PORT", "8000")?;

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        let log_not_modified = env_or("LOG_NOT_MODIFIED", "false")?;

        let recipes_path = std::env::var("RECIPES_PATH")
            .unwrap_or_else(|_| "data/recipes.json".to_string())
            .into();

        let recipes_per_page = env_or("RECIPES_PER_PAGE", "10")?;
        let search_limit = env_or(
            "SEARCH_LIMIT",
            &crate::store::DEFAULT_SEARCH_LIMIT.to_string(),
        )?;
        let api_max_limit = env_or("API_MAX_LIMIT", "100")?;

        let frontend = env_or("FRONTEND", "htmx")?;
        let thumbnail_base_url = std::env::var("THUMBNAIL_BASE_URL")
            .unwrap_or_else(|_| "https://static.photos/food".to_string());

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                static_dir,
                log_not_modified,
            },
            data: DataConfig { recipes_path },
            pagination: PaginationConfig {
                recipes_per_page,
                search_limit,
                api_max_limit,
            },
            web: WebConfig {
                frontend,
                thumbnail_base_url,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.pagination.recipes_per_page == 0 {
            return Err(Error::Config(
                "RECIPES_PER_PAGE must be at least 1".to_string(),
            ));
        }

        if self.pagination.search_limit == 0 {
            return Err(Error::Config("SEARCH_LIMIT must be at least 1".to_string()));
        }

        if self.pagination.api_max_limit == 0 {
            return Err(Error::Config("API_MAX_LIMIT must be at least 1".to_string()));
        }

        if self.web.thumbnail_base_url.trim().is_empty() {
            return Err(Error::Config(
                "THUMBNAIL_BASE_URL must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
