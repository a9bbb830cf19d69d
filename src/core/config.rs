use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the running executable; the database and templates live under it.
/// Falls back to the working directory when the executable path is unavailable.
fn app_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub templates: TemplateConfig,
    pub map: MapConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Debug mode: templates are re-read on every render and logging defaults to `debug`.
    pub debug: bool,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the SQLite file. Its parent directory is created on startup.
    pub path: PathBuf,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TemplateConfig {
    pub dir: PathBuf,
}

/// Initial view of the map page
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub title: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            templates: TemplateConfig::from_env(),
            map: MapConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

/// Read a variable and parse it, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 5000;
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", Self::DEFAULT_PORT)?;
        let debug = parse_var("APP_DEBUG", true)?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size =
            parse_var("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;

        Ok(Self {
            host,
            port,
            debug,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl DatabaseConfig {
    // SQLite serializes writers, so a small pool is enough
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let path = env::var("DATABASE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);

        let defaults = Self::with_path(path);

        Ok(Self {
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_var("DATABASE_MIN_CONNECTIONS", defaults.min_connections)?,
            acquire_timeout_secs: parse_var(
                "DATABASE_ACQUIRE_TIMEOUT",
                defaults.acquire_timeout_secs,
            )?,
            idle_timeout_secs: parse_var("DATABASE_IDLE_TIMEOUT", defaults.idle_timeout_secs)?,
            max_lifetime_secs: parse_var("DATABASE_MAX_LIFETIME", defaults.max_lifetime_secs)?,
            ..defaults
        })
    }

    /// `<app root>/database/pontos_alerta.db`
    pub fn default_path() -> PathBuf {
        app_root().join("database").join("pontos_alerta.db")
    }

    /// Pool settings with defaults for the given file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            min_connections: Self::DEFAULT_MIN_CONNECTIONS,
            acquire_timeout_secs: Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: Self::DEFAULT_IDLE_TIMEOUT_SECS,
            max_lifetime_secs: Self::DEFAULT_MAX_LIFETIME_SECS,
        }
    }
}

impl TemplateConfig {
    pub fn from_env() -> Self {
        let dir = env::var("TEMPLATE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_dir);

        Self { dir }
    }

    pub fn default_dir() -> PathBuf {
        app_root().join("templates")
    }
}

impl MapConfig {
    const DEFAULT_CENTER_LAT: f64 = -23.5505;
    const DEFAULT_CENTER_LNG: f64 = -46.6333;
    const DEFAULT_ZOOM: u8 = 12;

    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            title: env::var("MAP_TITLE").unwrap_or(defaults.title),
            center_lat: parse_var("MAP_CENTER_LAT", defaults.center_lat)?,
            center_lng: parse_var("MAP_CENTER_LNG", defaults.center_lng)?,
            zoom: parse_var("MAP_ZOOM", defaults.zoom)?,
        })
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Mapa de Pontos de Alerta".to_string(),
            center_lat: Self::DEFAULT_CENTER_LAT,
            center_lng: Self::DEFAULT_CENTER_LNG,
            zoom: Self::DEFAULT_ZOOM,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Pontos de Alerta API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API for storing and listing map alert points".to_string());

        Self {
            title,
            version,
            description,
        }
    }
}
