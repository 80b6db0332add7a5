use crate::auth::jwt::JwtConfig;

/// Environment name that enables development-only endpoints.
pub const ENV_DEVELOPMENT: &str = "development";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Deployment environment name (default: `development`). The dev
    /// session-injection endpoint only exists when this is `development`.
    pub environment: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Externally visible server origin, used to build public file URLs.
    pub public_base_url: String,
    /// Storage backend selector: `local` or `s3`.
    pub storage_backend: String,
    /// Media root directory for the local storage backend.
    pub media_root: String,
    /// Bucket name for the S3 storage backend.
    pub s3_bucket: String,
    /// Public URL prefix for objects in the S3 bucket.
    pub s3_public_base_url: String,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `ENVIRONMENT`          | `development`              |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `STORAGE_BACKEND`      | `local`                    |
    /// | `MEDIA_ROOT`           | `./media`                  |
    /// | `S3_BUCKET`            | (empty)                    |
    /// | `S3_PUBLIC_BASE_URL`   | (empty)                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| ENV_DEVELOPMENT.into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let storage_backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        let media_root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".into());
        let s3_bucket = std::env::var("S3_BUCKET").unwrap_or_default();
        let s3_public_base_url = std::env::var("S3_PUBLIC_BASE_URL").unwrap_or_default();

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            environment,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            storage_backend,
            media_root,
            s3_bucket,
            s3_public_base_url,
            jwt,
        }
    }

    /// Whether development-only endpoints are enabled.
    pub fn is_development(&self) -> bool {
        self.environment == ENV_DEVELOPMENT
    }
}
