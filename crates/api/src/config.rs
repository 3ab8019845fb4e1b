use std::time::Duration;

/// Where uploaded complaint images are stored.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Local filesystem, served statically under `/uploads`.
    Local {
        upload_dir: String,
        public_base_url: String,
    },
    /// S3-compatible bucket.
    S3 {
        bucket: String,
        public_base_url: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except `DATABASE_URL` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the external image-classification service.
    pub classifier_url: String,
    /// Hard timeout for a single classification call (default: `10` s).
    pub classifier_timeout: Duration,
    /// Image storage backend.
    pub storage: StorageBackend,
    /// Maximum accepted image upload size in bytes (default: 5 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                           |
    /// |---------------------------|-----------------------------------|
    /// | `HOST`                    | `0.0.0.0`                         |
    /// | `PORT`                    | `3000`                            |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`           |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                              |
    /// | `CLASSIFIER_URL`          | `http://localhost:5000`           |
    /// | `CLASSIFIER_TIMEOUT_SECS` | `10`                              |
    /// | `STORAGE_BACKEND`         | `local`                           |
    /// | `UPLOAD_DIR`              | `uploads`                         |
    /// | `PUBLIC_BASE_URL`         | `http://localhost:3000/uploads`   |
    /// | `S3_BUCKET`               | required when `STORAGE_BACKEND=s3`|
    /// | `S3_PUBLIC_URL`           | required when `STORAGE_BACKEND=s3`|
    /// | `MAX_UPLOAD_BYTES`        | `5242880`                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

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

        let classifier_url =
            std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| "http://localhost:5000".into());

        let classifier_timeout_secs: u64 = std::env::var("CLASSIFIER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CLASSIFIER_TIMEOUT_SECS must be a valid u64");

        let storage = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".into())
            .as_str()
        {
            "local" => StorageBackend::Local {
                upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
                public_base_url: std::env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/uploads".into()),
            },
            "s3" => StorageBackend::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                public_base_url: std::env::var("S3_PUBLIC_URL")
                    .expect("S3_PUBLIC_URL must be set when STORAGE_BACKEND=s3"),
            },
            other => panic!("Unknown STORAGE_BACKEND: {other} (expected 'local' or 's3')"),
        };

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (5 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            classifier_url,
            classifier_timeout: Duration::from_secs(classifier_timeout_secs),
            storage,
            max_upload_bytes,
        }
    }
}
