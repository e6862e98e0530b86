//! Application configuration module
//!
//! Configuration comes from environment variables (optionally seeded from a
//! `.env` file by the server binary) and is validated once at startup.
//!
//! | Variable                   | Default | Notes                          |
//! |----------------------------|---------|--------------------------------|
//! | `DATABASE_URL`             | unset   | API answers 503 without it     |
//! | `JWT_SECRET`               | -       | required, at least 32 bytes    |
//! | `SERVER_PORT`              | `3000`  |                                |
//! | `COOKIE_SECURE`            | `true`  | set `false` for plain-HTTP dev |
//! | `BCRYPT_COST`              | `12`    | 4..=31                         |
//! | `DATABASE_MAX_CONNECTIONS` | `10`    |                                |
//! | `RUN_MIGRATIONS`           | `true`  |                                |

use thiserror::Error;

/// Minimum accepted length of the JWT signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// bcrypt work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: Option<String>,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// TCP port the server listens on
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// Run embedded migrations at startup
    pub run_migrations: bool,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut builder = AppConfig::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        let secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        builder = builder.jwt_secret(secret);

        if let Some(port) = get("SERVER_PORT") {
            builder = builder.port(parse_number("SERVER_PORT", &port)?);
        }
        if let Some(secure) = get("COOKIE_SECURE") {
            builder = builder.cookie_secure(parse_bool("COOKIE_SECURE", &secure)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }
        if let Some(max) = get("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_number("DATABASE_MAX_CONNECTIONS", &max)?);
        }
        if let Some(run) = get("RUN_MIGRATIONS") {
            builder = builder.run_migrations(parse_bool("RUN_MIGRATIONS", &run)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret { min: MIN_SECRET_LEN });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::OutOfRange {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::OutOfRange {
                key: "DATABASE_MAX_CONNECTIONS",
                value: self.max_connections.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: u16,
    cookie_secure: bool,
    bcrypt_cost: u32,
    max_connections: u32,
    run_migrations: bool,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: None,
            port: 3000,
            cookie_secure: true,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            max_connections: 10,
            run_migrations: true,
        }
    }
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set whether cookies are marked `Secure`
    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the connection pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set whether migrations run at startup
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port,
            cookie_secure: self.cookie_secure,
            bcrypt_cost: self.bcrypt_cost,
            max_connections: self.max_connections,
            run_migrations: self.run_migrations,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("JWT_SECRET must be at least {min} bytes")]
    WeakSecret { min: usize },
    #[error("{key} out of range: {value}")]
    OutOfRange { key: &'static str, value: String },
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
