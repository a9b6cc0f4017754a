use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::errors::AppError;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 102400;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    /// Rows per page of the employee table.
    pub page_size: usize,
    /// Artificial delay between a login submission and its result.
    pub login_delay: Duration,
    /// Image used for records created without one.
    pub placeholder_image: String,
    pub max_image_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::Configuration("JWT_SECRET must be set".to_string()))?;
        if jwt_secret.is_empty() {
            return Err(AppError::Configuration(
                "JWT_SECRET cannot be empty".to_string(),
            ));
        }

        let defaults = Self::with_secret(jwt_secret);
        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            session_ttl_hours: parse_var("SESSION_TTL_HOURS", defaults.session_ttl_hours)?,
            page_size: parse_var("PAGE_SIZE", defaults.page_size)?,
            login_delay: Duration::from_millis(parse_var("LOGIN_DELAY_MS", 1000)?),
            placeholder_image: env::var("PLACEHOLDER_IMAGE").unwrap_or(defaults.placeholder_image),
            max_image_bytes: parse_var("MAX_IMAGE_BYTES", defaults.max_image_bytes)?,
            jwt_secret: defaults.jwt_secret,
        };
        config.check()?;
        Ok(config)
    }

    /// Config for in-process use with the reference defaults and no login delay.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: jwt_secret.into(),
            session_ttl_hours: 24,
            page_size: DEFAULT_PAGE_SIZE,
            login_delay: Duration::ZERO,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.page_size == 0 {
            return Err(AppError::Configuration(
                "PAGE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.session_ttl_hours <= 0 {
            return Err(AppError::Configuration(
                "SESSION_TTL_HOURS must be positive".to_string(),
            ));
        }
        Url::parse(&self.placeholder_image).map_err(|err| {
            AppError::Configuration(format!("PLACEHOLDER_IMAGE is not a valid URL: {}", err))
        })?;
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
