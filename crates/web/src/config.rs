use anyhow::{Context, Result};
use notifications::SmtpConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            smtp: smtp_from_env()?,
        })
    }
}

/// SMTP settings are optional; without SMTP_HOST the server runs with
/// notifications disabled.
fn smtp_from_env() -> Result<Option<SmtpConfig>> {
    let Ok(host) = std::env::var("SMTP_HOST") else {
        return Ok(None);
    };

    let port = match std::env::var("SMTP_PORT") {
        Ok(port) => port.parse().context("SMTP_PORT must be a number")?,
        Err(_) => 587,
    };

    Ok(Some(SmtpConfig {
        host,
        port,
        username: std::env::var("SMTP_USERNAME").ok(),
        password: std::env::var("SMTP_PASSWORD").ok(),
        from: std::env::var("MAIL_FROM").context("Cannot load MAIL_FROM env variable")?,
    }))
}
