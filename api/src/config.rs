use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Apply pending schema migrations on startup
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            Err(_) => 8080,
        };

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Ok(Self {
            database_url,
            port,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
