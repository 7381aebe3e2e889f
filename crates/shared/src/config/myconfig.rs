use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub api_key: String,
    pub run_migrations: bool,
}

impl Config {
    /// Reads the environment, after loading a `.env` file when one exists.
    pub fn init() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://categories.db".to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 3000,
        };

        let api_key = lookup("API_KEY").context("API_KEY must be set")?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => value
                .parse::<bool>()
                .context("RUN_MIGRATIONS must be true or false")?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            api_key,
            run_migrations,
        })
    }
}
