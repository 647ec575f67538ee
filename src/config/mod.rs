use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // Bearer token for the /api routes; unset disables auth (dev mode)
    pub api_token: Option<String>,

    // Simulated execution feed
    pub fill_feed_enabled: bool,
    pub fill_feed_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),

            fill_feed_enabled: env::var("FILL_FEED_ENABLED")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
            fill_feed_interval_secs: env::var("FILL_FEED_INTERVAL_SECS")
                .unwrap_or_else(|_| "15".into())
                .parse()
                .unwrap_or(15),
        })
    }
}
