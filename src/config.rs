use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Destination for forwarded leads. Optional so the server can still boot
    /// in a partially configured environment; submissions fail with a 500
    /// until it is set.
    pub lead_webhook_url: Option<String>,
    /// Bearer credential for the webhook receiver, if it requires one.
    pub lead_api_key: Option<String>,
    /// When set, failure responses carry the raw upstream/internal detail in
    /// a `details` field. Keep off in production.
    pub verbose_errors: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            lead_webhook_url: match std::env::var("LEAD_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
            {
                Some(url) => {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("LEAD_WEBHOOK_URL must start with http:// or https://");
                    }
                    Some(url)
                }
                None => None,
            },
            lead_api_key: std::env::var("LEAD_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            verbose_errors: std::env::var("VERBOSE_ERRORS")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        if config.lead_webhook_url.is_none() {
            tracing::warn!("LEAD_WEBHOOK_URL not configured; lead submissions will fail");
        }
        if config.lead_api_key.is_none() {
            tracing::warn!("LEAD_API_KEY not configured; forwarding without bearer credential");
        }
        if config.verbose_errors {
            tracing::warn!("Verbose error details enabled");
        }

        Ok(config)
    }
}
