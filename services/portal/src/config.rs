/// Portal configuration loaded from environment variables.
#[derive(Debug)]
pub struct PortalConfig {
    /// sqlite connection URL. Defaults to a file beside the working
    /// directory, created on first run.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3100). Env var: `PORTAL_PORT`.
    pub portal_port: u16,
    /// HMAC secret for signing session tokens.
    pub session_secret: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://upskill.db?mode=rwc".to_owned()),
            portal_port: std::env::var("PORTAL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
        }
    }
}
