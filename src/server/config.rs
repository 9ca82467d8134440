use std::env;
use std::path::PathBuf;

/// Process configuration, read once at startup.
///
/// The API key is the only secret; it is injected into the client at
/// construction time and never read from the environment again.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on. `PORT`, default 3000.
    pub port: u16,
    /// Alpha Vantage credential. `ALPHA_VANTAGE_API_KEY`, may be empty; a
    /// missing key is reported per request, not at startup.
    pub api_key: String,
    /// Root of the static front-end. `PUBLIC_DIR`, default `public`.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000);
        let api_key = env::var("ALPHA_VANTAGE_API_KEY").unwrap_or_default();
        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));
        Self {
            port,
            api_key,
            public_dir,
        }
    }
}
