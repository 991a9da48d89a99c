use std::path::Path;

const DEFAULT_API_URL: &str = "https://api.binance.com/api/v3";
const DEFAULT_WS_URL: &str = "wss://stream.binance.com:9443";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub ws_url: String,
}

impl Config {
    /// Loads the dotenv file (if present) into the process environment, then
    /// reads the base URLs. File values override already-set variables.
    pub fn load(env_file: &Path) -> Self {
        if env_file.exists() {
            if let Err(e) = dotenvy::from_path_override(env_file) {
                tracing::warn!("could not load {}: {e}", env_file.display());
            }
        }
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let api_url = base_url_var("BINANCE_API_URL", DEFAULT_API_URL);
        let ws_url = base_url_var("BINANCE_API_WS", DEFAULT_WS_URL);
        Self { api_url, ws_url }
    }
}

fn base_url_var(name: &str, default: &str) -> String {
    std::env::var(name)
        .map(|value| trim_base_url(&value))
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn trim_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_and_trailing_slashes() {
        assert_eq!(trim_base_url(" https://x.test/ "), "https://x.test");
        assert_eq!(trim_base_url("wss://x.test"), "wss://x.test");
    }
}
