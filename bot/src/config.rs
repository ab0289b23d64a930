use log::warn;
use std::env;

const DEFAULT_STATUS_PORT: u16 = 8080;

pub(crate) struct Config {
    pub api_token: Option<String>,
    pub status_port: u16,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        let api_token = env::var("SORARE_API_KEY").ok();
        if api_token.is_none() {
            warn!("SORARE_API_KEY is not set; API calls will be rejected");
        }

        let status_port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable PORT value {raw:?}");
                DEFAULT_STATUS_PORT
            }),
            Err(_) => DEFAULT_STATUS_PORT,
        };

        Self {
            api_token,
            status_port,
        }
    }
}
