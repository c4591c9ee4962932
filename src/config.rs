use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::opentdb::DEFAULT_API_URL;


const TOKEN_VAR: &str = "TRIVIA_TOKEN";
const API_URL_VAR: &str = "TRIVIA_API_URL";
const TICK_MS_VAR: &str = "TRIVIA_TICK_MS";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    pub api_url: String,
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: None,
            api_url: DEFAULT_API_URL.to_owned(),
            tick_interval: Duration::from_millis(100),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Config> {
        let mut config = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        config.token = non_empty(TOKEN_VAR).map(|token| token.trim().to_owned());
        if let Some(api_url) = non_empty(API_URL_VAR) {
            config.api_url = api_url.trim().to_owned();
        }
        if let Some(tick_ms) = non_empty(TICK_MS_VAR) {
            let tick_ms: u64 = tick_ms
                .trim()
                .parse()
                .context(format!("{} must be a number of milliseconds", TICK_MS_VAR))?;
            config.tick_interval = Duration::from_millis(tick_ms.max(1));
        }
        Ok(config)
    }
}
