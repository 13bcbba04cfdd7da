use crate::{Config, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`, resolved by the service's own name matching.
    async fn current_weather(&self, city: &str) -> anyhow::Result<WeatherSnapshot>;
}

/// Construct the weather provider described by `config`.
pub fn provider_from_config(config: &Config, http: Client) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key()?;

    Ok(OpenWeatherProvider::new(
        http,
        config.weather_url.clone(),
        api_key,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        if std::env::var(crate::config::API_KEY_ENV).is_ok() {
            return;
        }

        let cfg = Config::default();
        let err = provider_from_config(&cfg, Client::new()).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg, Client::new()).is_ok());
    }
}
