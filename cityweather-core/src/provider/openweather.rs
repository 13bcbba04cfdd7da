use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{http::get_json, model::WeatherSnapshot};

use super::WeatherProvider;

/// Snapshots are rendered in °C and m/s, so the unit system is fixed.
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
    url: String,
    api_key: String,
}

impl OpenWeatherProvider {
    pub fn new(http: Client, url: String, api_key: String) -> Self {
        Self { http, url, api_key }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherSnapshot {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            description,
            wind_speed_mps: parsed.wind.speed,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot> {
        debug!(url = %self.url, city, "fetching current weather");

        let request = self.http.get(&self.url).query(&[
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", UNITS),
        ]);

        let parsed: OwCurrentResponse = get_json(request, "OpenWeather current").await?;

        Ok(parsed.into())
    }
}
