//! Current-weather lookup against the OpenWeatherMap API.
//!
//! The client is constructed with its API key; nothing in here reads the
//! process environment. Requests carry a fixed timeout so a stalled
//! provider surfaces as an error instead of hanging the single-threaded
//! session.

use crate::domain::{FetchError, FetchResult, WeatherReport};
use serde::Deserialize;
use std::time::Duration;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WeatherClient {
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl WeatherClient {
    /// Creates a client for the given key. `None` means lookups fail fast
    /// with `MissingKey` instead of sending doomed requests.
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { api_key, client }
    }

    /// Fetches current conditions for a city, in metric units.
    ///
    /// A non-success status (typically an unknown city name) becomes
    /// `CityNotFound`; transport and decode failures keep their own
    /// variants so the caller can phrase the fallback message.
    pub fn current(&self, city: &str) -> FetchResult<WeatherReport> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingKey)?;
        let response = self
            .client
            .get(API_URL)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::CityNotFound);
        }

        let payload: WeatherPayload = response
            .json()
            .map_err(|e| FetchError::UnexpectedPayload(e.to_string()))?;
        decode_report(payload)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    main: String,
    description: String,
}

fn decode_report(payload: WeatherPayload) -> FetchResult<WeatherReport> {
    let condition = payload
        .weather
        .first()
        .ok_or_else(|| FetchError::UnexpectedPayload("no weather conditions".to_string()))?;
    Ok(WeatherReport {
        temperature: payload.main.temp,
        humidity: payload.main.humidity,
        condition: title_case(&condition.description),
        condition_group: condition.main.clone(),
    })
}

/// Capitalizes the first letter of each whitespace-separated word, the way
/// the dashboard has always displayed provider descriptions.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Emoji for a coarse condition group, for the morning brief printout.
pub fn condition_emoji(group: &str) -> &'static str {
    match group {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Haze" | "Smoke" => "🌫️",
        "Fog" => "🌁",
        _ => "🌍",
    }
}
