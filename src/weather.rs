use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://api.weather.gov";
const USER_AGENT: &str = "PlotLines/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Reduced form of the weather.gov lookup chain. `current` and `forecast`
/// are always populated, with placeholder text on failure.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub current: String,
    pub forecast: String,
    pub raw_temp: Option<f64>,
}

impl WeatherSummary {
    pub fn unavailable() -> Self {
        Self {
            current: "Weather data unavailable".to_string(),
            forecast: "(Forecast unavailable)".to_string(),
            raw_temp: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    forecast: String,
    observation_stations: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPeriod {
    name: String,
    short_forecast: String,
    temperature: i64,
    temperature_unit: String,
}

#[derive(Debug, Deserialize)]
struct StationsResponse {
    features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
struct StationFeature {
    properties: StationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationProperties {
    station_identifier: String,
}

#[derive(Debug, Deserialize)]
struct ObservationResponse {
    properties: ObservationProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObservationProperties {
    #[serde(default)]
    temperature: Option<Measurement>,
    #[serde(default)]
    text_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
    value: Option<f64>,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions and a 7-period forecast. Never fails: any
    /// error anywhere in the lookup chain degrades to the placeholder
    /// summary.
    pub async fn fetch(&self, lat: f64, lon: f64) -> WeatherSummary {
        info!("fetch_weather: lat={}, lon={}", lat, lon);
        match self.try_fetch(lat, lon).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!("fetch_weather error: {:#}", err);
                WeatherSummary::unavailable()
            }
        }
    }

    async fn try_fetch(&self, lat: f64, lon: f64) -> Result<WeatherSummary> {
        let points_url = format!("{}/points/{},{}", self.base_url, lat, lon);
        let points: PointsResponse = self.get_json(&points_url).await?;

        let forecast: ForecastResponse = self.get_json(&points.properties.forecast).await?;
        let forecast_summary = format_forecast(&forecast.properties.periods);

        let stations: StationsResponse = self
            .get_json(&points.properties.observation_stations)
            .await?;
        let station_id = &stations
            .features
            .first()
            .context("No observation stations returned")?
            .properties
            .station_identifier;

        let obs_url = format!(
            "{}/stations/{}/observations/latest",
            self.base_url, station_id
        );
        let obs: ObservationResponse = self.get_json(&obs_url).await?;

        let (current, raw_temp) = compose_current(&obs.properties);
        Ok(WeatherSummary {
            current,
            forecast: forecast_summary,
            raw_temp,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {}", url))?
            .error_for_status()
            .with_context(|| format!("Bad status from {}", url))?
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))
    }
}

fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(7)
        .map(|p| {
            format!(
                "- {}: {}, {}{}",
                p.name, p.short_forecast, p.temperature, p.temperature_unit
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn compose_current(props: &ObservationProperties) -> (String, Option<f64>) {
    let temp_f = props
        .temperature
        .as_ref()
        .and_then(|t| t.value)
        .map(celsius_to_fahrenheit);
    let description = props
        .text_description
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    match temp_f {
        Some(f) => (format!("{}, {:.0}F", description, f), temp_f),
        None => (description, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn test_freezing_point_renders_32() {
        let props = ObservationProperties {
            temperature: Some(Measurement { value: Some(0.0) }),
            text_description: Some("Cloudy".to_string()),
        };
        let (current, raw_temp) = compose_current(&props);
        assert_eq!(current, "Cloudy, 32F");
        assert_eq!(raw_temp, Some(32.0));
    }

    #[test]
    fn test_missing_temperature_uses_description_alone() {
        let props = ObservationProperties {
            temperature: Some(Measurement { value: None }),
            text_description: Some("Fair".to_string()),
        };
        let (current, raw_temp) = compose_current(&props);
        assert_eq!(current, "Fair");
        assert_eq!(raw_temp, None);
    }

    #[test]
    fn test_missing_description_falls_back() {
        let props = ObservationProperties::default();
        let (current, _) = compose_current(&props);
        assert_eq!(current, "N/A");
    }

    #[test]
    fn test_forecast_takes_first_seven_periods() {
        let periods: Vec<ForecastPeriod> = (0..9)
            .map(|i| ForecastPeriod {
                name: format!("Period {}", i),
                short_forecast: "Sunny".to_string(),
                temperature: 70 + i,
                temperature_unit: "F".to_string(),
            })
            .collect();
        let summary = format_forecast(&periods);
        assert_eq!(summary.lines().count(), 7);
        assert!(summary.starts_with("- Period 0: Sunny, 70F"));
        assert!(summary.ends_with("- Period 6: Sunny, 76F"));
    }

    #[test]
    fn test_parse_nws_shapes() {
        let points: PointsResponse = serde_json::from_str(
            r#"{"properties": {"forecast": "https://x/forecast",
                "observationStations": "https://x/stations", "extra": 1}}"#,
        )
        .unwrap();
        assert_eq!(points.properties.forecast, "https://x/forecast");

        let obs: ObservationResponse = serde_json::from_str(
            r#"{"properties": {"temperature": {"unitCode": "wmoUnit:degC", "value": null},
                "textDescription": "Clear"}}"#,
        )
        .unwrap();
        let (current, _) = compose_current(&obs.properties);
        assert_eq!(current, "Clear");

        let stations: StationsResponse = serde_json::from_str(
            r#"{"features": [{"properties": {"stationIdentifier": "KBDU"}}]}"#,
        )
        .unwrap();
        assert_eq!(stations.features[0].properties.station_identifier, "KBDU");
    }

    #[tokio::test]
    async fn test_fetch_never_fails_on_unreachable_service() {
        let client = WeatherClient::with_base_url("http://127.0.0.1:9").unwrap();
        let summary = client.fetch(40.0, -105.3).await;
        assert_eq!(summary.current, "Weather data unavailable");
        assert_eq!(summary.forecast, "(Forecast unavailable)");
        assert!(summary.raw_temp.is_none());
    }
}
