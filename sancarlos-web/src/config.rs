//! Frontend configuration module
//!
//! This module provides the injected configuration for the weather updater:
//! location, credential, unit system, and display language.

/// Credential sentinel meaning "no key was provided at build time".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// OpenWeatherMap current-conditions endpoint.
const WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Unit system for the weather request and display suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    /// Fahrenheit.
    Imperial,
    /// Celsius.
    Metric,
}

impl Units {
    /// Value of the `units` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }

    /// Display suffix appended to the rounded temperature.
    pub fn suffix(self) -> &'static str {
        match self {
            Units::Imperial => "°F",
            Units::Metric => "°C",
        }
    }
}

/// Weather updater configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Latitude of the forecast location.
    pub latitude: f64,
    /// Longitude of the forecast location.
    pub longitude: f64,
    /// OpenWeatherMap API key.
    pub api_key: String,
    /// Unit system for the request and display.
    pub units: Units,
    /// Response language for weather descriptions.
    pub lang: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            // San Carlos, Nuevo Guaymas, Sonora, Mexico
            latitude: 27.9592,
            longitude: -111.0481,
            api_key: option_env!("SANCARLOS_WEATHER_API_KEY")
                .unwrap_or(PLACEHOLDER_API_KEY)
                .to_string(),
            units: Units::Imperial,
            lang: "en".to_string(),
        }
    }
}

impl WeatherConfig {
    /// Create a new weather configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a real API key is present. The fetch is skipped entirely when
    /// this is false.
    pub fn is_configured(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }

    /// Full GET URL for the current-conditions request.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{WEATHER_ENDPOINT}?lat={}&lon={}&appid={}&units={}&lang={}",
            self.latitude,
            self.longitude,
            self.api_key,
            self.units.as_query(),
            self.lang
        )
    }
}
