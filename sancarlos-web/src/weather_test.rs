//! Tests for the weather updater's pure logic
//!
//! Validates temperature formatting, the condition-to-icon table, and
//! payload decoding including the application-level error shape.

#[cfg(test)]
mod tests {
    use crate::config::Units;
    use crate::weather::{
        DEFAULT_ICON, REFRESH_INTERVAL_MS, WeatherError, WeatherResponse, format_temperature,
        icon_for,
    };

    /// Tests that 72.4°F displays as exactly "72°F"
    #[test]
    fn test_format_temperature_imperial() {
        assert_eq!(format_temperature(72.4, Units::Imperial), "72°F");
    }

    /// Tests rounding to the nearest integer
    #[test]
    fn test_format_temperature_rounds() {
        assert_eq!(format_temperature(72.5, Units::Imperial), "73°F");
        assert_eq!(format_temperature(71.9, Units::Imperial), "72°F");
        assert_eq!(format_temperature(-2.6, Units::Metric), "-3°C");
    }

    /// Tests the metric suffix
    #[test]
    fn test_format_temperature_metric() {
        assert_eq!(format_temperature(18.3, Units::Metric), "18°C");
    }

    /// Tests known condition keywords
    #[test]
    fn test_icon_table_hits() {
        assert_eq!(icon_for("Rain"), "🌧️");
        assert_eq!(icon_for("Clear"), "☀️");
        assert_eq!(icon_for("Thunderstorm"), "⛈️");
        assert_eq!(icon_for("Fog"), "🌫️");
        assert_eq!(icon_for("Haze"), "🌫️");
        assert_eq!(icon_for("Tornado"), "🌪️");
    }

    /// Tests that unknown keywords fall back to the default icon
    #[test]
    fn test_icon_table_miss_uses_default() {
        assert_eq!(icon_for("Lava"), DEFAULT_ICON);
        assert_eq!(icon_for(""), DEFAULT_ICON);
        assert_eq!(icon_for("rain"), DEFAULT_ICON); // keywords are case-sensitive
    }

    /// Tests decoding a typical success payload
    #[test]
    fn test_decode_success_payload() {
        let payload = r#"{
            "coord": {"lon": -111.0481, "lat": 27.9592},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 72.4, "feels_like": 74.1, "pressure": 1012, "humidity": 78},
            "cod": 200
        }"#;
        let response: WeatherResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.cod, 200);
        assert_eq!(response.main.as_ref().map(|m| m.temp), Some(72.4));
        assert_eq!(response.weather[0].main, "Rain");
        assert!(response.into_result().is_ok());
    }

    /// Tests that a payload without a status code decodes as success
    #[test]
    fn test_decode_payload_without_cod() {
        let payload = r#"{"main": {"temp": 15.0}, "weather": []}"#;
        let response: WeatherResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.cod, 200);
        assert!(response.into_result().is_ok());
    }

    /// Tests decoding the credential-rejection payload
    #[test]
    fn test_decode_401_payload() {
        let payload = r#"{"cod": 401, "message": "Invalid API key."}"#;
        let response: WeatherResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.cod, 401);

        match response.into_result() {
            Err(WeatherError::Api { cod, message }) => {
                assert_eq!(cod, 401);
                assert_eq!(message, "Invalid API key.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    /// Tests decoding an error payload whose status code is a JSON string,
    /// as the API emits for some errors
    #[test]
    fn test_decode_string_cod_payload() {
        let payload = r#"{"cod": "404", "message": "city not found"}"#;
        let response: WeatherResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.cod, 404);

        match response.into_result() {
            Err(WeatherError::Api { cod, message }) => {
                assert_eq!(cod, 404);
                assert_eq!(message, "city not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    /// Tests that a non-200 status without a message still errors
    #[test]
    fn test_non_200_without_message_errors() {
        let payload = r#"{"cod": 429}"#;
        let response: WeatherResponse = serde_json::from_str(payload).unwrap();
        match response.into_result() {
            Err(WeatherError::Api { cod, message }) => {
                assert_eq!(cod, 429);
                assert!(message.is_empty());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    /// Tests the error display text that lands in the console
    #[test]
    fn test_api_error_display() {
        let err = WeatherError::Api {
            cod: 401,
            message: "Invalid API key.".to_string(),
        };
        assert_eq!(err.to_string(), "weather API error 401: Invalid API key.");
    }

    /// Tests the poll interval: ten minutes
    #[test]
    fn test_refresh_interval() {
        assert_eq!(REFRESH_INTERVAL_MS, 600_000);
    }
}
