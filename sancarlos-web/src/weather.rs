//! Weather widget updater.
//!
//! Polls the OpenWeatherMap current-conditions endpoint for the configured
//! location and writes the rounded temperature and a condition icon into the
//! page. Any failure hides the widget until a later poll succeeds; nothing is
//! surfaced to the visitor beyond the widget's absence.

use std::cell::RefCell;

use gloo_timers::callback::Interval;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, console};

use crate::config::{Units, WeatherConfig};
use crate::dom::query_all;

/// Time between polls. There is no cancellation path; the interval runs for
/// the lifetime of the page.
pub const REFRESH_INTERVAL_MS: u32 = 600_000;

/// Selector of the visible weather blocks.
pub const WIDGET_SELECTOR: &str = ".weather-widget";

/// Selector of every temperature display element.
pub const TEMPERATURE_SELECTOR: &str = "#temperature";

/// Selector of the condition icon element.
pub const ICON_SELECTOR: &str = ".weather-icon";

/// Icon shown for conditions outside the known table.
pub const DEFAULT_ICON: &str = "☀️";

thread_local! {
    static SHARED_CLIENT: OnceCell<WeatherClient> = const { OnceCell::new() };
}

/// Decoded current-conditions payload. Only the fields the widget consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    /// Application-level status code; 200 on success. Some success payloads
    /// omit it, so absence decodes as 200, and some error payloads carry it
    /// as a JSON string (e.g. `"404"`), so both encodings are accepted.
    #[serde(default = "default_status", deserialize_with = "status_code")]
    pub cod: u16,
    /// Error description accompanying a non-200 `cod`.
    #[serde(default)]
    pub message: Option<String>,
    /// Temperature readings.
    #[serde(default)]
    pub main: Option<Readings>,
    /// Condition summaries; the first entry drives the icon.
    #[serde(default)]
    pub weather: Vec<Condition>,
}

fn default_status() -> u16 {
    200
}

fn status_code<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StatusCode;

    impl serde::de::Visitor<'_> for StatusCode {
        type Value = u16;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a status code as a number or string")
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<u16, E> {
            u16::try_from(value).map_err(E::custom)
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<u16, E> {
            u16::try_from(value).map_err(E::custom)
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<u16, E> {
            value.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(StatusCode)
}

/// Numeric readings block of the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Readings {
    /// Current temperature in the requested unit system.
    pub temp: f64,
}

/// One condition summary entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Condition keyword, e.g. `"Clear"` or `"Rain"`.
    pub main: String,
}

impl WeatherResponse {
    /// Promote an application-level error code into [`WeatherError::Api`].
    pub fn into_result(self) -> Result<Self, WeatherError> {
        if self.cod == 200 {
            Ok(self)
        } else {
            Err(WeatherError::Api {
                cod: self.cod,
                message: self.message.unwrap_or_default(),
            })
        }
    }
}

/// Failure modes of one poll.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request never produced a decodable payload.
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-200 status code in the payload.
    #[error("weather API error {cod}: {message}")]
    Api {
        /// Application-level status code.
        cod: u16,
        /// Error description from the payload.
        message: String,
    },
}

/// Client for the current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: WeatherConfig,
    client: reqwest::Client,
}

impl WeatherClient {
    /// Create a client with the provided configuration.
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Shared per-page client, built from the default configuration on first
    /// use.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(WeatherConfig::default()))
                .clone()
        })
    }

    /// The configuration this client polls with.
    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Fetch and decode current conditions once.
    pub async fn current(&self) -> Result<WeatherResponse, WeatherError> {
        let response: WeatherResponse = self
            .client
            .get(self.config.endpoint_url())
            .send()
            .await?
            .json()
            .await?;
        response.into_result()
    }
}

/// Rounded temperature with its unit suffix, e.g. `"72°F"`.
pub fn format_temperature(temp: f64, units: Units) -> String {
    format!("{}{}", temp.round() as i64, units.suffix())
}

/// Display icon for a condition keyword; unknown keywords get
/// [`DEFAULT_ICON`].
pub fn icon_for(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" => "🌫️",
        "Squall" => "💨",
        "Tornado" => "🌪️",
        _ => DEFAULT_ICON,
    }
}

fn set_widget_display(document: &Document, value: &str) {
    for widget in query_all(document, WIDGET_SELECTOR) {
        if let Ok(widget) = widget.dyn_into::<HtmlElement>() {
            let _ = widget.style().set_property("display", value);
        }
    }
}

/// Hide every weather block on the page.
pub fn hide_widgets(document: &Document) {
    set_widget_display(document, "none");
}

/// Show every weather block on the page.
pub fn show_widgets(document: &Document) {
    set_widget_display(document, "flex");
}

/// Write a successful response into the page: unhide the widgets, fill every
/// temperature element, and set the condition icon when present.
pub fn render(document: &Document, response: &WeatherResponse, units: Units) {
    show_widgets(document);

    if let Some(readings) = &response.main {
        let text = format_temperature(readings.temp, units);
        for element in query_all(document, TEMPERATURE_SELECTOR) {
            element.set_text_content(Some(&text));
        }
    }

    // A success payload without a condition entry leaves the icon alone
    // rather than inventing one.
    if let Some(condition) = response.weather.first() {
        if let Ok(Some(icon_element)) = document.query_selector(ICON_SELECTOR) {
            icon_element.set_text_content(Some(icon_for(&condition.main)));
        }
    }
}

/// One poll: fetch, then render or hide. All failures terminate here.
pub async fn refresh(document: Document) {
    let client = WeatherClient::shared();
    if !client.config().is_configured() {
        console::warn_1(
            &"Weather API key not configured. Set SANCARLOS_WEATHER_API_KEY at build time."
                .into(),
        );
        return;
    }

    match client.current().await {
        Ok(response) => render(&document, &response, client.config().units),
        Err(err) => {
            console::error_1(&format!("Error fetching weather: {err}").into());
            if let WeatherError::Api { cod: 401, .. } = err {
                console::warn_1(
                    &"API key issue: a fresh OpenWeatherMap key can take a few minutes to a \
                      couple of hours to activate. Wait and refresh later."
                        .into(),
                );
            }
            hide_widgets(&document);
        }
    }
}

/// Begin polling: one immediate fetch once the document has loaded, then an
/// unconditional fetch every [`REFRESH_INTERVAL_MS`].
pub fn start(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() == "loading" {
        let scheduled = document.clone();
        let on_loaded =
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| schedule(&scheduled));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_loaded.as_ref().unchecked_ref(),
        )?;
        on_loaded.forget();
    } else {
        schedule(document);
    }
    Ok(())
}

fn schedule(document: &Document) {
    spawn_local(refresh(document.clone()));

    let polled = document.clone();
    Interval::new(REFRESH_INTERVAL_MS, move || {
        spawn_local(refresh(polled.clone()));
    })
    .forget();
}
