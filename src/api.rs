//! OpenWeather current-conditions client

use reqwest::Client;
use serde::Deserialize;

use crate::state::{WeatherResult, NOT_FOUND_FALLBACK, TRANSPORT_ERROR_MESSAGE};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// URL of the provider's icon asset for an icon identifier
pub fn icon_url(icon: &str) -> String {
    format!("{}/{}@2x.png", ICON_BASE_URL, icon)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The provider answered with a non-success `cod`
    #[error("provider rejected lookup ({code}): {}", .message.as_deref().unwrap_or("no message"))]
    Provider {
        code: String,
        message: Option<String>,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Network or parse failure, as opposed to a provider verdict
    pub fn is_transport(&self) -> bool {
        !matches!(self, FetchError::Provider { .. })
    }

    /// Text the user gets to see
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Provider {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            FetchError::Provider { .. } => NOT_FOUND_FALLBACK.to_string(),
            _ => TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// `cod` arrives as `200` on success and as `"404"` on most failures
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    fn is_success(&self) -> bool {
        match self {
            ResponseCode::Number(code) => *code == 200,
            ResponseCode::Text(code) => code.trim() == "200",
        }
    }

    fn into_string(self) -> String {
        match self {
            ResponseCode::Number(code) => code.to_string(),
            ResponseCode::Text(code) => code,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    cod: Option<ResponseCode>,
    message: Option<String>,
    name: Option<String>,
    sys: Option<Sys>,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<Condition>,
    wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f32,
}

/// Interpret one response body.
///
/// A success code with any consumed field missing counts as malformed, so a
/// `WeatherResult` is only ever built complete.
pub fn parse_current(body: &str) -> Result<WeatherResult, FetchError> {
    let data: CurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let code = data
        .cod
        .ok_or_else(|| FetchError::Malformed("missing cod".into()))?;
    if !code.is_success() {
        return Err(FetchError::Provider {
            code: code.into_string(),
            message: data.message,
        });
    }

    let missing = |field: &str| FetchError::Malformed(format!("missing {}", field));
    let main = data.main.ok_or_else(|| missing("main"))?;
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| missing("weather[0]"))?;

    Ok(WeatherResult {
        name: data.name.ok_or_else(|| missing("name"))?,
        country: data
            .sys
            .and_then(|sys| sys.country)
            .ok_or_else(|| missing("sys.country"))?,
        temperature: main.temp,
        condition: condition.main,
        icon: condition.icon,
        humidity: main.humidity,
        wind_speed: data.wind.ok_or_else(|| missing("wind"))?.speed,
    })
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One request for `city`'s current conditions, metric units.
    pub async fn lookup(&self, city: &str) -> Result<WeatherResult, FetchError> {
        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%city, %status, bytes = body.len(), "provider responded");

        parse_current(&body)
    }
}
