use crate::config::Config;
use crate::models::{
    error::AppError,
    measurement::{Conversion, Envelope, ProviderInfo, Sample, Sensor, Tariff},
};
use gloo::console::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// CONSTANTS
const FALLBACK_BASE_URL: &str = "http://localhost/api";
const TIME_PATH: &str = "/time";
const SENSORS_PATH: &str = "/sensors";
const PROVIDER_PATH: &str = "/energy_providers/current";

// API CONFIGURATION
/// Configuration for the sensor API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    sensor_name: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// API served next to the page: `<origin>/api`.
    pub fn from_location() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(origin) => Self::builder()
                .base_url(format!("{origin}{}", Config::API_PATH))
                .build(),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the sensor whose measurements are displayed.
    pub fn sensor_name(&self) -> &str {
        &self.sensor_name
    }

    /// Full URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    sensor_name: Option<String>,
}

impl ApiConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn sensor_name(mut self, name: impl Into<String>) -> Self {
        self.sensor_name = Some(name.into());
        self
    }

    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| FALLBACK_BASE_URL.to_string()),
            sensor_name: self
                .sensor_name
                .unwrap_or_else(|| Config::SENSOR_NAME.to_string()),
        }
    }
}

// API RESPONSE TYPES
/// `/time` answers either a number or its string form.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Epoch {
    Seconds(f64),
    Text(String),
}

impl Epoch {
    fn seconds(self) -> Result<f64, AppError> {
        match self {
            Epoch::Seconds(s) => Ok(s),
            Epoch::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| AppError::ParseError(format!("Invalid server time {text:?}: {e}"))),
        }
    }
}

/// Parses the `{data, rate?}` envelope shared by every endpoint.
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::DataError(format!("Malformed response: {e}")))
}

/// First sensor carrying `name`.
pub fn find_sensor(sensors: &[Sensor], name: &str) -> Option<u32> {
    sensors.iter().find(|s| s.name == name).map(|s| s.id)
}

pub type RateListener = Rc<dyn Fn(Tariff)>;

// SENSOR CLIENT
/// HTTP client for the sensor API.
///
/// The sensor id and provider info are looked up once and cached for the
/// session. Every envelope carrying a `rate` is forwarded to the subscribers.
pub struct SensorApi {
    http: reqwest::Client,
    config: ApiConfig,
    sensor_id: Cell<Option<u32>>,
    provider: Cell<Option<ProviderInfo>>,
    rate: Cell<Option<Tariff>>,
    listeners: RefCell<Vec<RateListener>>,
}

impl SensorApi {
    /// Creates a client for the API served next to the page.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_location())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            sensor_id: Cell::new(None),
            provider: Cell::new(None),
            rate: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Registers a rate-change listener.
    pub fn subscribe(&self, listener: RateListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Last tariff reported by the server.
    pub fn last_rate(&self) -> Option<Tariff> {
        self.rate.get()
    }

    /// Fetches `path` and returns the envelope payload, `None` for `"data": null`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        let body = self.fetch_text(path).await?;
        let envelope: Envelope<T> = parse_envelope(&body).map_err(|e| {
            warn!(format!("Error while handling `{path}`: {body}"));
            e
        })?;

        if let Some(rate) = envelope.rate {
            self.notify_rate(rate);
        }
        Ok(envelope.data)
    }

    /// Fetches a measurement series; `"data": null` is an empty series.
    pub async fn try_fetch_samples(&self, path: &str) -> Result<Vec<Sample>, AppError> {
        Ok(self.get::<Vec<Sample>>(path).await?.unwrap_or_default())
    }

    /// Fetches a measurement series. Failures are logged and yield an empty series.
    pub async fn fetch_samples(&self, path: &str) -> Vec<Sample> {
        match self.try_fetch_samples(path).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!(format!("Series `{path}` unavailable: {e}"));
                Vec::new()
            }
        }
    }

    /// Server clock as epoch seconds.
    pub async fn server_time(&self) -> Result<f64, AppError> {
        self.get::<Epoch>(TIME_PATH)
            .await?
            .ok_or_else(|| AppError::DataError("Empty server time".to_string()))?
            .seconds()
    }

    /// Id of the configured sensor, memoized.
    pub async fn sensor_id(&self) -> Result<u32, AppError> {
        if let Some(id) = self.sensor_id.get() {
            return Ok(id);
        }

        let sensors: Vec<Sensor> = self.get(SENSORS_PATH).await?.unwrap_or_default();
        let name = self.config.sensor_name();
        let id = find_sensor(&sensors, name)
            .ok_or_else(|| AppError::NotFound(format!("No sensor named {name}")))?;

        self.sensor_id.set(Some(id));
        Ok(id)
    }

    /// Tariff coefficients of the current energy provider, memoized.
    pub async fn provider_info(&self) -> Result<ProviderInfo, AppError> {
        if let Some(info) = self.provider.get() {
            return Ok(info);
        }

        let info: ProviderInfo = self
            .get(PROVIDER_PATH)
            .await?
            .ok_or_else(|| AppError::NotFound("No current energy provider".to_string()))?;

        self.provider.set(Some(info));
        Ok(info)
    }

    /// Energy to price coefficients for a tariff period.
    pub async fn convert(&self, tariff: Tariff) -> Result<Conversion, AppError> {
        Ok(self.provider_info().await?.conversion(tariff))
    }

    fn notify_rate(&self, rate: Tariff) {
        self.rate.set(Some(rate));
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(rate);
        }
    }

    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        let response = self
            .http
            .get(self.config.url(path))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}
