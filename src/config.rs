/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic polling of the live window
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Delay between the end of one live poll and the start of the next (2s)
    pub const POLLING_INTERVAL_MS: u32 = 2_000;

    /// Sensor sampling period in seconds, also the bucket width of the live view
    pub const TIMESTEP_SECONDS: f64 = 8.0;

    /// Name of the sensor whose measurements are displayed
    pub const SENSOR_NAME: &'static str = "CitizenWatt";

    /// API path appended to the page origin when no base URL is configured
    pub const API_PATH: &'static str = "/api";

    /// Default bar width in pixels
    pub const RECT_WIDTH_PX: f64 = 12.0;

    /// Horizontal gap between two bars in pixels
    pub const RECT_MARGIN_PX: f64 = 2.0;

    /// Extra bars kept past the visible width before the oldest one is evicted.
    /// A margin of one shows when several samples arrive in the same poll.
    pub const EVICTION_SLACK: usize = 10;

    /// Extra buckets fetched when opening the live window
    pub const NOW_LOOKBACK_EXTRA_BUCKETS: u32 = 1;

    /// Graph width used until the container has been measured
    pub const DEFAULT_GRAPH_WIDTH_PX: u32 = 600;

    /// Debounce delay for window resize events
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
