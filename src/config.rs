use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;
const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
const DEFAULT_ACTIVE_SECTION_OFFSET_PX: f64 = 200.0;
const DEFAULT_MENU_COLLAPSE_WIDTH_PX: f64 = 992.0;
const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;
const DEFAULT_PROGRESS_REVEAL_DELAY_MS: u32 = 200;
const DEFAULT_COUNTER_DURATION_MS: u32 = 2_000;
const DEFAULT_COUNTER_TICK_MS: u32 = 16;
const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 5_000;
const DEFAULT_NOTIFICATION_EXIT_MS: u32 = 300;
const DEFAULT_SUBMIT_LATENCY_MS: u32 = 2_000;
const DEFAULT_LOADING_SCREEN_DELAY_MS: u32 = 1_000;
const DEFAULT_LOADING_SCREEN_FADE_MS: u32 = 500;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const VIEWPORT_WIDTH_PX_BOUNDS: (f64, f64) = (320.0, 4_096.0);
const CAROUSEL_INTERVAL_MS_BOUNDS: (u32, u32) = (1_000, 60_000);
const SHORT_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const COUNTER_DURATION_MS_BOUNDS: (u32, u32) = (100, 30_000);
const COUNTER_TICK_MS_BOUNDS: (u32, u32) = (4, 1_000);
const NOTIFICATION_DURATION_MS_BOUNDS: (u32, u32) = (0, 120_000);
const SUBMIT_LATENCY_MS_BOUNDS: (u32, u32) = (0, 30_000);
const NOTIFICATION_LIMIT_BOUNDS: (usize, usize) = (1, 50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
        }
    }
}

/// Shape of the optional inline JSON block. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    navbar_scroll_threshold_px: Option<f64>,
    back_to_top_threshold_px: Option<f64>,
    active_section_offset_px: Option<f64>,
    menu_collapse_width_px: Option<f64>,
    carousel_interval_ms: Option<u32>,
    progress_reveal_delay_ms: Option<u32>,
    counter_duration_ms: Option<u32>,
    counter_tick_ms: Option<u32>,
    notification_duration_ms: Option<u32>,
    notification_exit_ms: Option<u32>,
    notification_limit: Option<usize>,
    submit_latency_ms: Option<u32>,
    loading_screen_delay_ms: Option<u32>,
    loading_screen_fade_ms: Option<u32>,
    contact_endpoint: Option<String>,
    log_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub navbar_scroll_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub active_section_offset_px: f64,
    pub menu_collapse_width_px: f64,
    pub carousel_interval_ms: u32,
    pub progress_reveal_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub notification_duration_ms: u32,
    pub notification_exit_ms: u32,
    pub notification_limit: Option<usize>,
    pub submit_latency_ms: u32,
    pub loading_screen_delay_ms: u32,
    pub loading_screen_fade_ms: u32,
    pub contact_endpoint: Option<String>,
    pub log_level: LogLevel,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl UiConfig {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_json::from_str(source)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        Self {
            navbar_scroll_threshold_px: bounded_f64(
                raw.navbar_scroll_threshold_px,
                DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            back_to_top_threshold_px: bounded_f64(
                raw.back_to_top_threshold_px,
                DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            active_section_offset_px: bounded_f64(
                raw.active_section_offset_px,
                DEFAULT_ACTIVE_SECTION_OFFSET_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            menu_collapse_width_px: bounded_f64(
                raw.menu_collapse_width_px,
                DEFAULT_MENU_COLLAPSE_WIDTH_PX,
                VIEWPORT_WIDTH_PX_BOUNDS,
            ),
            carousel_interval_ms: bounded_u32(
                raw.carousel_interval_ms,
                DEFAULT_CAROUSEL_INTERVAL_MS,
                CAROUSEL_INTERVAL_MS_BOUNDS,
            ),
            progress_reveal_delay_ms: bounded_u32(
                raw.progress_reveal_delay_ms,
                DEFAULT_PROGRESS_REVEAL_DELAY_MS,
                SHORT_DELAY_MS_BOUNDS,
            ),
            counter_duration_ms: bounded_u32(
                raw.counter_duration_ms,
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            counter_tick_ms: bounded_u32(
                raw.counter_tick_ms,
                DEFAULT_COUNTER_TICK_MS,
                COUNTER_TICK_MS_BOUNDS,
            ),
            notification_duration_ms: bounded_u32(
                raw.notification_duration_ms,
                DEFAULT_NOTIFICATION_DURATION_MS,
                NOTIFICATION_DURATION_MS_BOUNDS,
            ),
            notification_exit_ms: bounded_u32(
                raw.notification_exit_ms,
                DEFAULT_NOTIFICATION_EXIT_MS,
                SHORT_DELAY_MS_BOUNDS,
            ),
            notification_limit: raw
                .notification_limit
                .filter(|value| (NOTIFICATION_LIMIT_BOUNDS.0..=NOTIFICATION_LIMIT_BOUNDS.1).contains(value)),
            submit_latency_ms: bounded_u32(
                raw.submit_latency_ms,
                DEFAULT_SUBMIT_LATENCY_MS,
                SUBMIT_LATENCY_MS_BOUNDS,
            ),
            loading_screen_delay_ms: bounded_u32(
                raw.loading_screen_delay_ms,
                DEFAULT_LOADING_SCREEN_DELAY_MS,
                SHORT_DELAY_MS_BOUNDS,
            ),
            loading_screen_fade_ms: bounded_u32(
                raw.loading_screen_fade_ms,
                DEFAULT_LOADING_SCREEN_FADE_MS,
                SHORT_DELAY_MS_BOUNDS,
            ),
            contact_endpoint: raw.contact_endpoint.as_deref().and_then(parse_endpoint),
            log_level: parse_log_level(raw.log_level.as_deref(), DEFAULT_LOG_LEVEL),
        }
    }
}

fn bounded_u32(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn bounded_f64(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

/// Accepts an absolute http(s) URL or a same-origin path.
fn parse_endpoint(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.starts_with('/') && !value.starts_with("//") {
        return Some(value.to_string());
    }

    let parsed = Url::parse(value).ok()?;
    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed.to_string())
    } else {
        None
    }
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default.as_str())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}
