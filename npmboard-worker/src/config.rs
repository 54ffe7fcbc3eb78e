use std::env;

use npmboard::sources::downloads::DEFAULT_DOWNLOADS_URL;
use npmboard::sources::ecosystems::DEFAULT_STATS_URL;
use npmboard::sources::registry::DEFAULT_REGISTRY_URL;
use npmboard::trends::{TrendWindow, WeekAlignment};
use npmboard::DEFAULT_MAX_CONCURRENT_REQUESTS;

/// How the worker resolves the trend window and bucketing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Initial population: trailing 60 days of downloads, fixed 7-day chunks.
    Populate,
    /// Refresh of existing records: the last 8 completed calendar weeks.
    Refresh,
}

impl RunMode {
    pub fn trend_window(self) -> TrendWindow {
        match self {
            RunMode::Populate => TrendWindow::TrailingDays(60),
            RunMode::Refresh => TrendWindow::CompletedWeeks(8),
        }
    }

    pub fn week_alignment(self) -> WeekAlignment {
        match self {
            RunMode::Populate => WeekAlignment::FixedChunks,
            RunMode::Refresh => WeekAlignment::CalendarMonday,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub registry_url: String,
    pub stats_url: String,
    pub downloads_url: String,
    pub max_concurrent_requests: usize,
    pub request_timeout_secs: u64,
    pub mode: RunMode,
    pub input_file: String,
    pub output_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            registry_url: env::var("REGISTRY_URL")
                .unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string()),
            stats_url: env::var("STATS_URL").unwrap_or_else(|_| DEFAULT_STATS_URL.to_string()),
            downloads_url: env::var("DOWNLOADS_URL")
                .unwrap_or_else(|_| DEFAULT_DOWNLOADS_URL.to_string()),
            max_concurrent_requests: env::var("MAX_CONCURRENT_REQUESTS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
            mode: match env::var("WORKER_MODE").as_deref() {
                Ok("refresh") => RunMode::Refresh,
                _ => RunMode::Populate,
            },
            input_file: env::var("INPUT_FILE")
                .unwrap_or_else(|_| "data/package_names.json".to_string()),
            output_file: env::var("OUTPUT_FILE")
                .unwrap_or_else(|_| "data/package_info.json".to_string()),
        }
    }
}
