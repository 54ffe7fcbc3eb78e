use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::DailyDownload;

/// Default base URL of the downloads API.
pub const DEFAULT_DOWNLOADS_URL: &str = "https://api.npmjs.org/downloads";

/// Fetches the raw daily download series for a package over a date range.
pub struct DownloadsSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RangeResponse {
    #[serde(default)]
    downloads: Vec<DailyDownload>,
}

impl DownloadsSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch per-day download counts for `name` over the inclusive range
    /// `[start, end]`, in chronological order. An empty series is valid.
    pub async fn fetch_daily_downloads(
        &self,
        name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyDownload>, SourceError> {
        let url = format!(
            "{}/range/{}:{}/{}",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            name
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::status("download stats", response.status()));
        }
        let body: RangeResponse = response.json().await?;

        Ok(body.downloads)
    }
}
