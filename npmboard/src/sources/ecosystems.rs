use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::UsageStats;

/// Default base URL of the ecosystem statistics service.
pub const DEFAULT_STATS_URL: &str =
    "https://packages.ecosyste.ms/api/v1/registries/npmjs.org/packages";

/// Fetches aggregate download and dependent counts for a package.
pub struct EcosystemsSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PackageStats {
    // Both fields can be absent or null for young packages.
    #[serde(default)]
    downloads: Option<u64>,
    #[serde(default)]
    dependent_packages_count: Option<u64>,
}

impl EcosystemsSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch usage statistics for `name`. Missing fields default to zero and
    /// are never treated as a failure.
    pub async fn fetch_usage_stats(&self, name: &str) -> Result<UsageStats, SourceError> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::status("ecosystem stats", response.status()));
        }
        let stats: PackageStats = response.json().await?;

        Ok(UsageStats {
            total_downloads: stats.downloads.unwrap_or(0),
            dependent_count: stats.dependent_packages_count.unwrap_or(0),
        })
    }
}
