use chrono::Utc;

use crate::error::SourceError;
use crate::limiter::RequestLimiter;
use crate::models::{DownloadSummary, PackageRecord};
use crate::sources::downloads::DownloadsSource;
use crate::sources::ecosystems::EcosystemsSource;
use crate::sources::registry::RegistrySource;
use crate::trends::{bucketize, TrendWindow, WeekAlignment};

/// Base URL for the public package page linked from each record.
const PACKAGE_PAGE_URL: &str = "https://www.npmjs.com/package";

/// Per-package orchestrator: fetches the three upstream sources and composes
/// one normalized record, or an error record when any stage fails.
pub struct PackageEnricher {
    registry: RegistrySource,
    ecosystems: EcosystemsSource,
    downloads: DownloadsSource,
    limiter: RequestLimiter,
    window: TrendWindow,
    alignment: WeekAlignment,
}

impl PackageEnricher {
    pub fn new(
        registry: RegistrySource,
        ecosystems: EcosystemsSource,
        downloads: DownloadsSource,
        limiter: RequestLimiter,
        window: TrendWindow,
        alignment: WeekAlignment,
    ) -> Self {
        Self {
            registry,
            ecosystems,
            downloads,
            limiter,
            window,
            alignment,
        }
    }

    /// Enrich a single package.
    ///
    /// Never fails: any upstream status, missing-data, or transport fault is
    /// converted into an error record here so the batch keeps going.
    pub async fn enrich(&self, name: &str) -> PackageRecord {
        match self.try_enrich(name).await {
            Ok(record) => {
                tracing::debug!("Enriched package: {}", name);
                record
            }
            Err(err) => {
                tracing::warn!("Failed to enrich package {}: {}", name, err);
                PackageRecord::failed(name, err.to_string())
            }
        }
    }

    async fn try_enrich(&self, name: &str) -> Result<PackageRecord, SourceError> {
        // The three calls are sequenced per package; concurrency comes from
        // enriching many packages at once, all gated by the shared limiter.
        let metadata = self.limiter.run(self.registry.fetch_metadata(name)).await?;
        let stats = self
            .limiter
            .run(self.ecosystems.fetch_usage_stats(name))
            .await?;

        let (start, end) = self.window.date_range(Utc::now().date_naive());
        let series = self
            .limiter
            .run(self.downloads.fetch_daily_downloads(name, start, end))
            .await?;
        let weekly_trends = bucketize(&series, self.alignment);

        Ok(PackageRecord {
            name: name.to_string(),
            description: metadata.description,
            link: format!("{}/{}", PACKAGE_PAGE_URL, name),
            dependencies: metadata.dependencies,
            peer_dependencies: metadata.peer_dependencies,
            downloads: DownloadSummary {
                total: stats.total_downloads,
                weekly_trends,
            },
            dependent_packages_count: stats.dependent_count,
            latest_version: metadata.latest_version,
            error: None,
        })
    }
}
