use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata extracted from the registry document for a package's latest version.
#[derive(Debug, Clone)]
pub struct RawMetadata {
    pub description: String,
    pub dependencies: Vec<String>,
    pub peer_dependencies: Vec<String>,
    pub latest_version: String,
}

/// Aggregate usage figures reported by the ecosystem statistics service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageStats {
    pub total_downloads: u64,
    pub dependent_count: u64,
}

/// One day of download counts, as reported by the downloads API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyDownload {
    pub day: NaiveDate,
    pub downloads: u64,
}

/// Downloads summed over one week of daily counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    pub week_ending: NaiveDate,
    pub downloads: u64,
}

/// The `downloads` object of the output document: lifetime total plus the
/// weekly trend series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadSummary {
    pub total: u64,
    pub weekly_trends: Vec<WeeklyBucket>,
}

/// One fully enriched package, or an error marker for a package whose
/// enrichment failed. Field names match the upstream-facing JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub description: String,
    pub link: String,
    pub dependencies: Vec<String>,
    #[serde(rename = "peerDependencies")]
    pub peer_dependencies: Vec<String>,
    pub downloads: DownloadSummary,
    pub dependent_packages_count: u64,
    pub latest_version: String,
    pub error: Option<String>,
}

impl PackageRecord {
    /// Record for a package whose enrichment failed at some stage. Only the
    /// name and the error message survive; every data field is zeroed so
    /// consumers never see half-populated output.
    pub fn failed(name: &str, error: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            link: String::new(),
            dependencies: Vec::new(),
            peer_dependencies: Vec::new(),
            downloads: DownloadSummary::default(),
            dependent_packages_count: 0,
            latest_version: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of a whole batch run: one record per input name, in input order.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub records: Vec<PackageRecord>,
    pub successes: usize,
    pub failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_record_zeroes_all_data_fields() {
        let record = PackageRecord::failed("left-pad", "boom");

        assert_eq!(record.name, "left-pad");
        assert_eq!(record.error.as_deref(), Some("boom"));
        assert!(!record.is_success());
        assert!(record.description.is_empty());
        assert!(record.link.is_empty());
        assert!(record.dependencies.is_empty());
        assert!(record.peer_dependencies.is_empty());
        assert_eq!(record.downloads.total, 0);
        assert!(record.downloads.weekly_trends.is_empty());
        assert_eq!(record.dependent_packages_count, 0);
        assert!(record.latest_version.is_empty());
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let mut record = PackageRecord::failed("left-pad", "boom");
        record.peer_dependencies = vec!["react".to_string()];
        record.downloads.weekly_trends = vec![WeeklyBucket {
            week_ending: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            downloads: 7,
        }];

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["peerDependencies"][0], "react");
        assert_eq!(json["dependent_packages_count"], 0);
        assert_eq!(json["downloads"]["total"], 0);
        assert_eq!(json["downloads"]["weekly_trends"][0]["week_ending"], "2025-01-05");
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn successful_record_serializes_null_error() {
        let mut record = PackageRecord::failed("left-pad", "");
        record.error = None;

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["error"].is_null());
    }
}
