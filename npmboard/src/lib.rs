pub mod batch;
pub mod enricher;
pub mod error;
pub mod limiter;
pub mod models;
pub mod sources;
pub mod trends;

pub use batch::BatchRunner;
pub use enricher::PackageEnricher;
pub use error::SourceError;
pub use limiter::{RequestLimiter, DEFAULT_MAX_CONCURRENT_REQUESTS};
pub use models::{
    BatchResult, DailyDownload, DownloadSummary, PackageRecord, RawMetadata, UsageStats,
    WeeklyBucket,
};
pub use trends::{bucketize, TrendWindow, WeekAlignment};
