use futures::future;

use crate::enricher::PackageEnricher;
use crate::models::BatchResult;

/// Fans a batch of package names out over the enricher and collects the
/// results in input order.
pub struct BatchRunner {
    enricher: PackageEnricher,
}

impl BatchRunner {
    pub fn new(enricher: PackageEnricher) -> Self {
        Self { enricher }
    }

    /// Enrich every package in `names`.
    ///
    /// The output has exactly one record per input name, in the same order
    /// regardless of completion order. Individual failures are recorded in
    /// their record's `error` field and tallied; they never abort the batch.
    pub async fn run(&self, names: &[String]) -> BatchResult {
        tracing::info!("Enriching {} packages", names.len());

        let tasks = names.iter().map(|name| self.enricher.enrich(name));
        let records = future::join_all(tasks).await;

        let failures = records.iter().filter(|r| !r.is_success()).count();
        BatchResult {
            successes: records.len() - failures,
            failures,
            records,
        }
    }
}
