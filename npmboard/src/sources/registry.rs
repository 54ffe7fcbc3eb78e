use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::RawMetadata;

/// Default base URL of the npm registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Fetches canonical package metadata from the registry.
pub struct RegistrySource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    description: Option<String>,
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
    #[serde(default)]
    versions: HashMap<String, VersionManifest>,
}

#[derive(Debug, Deserialize)]
struct VersionManifest {
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(rename = "peerDependencies", default)]
    peer_dependencies: HashMap<String, String>,
}

impl RegistrySource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the registry document for `name` and extract the metadata of its
    /// latest version.
    ///
    /// A package with no resolvable `latest` dist-tag is treated as a data
    /// error, the same as one missing entirely.
    pub async fn fetch_metadata(&self, name: &str) -> Result<RawMetadata, SourceError> {
        let url = format!("{}/{}", self.base_url, name);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::status("package info", response.status()));
        }
        let document: RegistryDocument = response.json().await?;

        let latest = document
            .dist_tags
            .get("latest")
            .and_then(|version| document.versions.get(version).map(|m| (version, m)));
        let Some((version, manifest)) = latest else {
            return Err(SourceError::data("no version information found"));
        };

        // Dependency maps come back keyed by name; sorted names keep the
        // output stable across runs.
        let mut dependencies: Vec<String> = manifest.dependencies.keys().cloned().collect();
        dependencies.sort();
        let mut peer_dependencies: Vec<String> =
            manifest.peer_dependencies.keys().cloned().collect();
        peer_dependencies.sort();

        Ok(RawMetadata {
            description: document.description.unwrap_or_default(),
            dependencies,
            peer_dependencies,
            latest_version: version.clone(),
        })
    }
}
