//! Manifest-driven file mirroring.
//!
//! Some panorama archives publish a plain-text manifest (one entry per
//! line) instead of a fixed tile grid. Each data line carries at least
//! eight whitespace-separated fields; the first is a relative file path,
//! optionally double-quoted. Header lines starting with `File` and blank
//! lines are ignored, and malformed lines are skipped with a warning.

use rayon::prelude::*;
use tracing::{info, warn};

use super::fetcher::{FetchError, FetchReport};
use super::store::TileStore;
use crate::provider::HttpClient;

/// Minimum whitespace-separated fields for a valid manifest line.
const MIN_FIELDS: usize = 8;

/// One manifest entry: a relative path to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the manifest's base URL.
    pub relative_path: String,
    /// Final path component, used as the local file name.
    pub file_name: String,
}

/// A parsed file manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parses manifest text, skipping headers, blanks, and malformed lines.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for line in text.lines() {
            if line.starts_with("File") || line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < MIN_FIELDS {
                warn!(%line, "skipping malformed manifest line");
                continue;
            }
            let relative_path = fields[0].trim_matches('"').to_string();
            let file_name = relative_path
                .rsplit('/')
                .next()
                .unwrap_or(relative_path.as_str())
                .to_string();
            entries.push(ManifestEntry {
                relative_path,
                file_name,
            });
        }
        Self { entries }
    }

    /// The parsed entries in manifest order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Mirrors every manifest entry from `base_url` into `store`.
///
/// Same guarantees as the grid fetcher: present files are skipped,
/// failures are isolated per entry, and the call returns only after all
/// entries settled.
pub fn fetch_manifest<C: HttpClient>(
    http: &C,
    base_url: &str,
    manifest: &Manifest,
    store: &TileStore,
    parallelism: usize,
) -> Result<FetchReport, FetchError> {
    info!(
        entries = manifest.len(),
        workers = parallelism,
        "mirroring manifest"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism.max(1))
        .build()
        .map_err(|e| FetchError::WorkerPool(e.to_string()))?;

    let base = base_url.trim_end_matches('/');
    let results: Vec<Option<bool>> = pool.install(|| {
        manifest
            .entries
            .par_iter()
            .map(|entry| {
                if store.contains(&entry.file_name) {
                    return Some(false);
                }
                let url = format!("{}/{}", base, entry.relative_path);
                let bytes = match http.get(&url) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(%url, error = %e, "manifest download failed");
                        return None;
                    }
                };
                match store.write(&entry.file_name, &bytes) {
                    Ok(_) => Some(true),
                    Err(e) => {
                        warn!(file = %entry.file_name, error = %e, "manifest write failed");
                        None
                    }
                }
            })
            .collect()
    });

    let mut report = FetchReport {
        total: manifest.len(),
        ..FetchReport::default()
    };
    for result in results {
        match result {
            Some(true) => report.fetched += 1,
            Some(false) => report.skipped += 1,
            None => report.failed += 1,
        }
    }

    info!(
        fetched = report.fetched,
        skipped = report.skipped,
        failed = report.failed,
        "manifest mirror complete"
    );
    Ok(report)
}
