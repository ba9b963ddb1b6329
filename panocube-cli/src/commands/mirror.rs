//! Mirror command - download every file listed in a remote manifest.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use panocube::fetch::{self, Manifest, TileStore, DEFAULT_PARALLELISM};
use panocube::provider::{HttpClient, ReqwestClient};

use crate::error::CliError;

/// Arguments for the mirror command.
#[derive(Args)]
pub struct MirrorArgs {
    /// Base URL the manifest and its entries are resolved against.
    #[arg(long)]
    pub base_url: String,

    /// Manifest file name under the base URL.
    #[arg(long, default_value = "coordinates.txt")]
    pub manifest: String,

    /// Local directory to mirror into.
    #[arg(long, short, default_value = "mirror")]
    pub output: PathBuf,

    /// Concurrent download workers.
    #[arg(long, default_value_t = DEFAULT_PARALLELISM)]
    pub parallel: usize,
}

pub fn run(args: MirrorArgs) -> Result<(), CliError> {
    let http = ReqwestClient::new()?;

    let base = args.base_url.trim_end_matches('/');
    let manifest_url = format!("{}/{}", base, args.manifest);
    info!(url = %manifest_url, "fetching manifest");
    let text = String::from_utf8_lossy(&http.get(&manifest_url)?).into_owned();

    let manifest = Manifest::parse(&text);
    if manifest.is_empty() {
        return Err(CliError::Config(format!(
            "manifest {} lists no files",
            manifest_url
        )));
    }

    let store = TileStore::new(&args.output);
    let report = fetch::fetch_manifest(&http, base, &manifest, &store, args.parallel)?;

    println!(
        "{} fetched, {} skipped, {} failed ({} listed)",
        report.fetched, report.skipped, report.failed, report.total
    );
    Ok(())
}
