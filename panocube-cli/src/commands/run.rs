//! Run command - full fetch → assemble → project → write pipeline.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::{error, info};

use panocube::fetch::{TileStore, DEFAULT_PARALLELISM};
use panocube::pipeline;
use panocube::provider::{ReqwestClient, StreetViewProvider};

use crate::error::CliError;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Panorama scene id to download.
    #[arg(long, conflicts_with = "sid_list")]
    pub sid: Option<String>,

    /// File with one scene id per line.
    #[arg(long)]
    pub sid_list: Option<PathBuf>,

    /// Output directory; each panorama gets a subdirectory named by sid.
    #[arg(long, short, default_value = "panoramas")]
    pub output: PathBuf,

    /// Tile endpoint override.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Concurrent download workers.
    #[arg(long, default_value_t = DEFAULT_PARALLELISM)]
    pub parallel: usize,
}

pub fn run(args: RunArgs) -> Result<(), CliError> {
    let sids = collect_sids(&args)?;
    if sids.is_empty() {
        return Err(CliError::Config(
            "no scene ids given; use --sid or --sid-list".to_string(),
        ));
    }

    let mut failures = 0usize;
    for sid in &sids {
        if let Err(e) = run_one(&args, sid) {
            // One panorama's failure should not abort the rest of the list.
            error!(%sid, error = %e, "panorama failed");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(CliError::Config(format!(
            "{} of {} panoramas failed",
            failures,
            sids.len()
        )));
    }
    Ok(())
}

fn run_one(args: &RunArgs, sid: &str) -> Result<(), CliError> {
    let http = ReqwestClient::new()?;
    let mut provider = StreetViewProvider::new(http, sid);
    if let Some(base_url) = &args.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    let pano_dir = args.output.join(sid);
    let store = TileStore::new(&pano_dir);
    let summary = pipeline::run(&provider, &store, &pano_dir, args.parallel)?;

    info!(
        %sid,
        fetched = summary.fetch.fetched,
        skipped = summary.fetch.skipped,
        failed = summary.fetch.failed,
        face_size = summary.face_size,
        "skybox complete"
    );
    println!(
        "{}: {} faces of {}px written to {}",
        sid,
        summary.faces.len(),
        summary.face_size,
        pano_dir.display()
    );
    Ok(())
}

fn collect_sids(args: &RunArgs) -> Result<Vec<String>, CliError> {
    if let Some(sid) = &args.sid {
        return Ok(vec![sid.clone()]);
    }
    let Some(path) = &args.sid_list else {
        return Ok(Vec::new());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(parse_sid_list(&text))
}

/// One scene id per line; blank lines are ignored.
fn parse_sid_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
