//! Run record written next to every footprint collection.
//!
//! One `<out stem>.provenance.json` per `generate` run: the code revision and
//! crate version that produced the file, the exact parameters and seed needed
//! to replay it, and what came out.

use anyhow::{Context, Result};
use blockgen::BlockParams;
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything needed to replay a run bit for bit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunParams {
    pub input: String,
    pub seed: u64,
    pub target_segment_length: f64,
    pub variation_fraction: f64,
    pub footprint_depth: f64,
    pub close_ring: bool,
}

impl RunParams {
    pub fn new(input: &Path, seed: u64, params: &BlockParams) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            seed,
            target_segment_length: params.target_segment_length,
            variation_fraction: params.variation_fraction,
            footprint_depth: params.footprint_depth,
            close_ring: params.close_ring,
        }
    }
}

/// Counts for one run; `failed` blocks produced no footprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub blocks: usize,
    pub failed: usize,
    pub footprints: usize,
    /// Unix seconds, shared by every feature of the run.
    pub generated_at: u64,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    code_rev: Option<String>,
    blockgen_version: &'static str,
    callsite: Callsite,
    params: &'a RunParams,
    summary: &'a RunSummary,
    outputs: [String; 1],
}

/// Write the run record beside `out` and return its path.
#[track_caller]
pub fn write_run_record(out: &Path, params: &RunParams, summary: &RunSummary) -> Result<PathBuf> {
    let caller = Location::caller();
    let record = RunRecord {
        code_rev: git_rev(),
        blockgen_version: blockgen::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params,
        summary,
        outputs: [out.to_string_lossy().into_owned()],
    };
    let path = record_path(out);
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `blocks.geojson` → `blocks.provenance.json`, in the same directory.
fn record_path(out: &Path) -> PathBuf {
    out.with_extension("provenance.json")
}

/// `HEAD` of the working directory's git checkout, if there is one.
pub fn git_rev() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}
