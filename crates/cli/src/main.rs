mod geojson;
mod provenance;

use anyhow::Result;
use blockgen::{generate_batch, BlockParams};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::geojson::{footprint_feature, read_blocks, write_collection, FootprintMeta};
use crate::provenance::{write_run_record, RunParams, RunSummary};

#[derive(Parser)]
#[command(name = "blockgen-cli")]
#[command(about = "Synthetic building footprints along GeoJSON block outlines")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate footprints for every Polygon feature and write them as GeoJSON
    Generate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
        /// Seed for the frontage jitter; same seed and input give the same output
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Prefix of the generated `name` property
        #[arg(long, default_value = "Building")]
        name_prefix: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct ParamArgs {
    /// Target frontage width in metres
    #[arg(long, default_value_t = BlockParams::default().target_segment_length)]
    target: f64,
    /// Maximum relative deviation of the frontage width, in [0, 1)
    #[arg(long, default_value_t = BlockParams::default().variation_fraction)]
    variation: f64,
    /// Footprint depth in metres
    #[arg(long, default_value_t = BlockParams::default().footprint_depth)]
    depth: f64,
    /// Also fill the side from the last vertex back to the first
    #[arg(long)]
    close_ring: bool,
}

impl From<ParamArgs> for BlockParams {
    fn from(a: ParamArgs) -> Self {
        BlockParams {
            target_segment_length: a.target,
            variation_fraction: a.variation,
            footprint_depth: a.depth,
            close_ring: a.close_ring,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            input,
            out,
            params,
            seed,
            name_prefix,
        } => {
            run_generate(&input, &out, params.into(), seed, &name_prefix)?;
            Ok(())
        }
        Action::Report => report(),
    }
}

fn run_generate(
    input: &Path,
    out: &Path,
    params: BlockParams,
    seed: u64,
    name_prefix: &str,
) -> Result<RunSummary> {
    params.validate()?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        seed,
        target = params.target_segment_length,
        variation = params.variation_fraction,
        depth = params.footprint_depth,
        close_ring = params.close_ring,
        "generate"
    );
    let blocks = read_blocks(input)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let outcomes = generate_batch(blocks.iter().map(|b| b.ring.clone()), params, &mut rng);
    let generated_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let mut features = Vec::new();
    let mut failed = 0;
    for outcome in outcomes {
        let label = &blocks[outcome.index].label;
        let footprints = match outcome.result {
            Ok(fps) => fps,
            Err(err) => {
                tracing::warn!(feature = %label, error = %err, "no footprints for feature");
                failed += 1;
                continue;
            }
        };
        for (n, fp) in footprints.iter().enumerate() {
            let id = format!("{label}-{n}");
            let name = format!("{name_prefix} {id}");
            let meta = FootprintMeta {
                id: &id,
                name: &name,
                source_feature: label,
                generated_at,
            };
            features.push(footprint_feature(fp, &meta));
        }
    }

    let summary = RunSummary {
        blocks: blocks.len(),
        failed,
        footprints: features.len(),
        generated_at,
    };
    write_collection(out, features)?;
    write_run_record(out, &RunParams::new(input, seed, &params), &summary)?;
    tracing::info!(
        blocks = summary.blocks,
        failed = summary.failed,
        footprints = summary.footprints,
        "done"
    );
    Ok(summary)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::git_rev(),
        "blockgen_version": blockgen::VERSION,
        "defaults": RunParams::new(Path::new("-"), 0, &BlockParams::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
