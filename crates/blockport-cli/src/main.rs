//! Blockport CLI - convert scene snapshots to Blockbench models

use anyhow::{Context, Result, bail};
use blockport_core::convert::{BoxPolicy, ExportConfig, RotationStrategy, convert_scene};
use blockport_core::export::{model_name_from_path, write_bbmodel};
use blockport_core::scene::SceneObject;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockport")]
#[command(about = "Convert scene snapshots to Blockbench .bbmodel files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a scene snapshot to a .bbmodel file
    Export {
        /// Input scene snapshot (JSON array of objects)
        #[arg(short, long)]
        input: PathBuf,

        /// Output .bbmodel file
        #[arg(short, long)]
        output: PathBuf,

        /// Model name (defaults to the output file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Rotation conversion strategy
        #[arg(long, value_enum, default_value_t = Strategy::Quat)]
        strategy: Strategy,

        /// Box placement policy
        #[arg(long, value_enum, default_value_t = Policy::Origin)]
        policy: Policy,
    },

    /// Summarize the exportable contents of a scene snapshot
    Inspect {
        /// Input scene snapshot (JSON array of objects)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Rotation strategy flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Permute Euler angle components (flips on compound rotations)
    Euler,
    /// Permute quaternion imaginary components
    Quat,
}

impl From<Strategy> for RotationStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Euler => Self::EulerSwap,
            Strategy::Quat => Self::QuaternionSwap,
        }
    }
}

/// Box placement flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Translate local extremes into world space, remap, sort
    World,
    /// Center the box on the remapped pivot plus local offset
    Origin,
}

impl From<Policy> for BoxPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::World => Self::WorldSpace,
            Policy::Origin => Self::OriginCentered,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            name,
            strategy,
            policy,
        } => run_export(&input, &output, name, strategy, policy),
        Commands::Inspect { input } => run_inspect(&input),
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<SceneObject>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let objects: Vec<SceneObject> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    Ok(objects)
}

fn run_export(
    input: &Path,
    output: &Path,
    name: Option<String>,
    strategy: Strategy,
    policy: Policy,
) -> Result<()> {
    let objects = load_snapshot(input)?;

    let config = ExportConfig {
        strategy: strategy.into(),
        policy: policy.into(),
        ..ExportConfig::default()
    };
    let model_name = name.unwrap_or_else(|| model_name_from_path(output));

    let document = match convert_scene(&objects, &model_name, &config) {
        Ok(document) => document,
        Err(blockport_core::Error::EmptySelection) => {
            bail!("no mesh objects in {}; nothing to export", input.display())
        }
        Err(e) => return Err(e.into()),
    };

    write_bbmodel(&document, output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Exported {} element(s) to {}",
        document.elements.len(),
        output.display()
    );
    Ok(())
}

fn run_inspect(input: &Path) -> Result<()> {
    let objects = load_snapshot(input)?;

    let meshes = objects.iter().filter(|o| o.kind.is_exportable()).count();
    println!(
        "{}: {} object(s), {} exportable mesh(es)",
        input.display(),
        objects.len(),
        meshes
    );
    for object in &objects {
        let marker = if object.kind.is_exportable() { "+" } else { "-" };
        println!(
            "  {marker} {} ({:?}) at {:?}",
            object.name, object.kind, object.transform.translation
        );
    }
    if meshes == 0 {
        println!("  (nothing would be exported)");
    }
    Ok(())
}
