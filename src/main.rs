use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use symbios_ribbon::{RibbonConfig, RibbonInterpreter, logging};
use tracing::info;

/// Expand the ribbon L-System and synthesize its mesh.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of generations.
    #[arg(short, long)]
    generations: Option<u32>,
}

fn main() -> Result<()> {
    logging::init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RibbonConfig::load(path)?,
        None => RibbonConfig::default(),
    };
    if let Some(generations) = args.generations {
        config.generations = generations;
    }

    let interpreter = RibbonInterpreter::new(config)?;
    interpreter.check_capacity()?;
    let sequence = interpreter.expand();
    let mesh = interpreter.build_mesh(&sequence)?;

    info!(
        symbols = sequence.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        corners = mesh.corner_count(),
        "mesh ready for upload"
    );
    Ok(())
}
