//! Assess command: risk map from existing depth and vulnerability tables.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use floodrisk_io::{read_depth_csv, read_vulnerability_csv};

use crate::cli::AssessArgs;
use crate::convert;
use crate::pipeline;

/// Run the core assessment on externally supplied tables.
pub fn run(args: AssessArgs) -> Result<()> {
    let _cmd = info_span!("assess").entered();

    let config = pipeline::load_config(&args.config, true)?;
    let table = convert::build_depth_table(config.depth_classes.as_deref())?;
    let pairing = convert::parse_pairing(&config.pairing)?;
    let fallback = convert::parse_pairing_fallback(&config.pairing)?;
    let layout = convert::build_output_layout(&config.io, args.output.as_deref())?;

    info!(path = %args.depths.display(), "reading depth table");
    let depths = read_depth_csv(&args.depths)
        .with_context(|| format!("failed to read depths: {}", args.depths.display()))?;

    info!(path = %args.vulnerability.display(), "reading vulnerability table");
    let vulnerability = read_vulnerability_csv(&args.vulnerability).with_context(|| {
        format!(
            "failed to read vulnerability: {}",
            args.vulnerability.display()
        )
    })?;

    let assessment = pipeline::assess(
        &depths,
        &vulnerability,
        &table,
        &pairing,
        fallback.as_ref(),
    )?;

    layout.create_dirs().context("failed to create output directories")?;
    pipeline::write_outputs(&layout, &assessment)?;

    println!("Risk Map Statistics:");
    for line in pipeline::summary_lines(&assessment.stats) {
        println!("{line}");
    }
    Ok(())
}
