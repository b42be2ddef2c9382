//! Run command: full workflow on synthetic streamflow and vulnerability data.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use floodrisk_io::{write_discharge_csv, write_vulnerability_csv};
use floodrisk_sources::{synthetic_discharge, synthetic_vulnerability};

use crate::cli::RunArgs;
use crate::convert;
use crate::pipeline;

/// Run the full flood risk workflow.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    info!(
        started = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "flood risk impact mapping"
    );

    // 1. Load project TOML and build configs
    let mut config = pipeline::load_config(&args.config, false)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    info!(
        huc_id = %config.study_area.huc_id,
        name = %config.study_area.name,
        forecast_range = %config.nwm.forecast_range,
        real_time_hour = config.nwm.real_time_hour,
        "study area"
    );

    let discharge_cfg = convert::build_discharge_config(&config.discharge, &config.study_area)?;
    let rating = convert::build_rating_curve(&config.rating)?;
    let svi_cfg = convert::build_vulnerability_config(&config.vulnerability, &config.study_area)?;
    let table = convert::build_depth_table(config.depth_classes.as_deref())?;
    let pairing = convert::parse_pairing(&config.pairing)?;
    let fallback = convert::parse_pairing_fallback(&config.pairing)?;
    let layout = convert::build_output_layout(&config.io, args.output.as_deref())?;
    layout.create_dirs().context("failed to create output directories")?;

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 2. Streamflow
    let discharge =
        synthetic_discharge(&discharge_cfg, &mut rng).context("streamflow generation failed")?;
    let path = layout.discharge_path();
    write_discharge_csv(&path, &discharge)
        .with_context(|| format!("failed to write discharge: {}", path.display()))?;

    // 3. Depths
    let depths = rating
        .depths(&discharge)
        .context("depth estimation failed")?;

    // 4. Vulnerability
    let vulnerability = synthetic_vulnerability(&svi_cfg, &mut rng)
        .context("vulnerability generation failed")?;
    let path = layout.vulnerability_path();
    write_vulnerability_csv(&path, &vulnerability)
        .with_context(|| format!("failed to write vulnerability: {}", path.display()))?;

    // 5. Risk
    let assessment = pipeline::assess(
        &depths,
        &vulnerability,
        &table,
        &pairing,
        fallback.as_ref(),
    )?;
    pipeline::write_outputs(&layout, &assessment)?;

    println!("Risk Map Statistics:");
    for line in pipeline::summary_lines(&assessment.stats) {
        println!("{line}");
    }
    info!(
        output = %layout.output_dir().display(),
        results = %layout.results_dir().display(),
        "workflow complete"
    );
    Ok(())
}
