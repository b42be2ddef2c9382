use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "floodrisk",
    "floodrisk_depth",
    "floodrisk_io",
    "floodrisk_risk",
    "floodrisk_sources",
    "floodrisk_stats",
];

/// Build the default filter directive for a CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_covers_every_crate() {
        let d = default_directive(1);
        for t in CRATE_TARGETS {
            assert!(d.contains(&format!("{t}=info")), "{d}");
        }
    }

    #[test]
    fn verbosity_levels() {
        assert!(default_directive(0).starts_with("floodrisk=warn"));
        assert!(default_directive(2).starts_with("floodrisk=debug"));
        assert!(default_directive(9).starts_with("floodrisk=trace"));
    }
}
