//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use floodrisk_depth::{DepthClass, DepthClassTable};
use floodrisk_io::OutputLayout;
use floodrisk_risk::Pairing;
use floodrisk_sources::{BoundingBox, DischargeConfig, RatingCurve, VulnerabilityConfig};

use crate::config::*;

/// Parses a pairing method name into the corresponding policy.
///
/// `keys` is only consulted for the "keyed" method and must then be
/// non-empty.
pub fn parse_pairing(p: &PairingToml) -> Result<Pairing> {
    match p.method.to_lowercase().replace('_', "-").as_str() {
        "nearest" => Ok(Pairing::Nearest),
        "round-robin" | "roundrobin" => Ok(Pairing::RoundRobin),
        "keyed" => {
            if p.keys.is_empty() {
                bail!("keyed pairing requires a non-empty [pairing].keys table");
            }
            Ok(Pairing::Keyed(p.keys.clone()))
        }
        other => bail!("unknown pairing method: {other:?}"),
    }
}

/// Parses the optional `[pairing] fallback` method.
///
/// The fallback only replaces "nearest", so it cannot itself be "nearest".
pub fn parse_pairing_fallback(p: &PairingToml) -> Result<Option<Pairing>> {
    let Some(ref method) = p.fallback else {
        return Ok(None);
    };
    let fallback = parse_pairing(&PairingToml {
        method: method.clone(),
        keys: p.keys.clone(),
        fallback: None,
    })
    .context("invalid [pairing].fallback")?;
    if fallback == Pairing::Nearest {
        bail!("[pairing].fallback cannot be \"nearest\"");
    }
    Ok(Some(fallback))
}

/// Builds the study-area [`BoundingBox`].
pub fn build_bbox(area: &StudyAreaToml) -> Result<BoundingBox> {
    BoundingBox::from_array(area.bbox)
        .with_context(|| format!("invalid bbox for study area {:?}", area.name))
}

/// Builds a [`DischargeConfig`] from the TOML discharge settings.
pub fn build_discharge_config(
    discharge: &DischargeToml,
    area: &StudyAreaToml,
) -> Result<DischargeConfig> {
    let cfg = DischargeConfig::new(&area.huc_id)
        .with_n_reaches(discharge.n_reaches)
        .with_n_flood_reaches(discharge.n_flood_reaches)
        .with_log_normal(discharge.log_mean, discharge.log_sd)
        .with_flood_factor(discharge.flood_factor[0], discharge.flood_factor[1])
        .with_bbox(build_bbox(area)?);
    cfg.validate().context("invalid [discharge] settings")?;
    Ok(cfg)
}

/// Builds a [`RatingCurve`] from the TOML rating settings.
pub fn build_rating_curve(rating: &RatingToml) -> Result<RatingCurve> {
    RatingCurve::new(rating.divisor, rating.exponent, rating.max_depth_m)
        .context("invalid [rating] settings")
}

/// Builds a [`VulnerabilityConfig`] from the TOML vulnerability settings.
pub fn build_vulnerability_config(
    vulnerability: &VulnerabilityToml,
    area: &StudyAreaToml,
) -> Result<VulnerabilityConfig> {
    Ok(VulnerabilityConfig::new()
        .with_n_locations(vulnerability.n_locations)
        .with_bbox(build_bbox(area)?))
}

/// Builds the [`DepthClassTable`]; the FEMA table when no classes are given.
pub fn build_depth_table(classes: Option<&[DepthClassToml]>) -> Result<DepthClassTable> {
    let Some(classes) = classes else {
        return Ok(DepthClassTable::fema());
    };
    let classes = classes
        .iter()
        .map(|c| match c.max {
            Some(max) => DepthClass::new(&c.name, c.min, max),
            None => DepthClass::unbounded(&c.name, c.min),
        })
        .collect();
    DepthClassTable::new(classes).context("invalid [[depth_classes]] table")
}

/// Builds the [`OutputLayout`].
///
/// `root_override` replaces `[io].output_root`; explicit directory entries
/// still win over the root-derived defaults.
pub fn build_output_layout(
    io: &IoToml,
    root_override: Option<&std::path::Path>,
) -> Result<OutputLayout> {
    let root = root_override.unwrap_or(io.output_root.as_path());
    let mut layout = OutputLayout::new(root);
    if let Some(ref dir) = io.data_dir {
        layout = layout.with_data_dir(dir);
    }
    if let Some(ref dir) = io.output_dir {
        layout = layout.with_output_dir(dir);
    }
    if let Some(ref dir) = io.results_dir {
        layout = layout.with_results_dir(dir);
    }
    if let Some(ref stamp) = io.stamp {
        layout = layout.with_stamp(stamp);
    }
    layout.validate().context("invalid [io] settings")?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::*;

    fn pairing(method: &str) -> PairingToml {
        PairingToml {
            method: method.to_string(),
            keys: BTreeMap::new(),
            fallback: None,
        }
    }

    #[test]
    fn pairing_names() {
        assert_eq!(parse_pairing(&pairing("nearest")).unwrap(), Pairing::Nearest);
        assert_eq!(
            parse_pairing(&pairing("round_robin")).unwrap(),
            Pairing::RoundRobin
        );
        assert_eq!(
            parse_pairing(&pairing("Round-Robin")).unwrap(),
            Pairing::RoundRobin
        );
        assert!(parse_pairing(&pairing("random")).is_err());
    }

    #[test]
    fn keyed_pairing_needs_keys() {
        assert!(parse_pairing(&pairing("keyed")).is_err());

        let mut p = pairing("keyed");
        p.keys.insert("r1".to_string(), "LOC_0001".to_string());
        match parse_pairing(&p).unwrap() {
            Pairing::Keyed(keys) => assert_eq!(keys["r1"], "LOC_0001"),
            other => panic!("expected keyed pairing, got {other:?}"),
        }
    }

    #[test]
    fn pairing_fallback_is_opt_in() {
        assert_eq!(parse_pairing_fallback(&pairing("nearest")).unwrap(), None);

        let mut p = pairing("nearest");
        p.fallback = Some("round_robin".to_string());
        assert_eq!(
            parse_pairing_fallback(&p).unwrap(),
            Some(Pairing::RoundRobin)
        );

        p.fallback = Some("nearest".to_string());
        assert!(parse_pairing_fallback(&p).is_err());
        p.fallback = Some("random".to_string());
        assert!(parse_pairing_fallback(&p).is_err());
    }

    #[test]
    fn default_depth_table_is_fema() {
        assert_eq!(build_depth_table(None).unwrap(), DepthClassTable::fema());
    }

    #[test]
    fn custom_depth_table() {
        let classes = vec![
            DepthClassToml {
                name: "Wet".to_string(),
                min: 0.1,
                max: Some(1.0),
            },
            DepthClassToml {
                name: "Deep".to_string(),
                min: 1.0,
                max: None,
            },
        ];
        let table = build_depth_table(Some(classes.as_slice())).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.classify_depth(3.0).class, 2);
    }

    #[test]
    fn depth_table_with_gap_is_rejected() {
        let classes = vec![
            DepthClassToml {
                name: "A".to_string(),
                min: 0.1,
                max: Some(0.5),
            },
            DepthClassToml {
                name: "B".to_string(),
                min: 0.6,
                max: None,
            },
        ];
        assert!(build_depth_table(Some(classes.as_slice())).is_err());
    }

    #[test]
    fn invalid_bbox_is_rejected() {
        let area = StudyAreaToml {
            bbox: [-82.0, 35.0, -84.0, 37.0],
            ..StudyAreaToml::default()
        };
        assert!(build_bbox(&area).is_err());
    }

    #[test]
    fn discharge_config_from_defaults() {
        let cfg =
            build_discharge_config(&DischargeToml::default(), &StudyAreaToml::default()).unwrap();
        assert_eq!(cfg.huc_id(), "06010105");
        assert_eq!(cfg.n_reaches(), 150);
        assert_eq!(cfg.n_flood_reaches(), 15);
    }

    #[test]
    fn too_many_flood_reaches_is_rejected() {
        let discharge = DischargeToml {
            n_reaches: 5,
            n_flood_reaches: 6,
            ..DischargeToml::default()
        };
        assert!(build_discharge_config(&discharge, &StudyAreaToml::default()).is_err());
    }

    #[test]
    fn rating_curve_rejects_zero_divisor() {
        let rating = RatingToml {
            divisor: 0.0,
            ..RatingToml::default()
        };
        assert!(build_rating_curve(&rating).is_err());
    }

    #[test]
    fn layout_root_override() {
        let io = IoToml {
            output_root: PathBuf::from("from_config"),
            results_dir: Some(PathBuf::from("elsewhere")),
            stamp: Some("20240101".to_string()),
            ..IoToml::default()
        };
        let layout = build_output_layout(&io, Some(Path::new("cli_root"))).unwrap();
        assert_eq!(layout.data_dir(), Path::new("cli_root/data"));
        assert_eq!(layout.results_dir(), Path::new("elsewhere"));
        assert_eq!(layout.stamp(), "20240101");
    }
}
