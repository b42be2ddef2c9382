//! Record-level severity classification.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::DepthError;
use crate::record::{ClassifiedDepthRecord, DepthRecord};
use crate::table::DepthClassTable;

/// Classify every depth record against `table`.
///
/// Output order matches input order; each record's class depends only on its
/// own depth.
///
/// # Errors
///
/// Returns [`DepthError::InvalidInput`] for the first record whose depth is
/// negative or non-finite. Nothing is returned for the other records in that
/// case.
pub fn classify(
    records: &[DepthRecord],
    table: &DepthClassTable,
) -> Result<Vec<ClassifiedDepthRecord>, DepthError> {
    if let Some(bad) = records
        .iter()
        .find(|r| !r.depth_m.is_finite() || r.depth_m < 0.0)
    {
        return Err(DepthError::InvalidInput {
            reach_id: bad.reach_id.clone(),
            depth_m: bad.depth_m,
        });
    }

    let classified: Vec<ClassifiedDepthRecord> = records
        .iter()
        .map(|r| {
            let severity = table.classify_depth(r.depth_m);
            ClassifiedDepthRecord {
                reach_id: r.reach_id.clone(),
                depth_m: r.depth_m,
                position: r.position,
                severity_class: severity.class,
                severity_name: severity.name.to_string(),
            }
        })
        .collect();

    debug!(
        n_records = classified.len(),
        n_flooded = classified.iter().filter(|r| r.is_flooded()).count(),
        "classified depth records"
    );

    Ok(classified)
}

/// Number of records per severity name (including "None"), ordered by
/// class id.
///
/// Only classes that occur are listed.
pub fn severity_distribution(records: &[ClassifiedDepthRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<u8, (&str, usize)> = BTreeMap::new();
    for r in records {
        counts
            .entry(r.severity_class)
            .or_insert((r.severity_name.as_str(), 0))
            .1 += 1;
    }
    counts
        .into_values()
        .map(|(name, n)| (name.to_string(), n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(depths: &[f64]) -> Vec<DepthRecord> {
        depths
            .iter()
            .enumerate()
            .map(|(i, &d)| DepthRecord::new(format!("r{i}"), d))
            .collect()
    }

    #[test]
    fn classify_preserves_order_and_ids() {
        let out = classify(&records(&[2.0, 0.0, 0.5]), &DepthClassTable::fema()).unwrap();
        let ids: Vec<&str> = out.iter().map(|r| r.reach_id.as_str()).collect();
        assert_eq!(ids, ["r0", "r1", "r2"]);
        let classes: Vec<u8> = out.iter().map(|r| r.severity_class).collect();
        assert_eq!(classes, [4, 0, 2]);
        assert_eq!(out[1].severity_name, "None");
    }

    #[test]
    fn classify_empty_input() {
        let out = classify(&[], &DepthClassTable::fema()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn negative_depth_rejected() {
        let result = classify(&records(&[0.5, -0.1]), &DepthClassTable::fema());
        match result {
            Err(DepthError::InvalidInput { reach_id, depth_m }) => {
                assert_eq!(reach_id, "r1");
                assert_eq!(depth_m, -0.1);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_depth_rejected() {
        let table = DepthClassTable::fema();
        assert!(classify(&records(&[f64::NAN]), &table).is_err());
        assert!(classify(&records(&[f64::INFINITY]), &table).is_err());
    }

    #[test]
    fn distribution_counts() {
        let out = classify(&records(&[0.0, 0.1, 0.2, 3.0]), &DepthClassTable::fema()).unwrap();
        let dist = severity_distribution(&out);
        assert_eq!(
            dist,
            vec![
                ("None".to_string(), 1),
                ("Low".to_string(), 2),
                ("Very High".to_string(), 1),
            ]
        );
    }
}
