//! Deterministic reach-to-location pairing policies.

use std::collections::{BTreeMap, HashMap};

use floodrisk_depth::{ClassifiedDepthRecord, GeoPoint};

use crate::error::RiskError;
use crate::record::VulnerabilityRecord;

/// How each flooded reach selects its vulnerability record.
///
/// Every policy is a pure function of the inputs, so repeated runs over the
/// same records yield the same pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pairing {
    /// The i-th flooded reach (input order) takes vulnerability record
    /// `i mod n`.
    #[default]
    RoundRobin,
    /// Great-circle nearest vulnerability location to the reach position.
    /// Ties go to the lower record index. Every flooded reach needs a
    /// position.
    Nearest,
    /// Declared foreign key from `reach_id` to `location_id`.
    Keyed(BTreeMap<String, String>),
}

impl Pairing {
    /// Short name used in logs and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round-robin",
            Self::Nearest => "nearest",
            Self::Keyed(_) => "keyed",
        }
    }
}

/// A pairing policy bound to one set of vulnerability records.
pub(crate) enum Pairer<'a> {
    RoundRobin {
        n: usize,
    },
    Nearest {
        points: Vec<GeoPoint>,
    },
    Keyed {
        keys: &'a BTreeMap<String, String>,
        index: HashMap<&'a str, usize>,
    },
}

impl<'a> Pairer<'a> {
    /// Prepares lookup structures for `pairing` over `vulnerability`.
    ///
    /// `vulnerability` must be non-empty and already validated.
    pub(crate) fn new(
        pairing: &'a Pairing,
        vulnerability: &'a [VulnerabilityRecord],
    ) -> Result<Self, RiskError> {
        debug_assert!(!vulnerability.is_empty());
        Ok(match pairing {
            Pairing::RoundRobin => Pairer::RoundRobin {
                n: vulnerability.len(),
            },
            Pairing::Nearest => Pairer::Nearest {
                points: vulnerability
                    .iter()
                    .map(VulnerabilityRecord::position)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            Pairing::Keyed(keys) => {
                let mut index = HashMap::with_capacity(vulnerability.len());
                for (i, v) in vulnerability.iter().enumerate() {
                    if index.insert(v.location_id.as_str(), i).is_some() {
                        return Err(RiskError::InvalidInput {
                            reason: format!(
                                "duplicate location_id '{}' in vulnerability records",
                                v.location_id
                            ),
                        });
                    }
                }
                Pairer::Keyed { keys, index }
            }
        })
    }

    /// Index of the vulnerability record paired with `reach`, the
    /// `ordinal`-th flooded reach.
    pub(crate) fn select(
        &self,
        ordinal: usize,
        reach: &ClassifiedDepthRecord,
    ) -> Result<usize, RiskError> {
        match self {
            Pairer::RoundRobin { n } => Ok(ordinal % n),
            Pairer::Nearest { points } => {
                let origin = reach.position.ok_or_else(|| RiskError::InvalidInput {
                    reason: format!(
                        "reach '{}' has no position; nearest pairing needs coordinates",
                        reach.reach_id
                    ),
                })?;
                Ok(nearest_index(&origin, points))
            }
            Pairer::Keyed { keys, index } => {
                let location = keys.get(&reach.reach_id).ok_or_else(|| {
                    RiskError::InvalidInput {
                        reason: format!("no pairing key for reach '{}'", reach.reach_id),
                    }
                })?;
                index
                    .get(location.as_str())
                    .copied()
                    .ok_or_else(|| RiskError::InvalidInput {
                        reason: format!(
                            "reach '{}' is keyed to unknown location '{location}'",
                            reach.reach_id
                        ),
                    })
            }
        }
    }
}

/// Index of the point closest to `origin`; the first one wins ties.
///
/// `points` must be non-empty.
fn nearest_index(origin: &GeoPoint, points: &[GeoPoint]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = origin.distance_km(p);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reach(id: &str, position: Option<GeoPoint>) -> ClassifiedDepthRecord {
        ClassifiedDepthRecord {
            reach_id: id.to_string(),
            depth_m: 1.0,
            position,
            severity_class: 3,
            severity_name: "High".to_string(),
        }
    }

    fn svi() -> Vec<VulnerabilityRecord> {
        vec![
            VulnerabilityRecord::new("LOC_0000", -84.0, 35.0, 2),
            VulnerabilityRecord::new("LOC_0001", -83.0, 36.0, 8),
            VulnerabilityRecord::new("LOC_0002", -82.0, 37.0, 16),
        ]
    }

    #[test]
    fn round_robin_wraps() {
        let svi = svi();
        let pairing = Pairing::RoundRobin;
        let pairer = Pairer::new(&pairing, &svi).unwrap();
        let r = reach("a", None);
        let picks: Vec<usize> = (0..5).map(|i| pairer.select(i, &r).unwrap()).collect();
        assert_eq!(picks, [0, 1, 2, 0, 1]);
    }

    #[test]
    fn nearest_picks_closest() {
        let svi = svi();
        let pairing = Pairing::Nearest;
        let pairer = Pairer::new(&pairing, &svi).unwrap();
        let near_second = reach("a", Some(GeoPoint::new(-83.1, 36.05).unwrap()));
        assert_eq!(pairer.select(0, &near_second).unwrap(), 1);
        let near_last = reach("b", Some(GeoPoint::new(-81.0, 38.0).unwrap()));
        assert_eq!(pairer.select(1, &near_last).unwrap(), 2);
    }

    #[test]
    fn nearest_tie_goes_to_lower_index() {
        let points = vec![
            GeoPoint::new(-83.0, 36.0).unwrap(),
            GeoPoint::new(-83.0, 36.0).unwrap(),
        ];
        let origin = GeoPoint::new(-83.5, 36.0).unwrap();
        assert_eq!(nearest_index(&origin, &points), 0);
    }

    #[test]
    fn nearest_requires_position() {
        let svi = svi();
        let pairing = Pairing::Nearest;
        let pairer = Pairer::new(&pairing, &svi).unwrap();
        let err = pairer.select(0, &reach("lost", None)).unwrap_err();
        assert!(err.to_string().contains("reach 'lost' has no position"));
    }

    #[test]
    fn keyed_lookup() {
        let svi = svi();
        let keys = BTreeMap::from([
            ("a".to_string(), "LOC_0002".to_string()),
            ("b".to_string(), "LOC_9999".to_string()),
        ]);
        let pairing = Pairing::Keyed(keys);
        let pairer = Pairer::new(&pairing, &svi).unwrap();
        assert_eq!(pairer.select(0, &reach("a", None)).unwrap(), 2);
        assert!(pairer.select(0, &reach("b", None)).is_err());
        assert!(pairer.select(0, &reach("c", None)).is_err());
    }

    #[test]
    fn keyed_rejects_duplicate_locations() {
        let mut svi = svi();
        svi.push(VulnerabilityRecord::new("LOC_0000", -83.0, 35.0, 4));
        let pairing = Pairing::Keyed(BTreeMap::new());
        assert!(Pairer::new(&pairing, &svi).is_err());
    }

    #[test]
    fn pairing_names() {
        assert_eq!(Pairing::RoundRobin.name(), "round-robin");
        assert_eq!(Pairing::Nearest.name(), "nearest");
        assert_eq!(Pairing::Keyed(BTreeMap::new()).name(), "keyed");
        assert_eq!(Pairing::default(), Pairing::RoundRobin);
    }
}
