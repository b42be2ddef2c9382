//! Classification properties over the FEMA table.

use floodrisk_depth::{DepthClass, DepthClassTable, DepthRecord, GeoPoint, classify};

fn single(depth: f64) -> (u8, String) {
    let out = classify(&[DepthRecord::new("r", depth)], &DepthClassTable::fema()).unwrap();
    (out[0].severity_class, out[0].severity_name.clone())
}

#[test]
fn documented_boundary_values() {
    assert_eq!(single(0.0001), (1, "Low".to_string()));
    assert_eq!(single(0.39999), (1, "Low".to_string()));
    assert_eq!(single(0.4), (2, "Moderate".to_string()));
    assert_eq!(single(5.0), (4, "Very High".to_string()));
}

#[test]
fn every_lower_bound_belongs_to_its_own_class() {
    let table = DepthClassTable::fema();
    for (i, class) in table.classes().iter().enumerate() {
        let out = classify(&[DepthRecord::new("r", class.min())], &table).unwrap();
        assert_eq!(out[0].severity_class as usize, i + 1, "at {}", class.min());
    }
}

#[test]
fn exactly_one_class_per_depth() {
    let table = DepthClassTable::fema();
    for step in 0..=5000 {
        let depth = step as f64 * 0.001;
        let containing = table
            .classes()
            .iter()
            .filter(|c| c.contains(depth))
            .count();
        let class = table.classify_depth(depth).class;
        if class == 0 {
            assert_eq!(containing, 0, "depth {depth}");
            assert!(depth < table.impact_threshold());
        } else {
            assert_eq!(containing, 1, "depth {depth}");
            assert!(table.classes()[class as usize - 1].contains(depth));
        }
    }
}

#[test]
fn severity_is_monotone_in_depth() {
    let depths: Vec<f64> = (0..2000).map(|i| i as f64 * 0.0025).collect();
    let records: Vec<DepthRecord> = depths
        .iter()
        .map(|&d| DepthRecord::new(format!("{d}"), d))
        .collect();
    let out = classify(&records, &DepthClassTable::fema()).unwrap();
    for pair in out.windows(2) {
        assert!(pair[0].severity_class <= pair[1].severity_class);
    }
}

#[test]
fn result_independent_of_record_order() {
    let table = DepthClassTable::fema();
    let forward: Vec<DepthRecord> = [0.0, 0.3, 0.9, 2.5, 0.4]
        .iter()
        .enumerate()
        .map(|(i, &d)| DepthRecord::new(format!("r{i}"), d))
        .collect();
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = classify(&forward, &table).unwrap();
    let mut b = classify(&reversed, &table).unwrap();
    b.reverse();
    assert_eq!(a, b);
}

#[test]
fn position_is_carried_through() {
    let p = GeoPoint::new(-83.2, 35.9).unwrap();
    let out = classify(
        &[DepthRecord::new("r", 1.0).with_position(p)],
        &DepthClassTable::fema(),
    )
    .unwrap();
    assert_eq!(out[0].position, Some(p));
}

#[test]
fn custom_table_scheme() {
    let table = DepthClassTable::new(vec![
        DepthClass::new("Nuisance", 0.05, 0.3),
        DepthClass::new("Minor", 0.3, 1.0),
        DepthClass::new("Major", 1.0, 3.0),
        DepthClass::new("Severe", 3.0, 6.0),
        DepthClass::unbounded("Extreme", 6.0),
    ])
    .unwrap();
    let out = classify(
        &[
            DepthRecord::new("a", 0.01),
            DepthRecord::new("b", 0.3),
            DepthRecord::new("c", 7.0),
        ],
        &table,
    )
    .unwrap();
    let classes: Vec<u8> = out.iter().map(|r| r.severity_class).collect();
    assert_eq!(classes, [0, 2, 5]);
    assert_eq!(out[2].severity_name, "Extreme");
}
