//! Unit tests for nearest-depot clustering.

use cw_mdvrp::cluster::cluster_by_nearest_depot;
use cw_mdvrp::geo::Coordinate;
use cw_mdvrp::problem::{Depot, Node};
use cw_mdvrp::report::Diagnostic;

fn depot(id: &str, latitude: f64, longitude: f64) -> Depot {
    Depot::new(id.to_string(), Coordinate::new(latitude, longitude), None)
}

fn vendor(id: &str, latitude: f64, longitude: f64) -> Node {
    Node::vendor(id.to_string(), Coordinate::new(latitude, longitude), 1.0)
}

fn order_for(id: &str, vendor_id: &str, latitude: f64, longitude: f64, demand: f64) -> Node {
    Node::order(
        id.to_string(),
        Coordinate::new(latitude, longitude),
        demand,
        Some(vendor_id.to_string()),
    )
}

#[test]
fn test_cluster_assigns_nearest_depot() {
    let depots = vec![depot("near", 0.0, 0.0), depot("far", 10.0, 10.0)];
    let vendors = vec![vendor("v", 0.0, 0.1)];
    let orders = vec![
        order_for("o1", "v", 0.0, 0.11, 2.0),
        order_for("o2", "v", 0.0, 0.12, 3.0),
    ];

    let outcome = cluster_by_nearest_depot(&depots, &vendors, &orders);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.clusters.len(), 1);

    let clusters = &outcome.clusters["near"];
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].vendor.id, "v");
    assert_eq!(clusters[0].orders.len(), 2);
    assert!(!outcome.clusters.contains_key("far"));
}

#[test]
fn test_cluster_tie_goes_to_first_depot() {
    let depots = vec![depot("first", 0.0, 0.0), depot("second", 0.0, 0.0)];
    let vendors = vec![vendor("v", 0.0, 0.1)];

    let outcome = cluster_by_nearest_depot(&depots, &vendors, &[]);

    assert!(outcome.clusters.contains_key("first"));
    assert!(!outcome.clusters.contains_key("second"));
}

#[test]
fn test_cluster_no_depot_available() {
    let vendors = vec![vendor("v1", 0.0, 0.1), vendor("v2", 1.0, 1.0)];
    let orders = vec![order_for("o1", "v1", 0.0, 0.11, 2.0)];

    let outcome = cluster_by_nearest_depot(&[], &vendors, &orders);

    assert!(outcome.clusters.is_empty());
    assert_eq!(
        outcome.diagnostics,
        vec![
            Diagnostic::NoDepotAvailable {
                vendor_id: "v1".to_string(),
            },
            Diagnostic::NoDepotAvailable {
                vendor_id: "v2".to_string(),
            },
        ]
    );
}

#[test]
fn test_cluster_groups_orders_by_vendor_reference() {
    let depots = vec![depot("d", 0.0, 0.0)];
    let vendors = vec![vendor("v1", 0.0, 0.1), vendor("v2", 0.0, -0.1)];
    let orders = vec![
        order_for("o1", "v1", 0.0, 0.11, 2.0),
        order_for("o2", "v2", 0.0, -0.11, 3.0),
        order_for("o3", "v1", 0.0, 0.12, 1.0),
    ];

    let outcome = cluster_by_nearest_depot(&depots, &vendors, &orders);

    let clusters = &outcome.clusters["d"];
    assert_eq!(clusters.len(), 2);

    let v1_cluster = clusters.iter().find(|c| c.vendor.id == "v1").expect("v1");
    let ids: Vec<&str> = v1_cluster.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o1", "o3"]);

    let v2_cluster = clusters.iter().find(|c| c.vendor.id == "v2").expect("v2");
    let ids: Vec<&str> = v2_cluster.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o2"]);
}

#[test]
fn test_cluster_drops_orders_without_known_vendor() {
    let depots = vec![depot("d", 0.0, 0.0)];
    let vendors = vec![vendor("v", 0.0, 0.1)];
    let orders = vec![
        order_for("good", "v", 0.0, 0.11, 2.0),
        order_for("orphan", "nope", 0.0, 0.12, 2.0),
        Node::order(
            "unreferenced".to_string(),
            Coordinate::new(0.0, 0.13),
            2.0,
            None,
        ),
    ];

    let outcome = cluster_by_nearest_depot(&depots, &vendors, &orders);

    let clusters = &outcome.clusters["d"];
    assert_eq!(clusters.len(), 1);
    let ids: Vec<&str> = clusters[0].orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["good"]);
}

#[test]
fn test_cluster_no_closer_depot_exists() {
    let depots = vec![
        depot("a", 0.0, 0.0),
        depot("b", 0.0, 1.0),
        depot("c", 1.0, 0.5),
    ];
    let vendors = vec![
        vendor("v1", 0.1, 0.1),
        vendor("v2", 0.1, 0.9),
        vendor("v3", 0.9, 0.5),
    ];

    let outcome = cluster_by_nearest_depot(&depots, &vendors, &[]);

    for (depot_id, clusters) in &outcome.clusters {
        let assigned = depots.iter().find(|d| &d.id == depot_id).expect("depot");
        for cluster in clusters {
            let assigned_distance = assigned
                .coordinate
                .distance_to(&cluster.vendor.coordinate);
            for other in &depots {
                let other_distance = other.coordinate.distance_to(&cluster.vendor.coordinate);
                assert!(other_distance >= assigned_distance);
            }
        }
    }
}

#[test]
fn test_cluster_does_not_mutate_inputs() {
    let depots = vec![depot("d", 0.0, 0.0)];
    let vendors = vec![vendor("v", 0.0, 0.1)];
    let orders = vec![order_for("o1", "v", 0.0, 0.11, 2.0)];

    let vendors_before = vendors.clone();
    let orders_before = orders.clone();

    let _ = cluster_by_nearest_depot(&depots, &vendors, &orders);

    assert_eq!(vendors, vendors_before);
    assert_eq!(orders, orders_before);
}
