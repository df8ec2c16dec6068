//! Unit tests for pairwise savings computation.

use cw_mdvrp::geo::Coordinate;
use cw_mdvrp::problem::{Depot, Node};
use cw_mdvrp::savings::compute_savings;

/// Creates a depot at the origin with default capacity.
fn create_depot() -> Depot {
    Depot::new("depot".to_string(), Coordinate::new(0.0, 0.0), None)
}

fn order(id: &str, latitude: f64, longitude: f64, demand: f64) -> Node {
    Node::order(
        id.to_string(),
        Coordinate::new(latitude, longitude),
        demand,
        None,
    )
}

#[test]
fn test_savings_formula() {
    let depot = create_depot();
    let a = order("a", 0.0, 0.01, 1.0);
    let b = order("b", 0.01, 0.02, 1.0);

    let savings = compute_savings(&depot, &[a.clone(), b.clone()]);
    assert_eq!(savings.len(), 1);

    let expected = depot.coordinate.distance_to(&a.coordinate)
        + depot.coordinate.distance_to(&b.coordinate)
        - a.coordinate.distance_to(&b.coordinate);
    assert!((savings[0].value - expected).abs() < 1e-12);
}

#[test]
fn test_savings_one_per_unordered_pair() {
    let depot = create_depot();
    let nodes = vec![
        order("a", 0.0, 0.01, 1.0),
        order("b", 0.0, 0.02, 1.0),
        order("c", 0.0, 0.03, 1.0),
        order("d", 0.0, 0.04, 1.0),
    ];

    let savings = compute_savings(&depot, &nodes);
    assert_eq!(savings.len(), 6);
}

#[test]
fn test_savings_production_order_follows_node_list() {
    let depot = create_depot();
    let nodes = vec![
        order("a", 0.0, 0.01, 1.0),
        order("b", 0.0, 0.02, 1.0),
        order("c", 0.0, 0.03, 1.0),
    ];

    let savings = compute_savings(&depot, &nodes);
    let pairs: Vec<(&str, &str)> = savings
        .iter()
        .map(|s| (s.first.as_str(), s.second.as_str()))
        .collect();

    assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
}

#[test]
fn test_savings_exclude_vendors() {
    let depot = create_depot();
    let nodes = vec![
        Node::vendor("v".to_string(), Coordinate::new(0.0, 0.005), 2.0),
        order("a", 0.0, 0.01, 1.0),
        order("b", 0.0, 0.02, 1.0),
    ];

    let savings = compute_savings(&depot, &nodes);
    assert_eq!(savings.len(), 1);
    assert_eq!(savings[0].first, "a");
    assert_eq!(savings[0].second, "b");
}

#[test]
fn test_savings_empty_for_fewer_than_two_orders() {
    let depot = create_depot();

    assert!(compute_savings(&depot, &[]).is_empty());

    let single = vec![order("a", 0.0, 0.01, 1.0)];
    assert!(compute_savings(&depot, &single).is_empty());

    let vendor_only = vec![Node::vendor(
        "v".to_string(),
        Coordinate::new(0.0, 0.01),
        1.0,
    )];
    assert!(compute_savings(&depot, &vendor_only).is_empty());
}

#[test]
fn test_savings_colinear_orders_rank_highest() {
    // Two orders on the same bearing from the depot save a full leg;
    // orders on opposite sides save nothing.
    let depot = create_depot();
    let nodes = vec![
        order("east1", 0.0, 0.01, 1.0),
        order("east2", 0.0, 0.02, 1.0),
        order("west", 0.0, -0.01, 1.0),
    ];

    let savings = compute_savings(&depot, &nodes);
    let same_side = savings
        .iter()
        .find(|s| s.first == "east1" && s.second == "east2")
        .expect("pair exists");
    let opposite = savings
        .iter()
        .find(|s| s.first == "east1" && s.second == "west")
        .expect("pair exists");

    assert!(same_side.value > 0.0);
    assert!(opposite.value.abs() < 1e-9);
    assert!(same_side.value > opposite.value);
}
