//! Basic example: route a two-depot delivery problem.

use cw_mdvrp::config::Config;
use cw_mdvrp::geo::Coordinate;
use cw_mdvrp::problem::{Depot, Node};
use cw_mdvrp::utils::{plan_to_json, save_plan};
use cw_mdvrp::MultiDepotRouter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let depots = vec![
        Depot::new(
            "north".to_string(),
            Coordinate::new(52.5200, 13.4050),
            Some(12.0),
        ),
        Depot::new("south".to_string(), Coordinate::new(52.4500, 13.3800), None),
    ];

    let vendors = vec![
        Node::vendor("bakery".to_string(), Coordinate::new(52.5100, 13.4100), 2.0),
        Node::vendor("grocer".to_string(), Coordinate::new(52.4600, 13.3700), 3.0),
    ];

    let orders = vec![
        Node::order(
            "o1".to_string(),
            Coordinate::new(52.5300, 13.4200),
            3.0,
            Some("bakery".to_string()),
        ),
        Node::order(
            "o2".to_string(),
            Coordinate::new(52.5400, 13.4300),
            4.0,
            Some("bakery".to_string()),
        ),
        Node::order(
            "o3".to_string(),
            Coordinate::new(52.4700, 13.3600),
            5.0,
            Some("grocer".to_string()),
        ),
        Node::order(
            "o4".to_string(),
            Coordinate::new(52.4400, 13.3500),
            2.0,
            Some("grocer".to_string()),
        ),
    ];

    println!(
        "Routing {} orders from {} vendors across {} depots",
        orders.len(),
        vendors.len(),
        depots.len()
    );

    let router = MultiDepotRouter::new(Config::new());
    let solution = router.route(&depots, &vendors, &orders);

    println!("{:?}", solution);

    let mut nodes = vendors.clone();
    nodes.extend(orders.iter().cloned());

    let output_path = "plan.txt";
    println!("Saving plan to: {}", output_path);
    save_plan(&solution, &depots, &nodes, output_path)?;

    println!("{}", plan_to_json(&solution)?);

    Ok(())
}
