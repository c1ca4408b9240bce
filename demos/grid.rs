//! Index a 100 x 100 integer grid and look up the cell nearest to a few off-grid queries.

use kd_index::kdtree::KDTree;

#[derive(Debug, PartialEq)]
struct Cell {
    x: i32,
    y: i32,
}

fn main() {
    let cells: Vec<Cell> = (0..100)
        .flat_map(|y| (0..100).map(move |x| Cell { x, y }))
        .collect();

    let tree = KDTree::build(cells, |c: &Cell| [c.x as f64, c.y as f64]).unwrap();
    println!(
        "Indexed {} cells in {} dimensions, height {}",
        tree.num_items(),
        tree.dimensions(),
        tree.height()
    );

    for query in [[0.4, -0.4], [42.6, 17.2], [99.9, 100.3], [-5., 50.]] {
        let (cell, dist) = tree.nearest_neighbor_with_distance(&query).unwrap();
        println!(
            "nearest to {:?}: {:?} (distance {:.3})",
            query,
            cell,
            dist.sqrt()
        );
    }
}
