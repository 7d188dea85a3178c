//! Close an L-shaped polygon a few times and print the resulting meshes.
//!
//! Usage:
//!   cargo run -p polymorph --example l_shape -- [runs]
//!
//! The diagonal choice is random, so each run may pick a different
//! triangulation; counts and area stay fixed.

use polymorph::prelude::*;

fn main() {
    let runs: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let boundary = [
        (0.0, 0.0),
        (0.0, 100.0),
        (50.0, 100.0),
        (50.0, 50.0),
        (100.0, 50.0),
        (100.0, 0.0),
    ];
    for seed in 0..runs {
        let mut p = Polygon::new();
        for (x, y) in boundary {
            let _ = p.add_node(x, y);
        }
        if let Err(e) = p.close_replay(ReplayToken::new(seed)) {
            eprintln!("seed {seed}: {e}");
            continue;
        }
        println!(
            "seed {seed}: diagonals={}, triangles={}, area={:.1}",
            p.diagonals().len(),
            p.triangles().len(),
            p.area()
        );
        for d in p.diagonals() {
            println!("  diagonal {:?} -> {:?}", d.p1().pos(), d.p2().pos());
        }
        for (x, y) in [(25.0, 25.0), (75.0, 75.0)] {
            println!("  inside({x}, {y}) = {}", p.is_inside(x, y));
        }
    }
}
