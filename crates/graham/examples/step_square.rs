//! Step through a tiny hull and print each stack.
//!
//! Run: `cargo run -p graham --example step_square`

use graham::prelude::*;

fn main() {
    let points = vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(0, 4), pt(2, 2), pt(1, 3)];
    let mut scan = match HullScan::new(&points) {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    while !scan.is_complete() {
        let event = scan.step();
        let snap = scan.snapshot();
        let stack: Vec<(i64, i64)> = snap.stack.iter().map(|p| (p.x, p.y)).collect();
        println!("{:?} {:?} stack={:?}", snap.phase, event, stack);
    }
    if let Some(hull) = scan.result() {
        println!("hull vertices: {}", hull.vertex_count());
    }
}
