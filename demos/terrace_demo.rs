//! Terminal demo: generate a terraced map and route across it.
//!
//! Run: cargo run --bin terrace-demo [seed]

use std::io;

use terrace_demos::{corners, demo_params, generate};
use terrace_paths::find_path_at;
use terrace_render::term::{Palette, write_grid};

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(2);
        }
    };

    let grid = generate(seed);
    let (start, dest) = corners();
    let path = find_path_at(&grid, start, dest, &demo_params());

    if let Err(e) = write_grid(&mut io::stdout(), &grid, path.as_ref(), &Palette::default()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    match path {
        Some(p) if !p.is_empty() => println!(
            "seed {seed}: {start} -> {dest} in {} cells, cost {:.1}",
            p.len(),
            p.total_cost()
        ),
        _ => println!("seed {seed}: no route from {start} to {dest}"),
    }
}
