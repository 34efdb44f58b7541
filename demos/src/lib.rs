//! Terraced terrain generator shared by the demo binaries.
//!
//! Heights come from a few random round hills cut into terraces. A rock
//! ridge splits the map in two with a single gap, and a few swamp patches
//! make some low ground expensive to cross.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use terrace_core::{Grid, Point};
use terrace_paths::SearchParams;

pub const WIDTH: i32 = 48;
pub const HEIGHT: i32 = 16;

pub const GROUND: char = '.';
pub const SLOPE: char = ':';
pub const PEAK: char = '^';
pub const SWAMP: char = '~';
pub const ROCK: char = '#';

pub const SWAMP_COST: f64 = 3.0;
pub const PEAK_COST: f64 = 1.5;

const HILLS: usize = 5;
const SWAMPS: usize = 3;
const GAP: i32 = 3;
// Distance covered by one height level on a hillside.
const TERRACE: f64 = 2.0;

struct Disc {
    centre: Point,
    radius: f64,
}

impl Disc {
    fn random(rng: &mut StdRng, min_r: f64, max_r: f64) -> Self {
        Self {
            centre: Point::new(rng.random_range(0..WIDTH), rng.random_range(0..HEIGHT)),
            radius: rng.random_range(min_r..max_r),
        }
    }

    fn reach(&self, p: Point) -> f64 {
        let d = p - self.centre;
        self.radius - f64::from(d.x * d.x + d.y * d.y).sqrt()
    }
}

/// Generate a `WIDTH` x `HEIGHT` terraced map from `seed`.
///
/// Neighbouring cells never differ by more than one height level, so every
/// cell off the ridge is reachable with a step-up limit of one.
pub fn generate(seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let hills: Vec<Disc> = (0..HILLS)
        .map(|_| Disc::random(&mut rng, 4.0, 10.0))
        .collect();
    let swamps: Vec<Disc> = (0..SWAMPS)
        .map(|_| Disc::random(&mut rng, 1.5, 3.5))
        .collect();
    let ridge_x = WIDTH / 2;
    let gap_y = rng.random_range(0..=HEIGHT - GAP);

    let mut grid = Grid::filled(WIDTH, HEIGHT, GROUND);
    for c in grid.iter_mut() {
        let p = c.pos();
        let rise = hills.iter().map(|h| h.reach(p)).fold(0.0, f64::max);
        c.height_level = (rise / TERRACE).floor() as i32;
        c.tag = if p.x == ridge_x && !(gap_y..gap_y + GAP).contains(&p.y) {
            ROCK
        } else if c.height_level == 0 && swamps.iter().any(|s| s.reach(p) >= 0.0) {
            SWAMP
        } else {
            match c.height_level {
                0 => GROUND,
                1 | 2 => SLOPE,
                _ => PEAK,
            }
        };
    }
    grid.set_walkable(&ROCK, false);
    grid.set_cost(&SWAMP, SWAMP_COST);
    grid.set_cost(&PEAK, PEAK_COST);
    grid
}

/// Search settings used by the demo: one level of climbing, diagonals that
/// may not squeeze past rock.
pub fn demo_params() -> SearchParams {
    SearchParams::new()
        .with_max_step_up(1)
        .with_diagonals(true)
        .with_walls_block_diagonals(true)
}

/// Top-left and bottom-right corners of the map.
pub fn corners() -> (Point, Point) {
    (Point::ZERO, Point::new(WIDTH - 1, HEIGHT - 1))
}
