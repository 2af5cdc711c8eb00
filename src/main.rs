use std::convert::TryInto;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::{thread_rng, Rng};
use wasm_flood_fill::{Coord, FillSession, Grid, TraversalOrder, DEFAULT_FILL, UNFILLED};

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn random_start(grid: &Grid, rng: &mut impl Rng) -> Coord {
    loop {
        let pos = Coord::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if grid.get(pos) == Some(UNFILLED) {
            return pos;
        }
    }
}

fn time_fills(size: usize, density: f32, num_iters: u128) {
    println!("filling grids of size {}x{} at {:.0}% obstacles...", size, size, density * 100.0);
    let mut rng = thread_rng();
    let obstacles = (size as f32 * size as f32 * density) as usize;
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let mut total_time = 0;
        let mut total_steps = 0;
        for _ in 0..num_iters {
            let grid = Grid::generate(size, size, obstacles, &mut rng);
            let start = random_start(&grid, &mut rng);
            let now = Instant::now();
            let mut session = FillSession::initialize(grid, start, DEFAULT_FILL, order)
                .expect("start is an unfilled tile");
            total_steps += black_box(session.run_to_completion().expect("fresh session"));
            total_time += now.elapsed().as_nanos();
        }
        println!(
            "{:?}: average of {:?}/fill, {} steps/fill",
            order,
            Duration::from_nanos((total_time / num_iters).try_into().unwrap()),
            total_steps as u128 / num_iters
        );
    }
}

fn side_by_side(seed: u64) {
    let grid = Grid::generate_seeded(10, 10, 25, seed);
    let start = grid
        .coords()
        .find(|&pos| grid.get(pos) == Some(UNFILLED))
        .expect("generation leaves a free tile");
    println!("start {start} on\n{grid}");
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        // each order works on its own copy
        let mut session = FillSession::initialize(grid.clone(), start, DEFAULT_FILL, order)
            .expect("start is an unfilled tile");
        let mut peak = 0;
        loop {
            peak = peak.max(session.frontier().len());
            match session.step() {
                Ok(wasm_flood_fill::StepOutcome::Done) => break,
                Ok(_) => {}
                Err(err) => panic!("{err}"),
            }
        }
        println!(
            "{:?}: {} painted, {} steps, peak frontier {}\n{}",
            order,
            session.painted_count(),
            session.steps_taken(),
            peak,
            session.grid()
        );
    }
}

fn main() {
    init_logging();
    side_by_side(7);
    time_fills(40, 0.2, 200);
}
