mod utils;

pub mod coord;
pub mod fill;
pub mod frontier;
pub mod grid;

use thiserror::Error;
use wasm_bindgen::prelude::*;

pub use coord::{Coord, Dir};
pub use fill::{flood_fill, FillSession, StepOutcome, TileClass};
pub use frontier::{Frontier, TraversalOrder};
pub use grid::{generate_grid, Grid, Tile, DEFAULT_FILL, OBSTACLE, UNFILLED};

pub type Pcg = rand_pcg::Pcg32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("start {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("start tile already has fill color {color}, nothing to fill")]
    NoOpFill { color: Tile },
    #[error("no fill is in progress")]
    InvalidState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid needs at least one row and one column")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} tiles, got {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("a {rows}x{cols} grid is too large")]
    TooLarge { rows: usize, cols: usize },
}

enum State {
    Idle(Grid),
    /// Kept after completion so the painted grid stays on screen.
    Filling(FillSession),
}

/// Handle the browser UI drives: load or generate a grid, start a fill, then step it.
#[wasm_bindgen]
pub struct FloodFill {
    state: State,
}

#[wasm_bindgen]
impl FloodFill {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize) -> Result<FloodFill, JsError> {
        utils::set_panic_hook();
        Ok(Self {
            state: State::Idle(Grid::try_new(rows, cols)?),
        })
    }

    /// Replace the grid with a random one. Any running fill is dropped.
    pub fn generate(&mut self, rows: usize, cols: usize, obstacles: usize) -> Result<(), JsError> {
        self.state = State::Idle(checked_generate(rows, cols, obstacles)?);
        Ok(())
    }

    /// Replace the grid with row-major `tiles`. Any running fill is dropped.
    pub fn load(&mut self, rows: usize, cols: usize, tiles: Vec<u8>) -> Result<(), JsError> {
        self.state = State::Idle(Grid::from_flat(rows, cols, tiles)?);
        Ok(())
    }

    pub fn start(
        &mut self,
        row: usize,
        col: usize,
        fill_color: u8,
        order: TraversalOrder,
    ) -> Result<(), JsError> {
        Ok(self.begin(Coord::new(row, col), fill_color, order)?)
    }

    /// Returns true once the fill has finished.
    pub fn step(&mut self) -> Result<bool, JsError> {
        Ok(self.advance()? == StepOutcome::Done)
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        matches!(&self.state, State::Filling(session) if !session.is_complete())
    }

    #[wasm_bindgen(js_name = isDone)]
    pub fn is_done(&self) -> bool {
        matches!(&self.state, State::Filling(session) if session.is_complete())
    }

    pub fn rows(&self) -> usize {
        self.grid().rows()
    }

    pub fn cols(&self) -> usize {
        self.grid().cols()
    }

    pub fn tiles(&self) -> Vec<u8> {
        self.grid().as_slice().to_vec()
    }

    /// Pending coordinates as flattened `[row, col, row, col, ...]`, next to visit first.
    pub fn frontier(&self) -> Vec<u32> {
        match &self.state {
            State::Idle(_) => Vec::new(),
            State::Filling(session) => session
                .frontier()
                .iter()
                .flat_map(|pos| [pos.row as u32, pos.col as u32])
                .collect(),
        }
    }

    /// How the running fill sees a tile; undefined before a fill starts or outside the grid.
    #[wasm_bindgen(js_name = tileClass)]
    pub fn tile_class(&self, row: usize, col: usize) -> Option<TileClass> {
        match &self.state {
            State::Idle(_) => None,
            State::Filling(session) => session.classify(Coord::new(row, col)),
        }
    }

    #[wasm_bindgen(js_name = paintedCount)]
    pub fn painted_count(&self) -> usize {
        match &self.state {
            State::Idle(_) => 0,
            State::Filling(session) => session.painted_count(),
        }
    }
}

impl FloodFill {
    pub fn grid(&self) -> &Grid {
        match &self.state {
            State::Idle(grid) => grid,
            State::Filling(session) => session.grid(),
        }
    }

    /// A finished fill hands its painted grid to the next one.
    fn begin(&mut self, start: Coord, fill_color: Tile, order: TraversalOrder) -> Result<(), FillError> {
        let grid = match &self.state {
            State::Filling(session) if !session.is_complete() => return Err(FillError::InvalidState),
            State::Filling(session) => session.grid().clone(),
            State::Idle(grid) => grid.clone(),
        };
        self.state = State::Filling(FillSession::initialize(grid, start, fill_color, order)?);
        Ok(())
    }

    fn advance(&mut self) -> Result<StepOutcome, FillError> {
        match &mut self.state {
            State::Idle(_) => Err(FillError::InvalidState),
            State::Filling(session) => session.step(),
        }
    }
}

fn checked_generate(rows: usize, cols: usize, obstacles: usize) -> Result<Grid, GridError> {
    Grid::tile_count(rows, cols)?;
    Ok(generate_grid(rows, cols, obstacles))
}

/// Random row-major grid of `UNFILLED` and `OBSTACLE` tiles.
#[wasm_bindgen(js_name = generateGrid)]
pub fn generate_tiles(rows: usize, cols: usize, obstacles: usize) -> Result<Vec<u8>, JsError> {
    Ok(checked_generate(rows, cols, obstacles)?.as_slice().to_vec())
}
