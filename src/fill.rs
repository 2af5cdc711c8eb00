use log::{debug, trace};
use wasm_bindgen::prelude::*;

use crate::{
    coord::Coord,
    frontier::{Frontier, TraversalOrder},
    grid::{Grid, Tile},
    FillError,
};

/// How a cell relates to the running fill.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Still carries the source color; painted if the fill reaches it.
    Source = 0,
    /// Any other pre-existing value. Never painted, never queued.
    Obstacle = 1,
    /// Carries the fill color.
    Filled = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    Painted(Coord),
    /// A stale frontier entry was consumed: the cell had already been painted.
    Skipped(Coord),
    /// The frontier ran dry. Reported exactly once per session.
    Done,
}

/// One steppable flood fill over a grid the session owns.
///
/// The grid is only written by `step`, so anything reading `grid()` and
/// `frontier()` between steps sees a consistent snapshot.
#[derive(Clone, Debug)]
pub struct FillSession {
    grid: Grid,
    frontier: Frontier,
    source_color: Tile,
    fill_color: Tile,
    complete: bool,
    steps_taken: usize,
    paint_order: Vec<Coord>,
}

impl FillSession {
    /// The source color is whatever sits at `start`. Nothing is painted until the first `step`.
    pub fn initialize(
        grid: Grid,
        start: Coord,
        fill_color: Tile,
        order: TraversalOrder,
    ) -> Result<Self, FillError> {
        let Some(source_color) = grid.get(start) else {
            return Err(FillError::OutOfBounds {
                coord: start,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        };
        if source_color == fill_color {
            return Err(FillError::NoOpFill { color: fill_color });
        }
        let mut frontier = Frontier::new(order);
        frontier.push(start);
        debug!(
            "starting {order:?} fill at {start} on a {}x{} grid: {source_color} -> {fill_color}",
            grid.rows(), grid.cols()
        );
        Ok(Self {
            grid,
            frontier,
            source_color,
            fill_color,
            complete: false,
            steps_taken: 0,
            paint_order: Vec::new(),
        })
    }

    pub fn step(&mut self) -> Result<StepOutcome, FillError> {
        if self.complete {
            return Err(FillError::InvalidState);
        }
        let Some(pos) = self.frontier.pop() else {
            self.complete = true;
            debug!(
                "fill finished: {} cells painted in {} steps",
                self.paint_order.len(),
                self.steps_taken
            );
            return Ok(StepOutcome::Done);
        };
        self.steps_taken += 1;

        // the same cell can be queued from several neighbors before it is painted
        if self.grid.get(pos) != Some(self.source_color) {
            trace!("skipping {pos}, already painted");
            return Ok(StepOutcome::Skipped(pos));
        }

        self.grid.set(pos, self.fill_color);
        self.paint_order.push(pos);
        for nbr in pos.neighbors(self.grid.rows(), self.grid.cols()) {
            if self.grid.get(nbr) == Some(self.source_color) {
                self.frontier.push(nbr);
            }
        }
        trace!("painted {pos}, {} pending", self.frontier.len());
        Ok(StepOutcome::Painted(pos))
    }

    /// Step until the fill reports `Done`; returns how many entries were consumed.
    pub fn run_to_completion(&mut self) -> Result<usize, FillError> {
        let mut consumed = 0;
        while self.step()? != StepOutcome::Done {
            consumed += 1;
        }
        Ok(consumed)
    }

    /// `None` outside the grid.
    pub fn classify(&self, pos: Coord) -> Option<TileClass> {
        self.grid.get(pos).map(|tile| match tile {
            t if t == self.source_color => TileClass::Source,
            t if t == self.fill_color => TileClass::Filled,
            _ => TileClass::Obstacle,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn order(&self) -> TraversalOrder {
        self.frontier.order()
    }

    pub fn source_color(&self) -> Tile {
        self.source_color
    }

    pub fn fill_color(&self) -> Tile {
        self.fill_color
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Frontier entries consumed so far, stale ones included.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn painted_count(&self) -> usize {
        self.paint_order.len()
    }

    pub fn paint_order(&self) -> &[Coord] {
        &self.paint_order
    }
}

/// Paint the whole region at once. A start cell already holding `fill_color`
/// leaves the grid untouched.
pub fn flood_fill(grid: Grid, start: Coord, fill_color: Tile) -> Result<Grid, FillError> {
    if grid.get(start) == Some(fill_color) {
        return Ok(grid);
    }
    let mut session = FillSession::initialize(grid, start, fill_color, TraversalOrder::BreadthFirst)?;
    session.run_to_completion()?;
    Ok(session.into_grid())
}
