use std::fmt::{Display, Formatter, Write};

use bitvec::bitvec;
use log::{debug, warn};
use rand::{thread_rng, Rng, SeedableRng};

use crate::{coord::Coord, GridError, Pcg};

pub type Tile = u8;

pub const UNFILLED: Tile = 0;
pub const OBSTACLE: Tile = 1;
pub const DEFAULT_FILL: Tile = 2;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        for (i, tile) in self.tiles.iter().enumerate() {
            f.write_char(match *tile {
                UNFILLED => '.',
                OBSTACLE => '#',
                digit @ 2..=9 => char::from(b'0' + digit),
                _ => '*',
            })?;
            if i % self.cols == self.cols - 1 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Panics on a zero or overflowing dimension; `try_new` reports it instead.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = Self::tile_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            tiles: vec![UNFILLED; len],
        })
    }

    /// Number of tiles in a `rows` x `cols` grid, if one can exist.
    pub fn tile_count(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        rows.checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { rows, cols })
    }

    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            tiles.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
        })
    }

    /// Build from a row-major tile buffer, as handed over by the JS side.
    pub fn from_flat(rows: usize, cols: usize, tiles: Vec<Tile>) -> Result<Self, GridError> {
        let expected = Self::tile_count(rows, cols)?;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Coord) -> Option<Tile> {
        self.in_bounds(pos)
            .then(|| self.tiles[pos.row * self.cols + pos.col])
    }

    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Coord, tile: Tile) {
        assert!(self.in_bounds(pos), "{pos} is outside a {}x{} grid", self.rows, self.cols);
        self.tiles[pos.row * self.cols + pos.col] = tile;
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Scatter `obstacle_count` obstacles uniformly over an otherwise unfilled grid.
    /// The count is clamped so at least one cell stays free for a start tile.
    pub fn generate(rows: usize, cols: usize, obstacle_count: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self::new(rows, cols); // guarantees rows/cols are positive
        let max_obstacles = grid.len() - 1;
        let obstacle_count = if obstacle_count > max_obstacles {
            warn!("clamping obstacle count {obstacle_count} to {max_obstacles} for a {rows}x{cols} grid");
            max_obstacles
        } else {
            obstacle_count
        };

        let mut taken = bitvec![0; grid.len()];
        let mut placed = 0;
        let mut draws = 0usize;
        while placed < obstacle_count {
            draws += 1;
            let idx = rng.gen_range(0..grid.len());
            if taken[idx] {
                continue;
            }
            taken.set(idx, true);
            grid.tiles[idx] = OBSTACLE;
            placed += 1;
        }
        debug!("placed {placed} obstacles on a {rows}x{cols} grid in {draws} draws");
        grid
    }

    pub fn generate_seeded(rows: usize, cols: usize, obstacle_count: usize, seed: u64) -> Self {
        Self::generate(rows, cols, obstacle_count, &mut Pcg::seed_from_u64(seed))
    }
}

pub fn generate_grid(rows: usize, cols: usize, obstacle_count: usize) -> Grid {
    Grid::generate(rows, cols, obstacle_count, &mut thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_places_exact_obstacle_count() {
        let mut rng = Pcg::seed_from_u64(7);
        for (rows, cols, k) in [(1, 1, 0), (3, 4, 5), (10, 10, 30), (10, 10, 99), (2, 7, 13)] {
            let grid = Grid::generate(rows, cols, k, &mut rng);
            assert_eq!(grid.count(OBSTACLE), k);
            assert_eq!(grid.count(UNFILLED), rows * cols - k);
        }
    }

    #[test]
    fn generate_clamps_to_leave_one_free_cell() {
        let mut rng = Pcg::seed_from_u64(1);
        let grid = Grid::generate(3, 3, 50, &mut rng);
        assert_eq!(grid.count(OBSTACLE), 8);
        assert_eq!(grid.count(UNFILLED), 1);

        let single = Grid::generate(1, 1, 4, &mut rng);
        assert_eq!(single.count(OBSTACLE), 0);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(
            Grid::generate_seeded(8, 8, 20, 42),
            Grid::generate_seeded(8, 8, 20, 42)
        );
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(&[]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[vec![]]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&[vec![0, 0], vec![0]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_flat(2, 2, vec![0; 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rows_round_trip_and_indexing() {
        let rows = vec![vec![0, 1, 0], vec![2, 0, 7]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(OBSTACLE));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(7));
        assert_eq!(grid.get(Coord::new(2, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 3)), None);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let grid = Grid::from_rows(&[vec![0, 1], vec![2, 12]]).unwrap();
        assert_eq!(grid.to_string(), ".#\n2*\n");
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            Grid::from_flat(huge, huge, vec![]),
            Err(GridError::TooLarge {
                rows: huge,
                cols: huge
            })
        );
        assert_eq!(
            Grid::try_new(usize::MAX, 2),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(Grid::tile_count(0, usize::MAX), Err(GridError::Empty));
        assert_eq!(Grid::tile_count(3, 4), Ok(12));
    }

    #[test]
    #[should_panic]
    fn zero_sized_grid_panics() {
        let _ = Grid::new(0, 3);
    }
}
