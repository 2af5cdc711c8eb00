use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// In-bounds 4-connected neighbors, in `Dir::NBR_DIRS` order.
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        Dir::NBR_DIRS
            .into_iter()
            .filter_map(move |dir| dir.nbr_of(self, rows, cols))
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const NBR_DIRS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub const fn nbr_of(self, pos: Coord, rows: usize, cols: usize) -> Option<Coord> {
        match self {
            Dir::Up => {
                if pos.row == 0 {
                    None
                } else {
                    Some(Coord::new(pos.row - 1, pos.col))
                }
            }
            Dir::Down => {
                if pos.row + 1 >= rows {
                    None
                } else {
                    Some(Coord::new(pos.row + 1, pos.col))
                }
            }
            Dir::Left => {
                if pos.col == 0 {
                    None
                } else {
                    Some(Coord::new(pos.row, pos.col - 1))
                }
            }
            Dir::Right => {
                if pos.col + 1 >= cols {
                    None
                } else {
                    Some(Coord::new(pos.row, pos.col + 1))
                }
            }
        }
    }
}
