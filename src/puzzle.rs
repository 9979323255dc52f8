use std::fmt;

use crate::error::{Result, TaquinError};

pub const MIN_SIZE: usize = 3;
pub const MAX_SIZE: usize = 5;

/// A board cell as `(x, y)`, column first.
pub type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// `(dx, dy)` with y growing downwards.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One tile relocated into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub from: Pos,
    pub to: Pos,
    pub tile: u8,
}

/// N×N sliding puzzle. `0` is the empty cell and its position is cached in
/// `empty`; every mutation keeps the two in agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Vec<u8>>,
    empty: Pos,
}

impl Board {
    /// Solved board of the given size. Fails outside `MIN_SIZE..=MAX_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(TaquinError::InvalidSize(size));
        }
        Ok(Self::solved(size))
    }

    /// Solved board; callers guarantee `size` is in range.
    pub(crate) fn solved(size: usize) -> Self {
        let mut tiles = Vec::with_capacity(size);
        let mut value = 1;

        for y in 0..size {
            let mut row = Vec::with_capacity(size);
            for x in 0..size {
                if x == size - 1 && y == size - 1 {
                    row.push(0);
                } else {
                    row.push(value);
                    value += 1;
                }
            }
            tiles.push(row);
        }

        Self {
            size,
            tiles,
            empty: (size - 1, size - 1),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn empty(&self) -> Pos {
        self.empty
    }

    pub fn tile_at(&self, x: usize, y: usize) -> Option<u8> {
        self.tiles.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.tiles.iter().map(|row| row.as_slice())
    }

    /// Converts signed coordinates to a cell, `None` when off the board.
    pub fn cell(&self, x: isize, y: isize) -> Option<Pos> {
        let n = self.size as isize;
        if x >= 0 && x < n && y >= 0 && y < n {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    /// The cell one step from `pos` in `dir`, if it is on the board.
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dx, dy) = dir.as_offset();
        self.cell(pos.0 as isize + dx, pos.1 as isize + dy)
    }

    /// True iff `(x, y)` holds a tile orthogonally adjacent to the empty cell.
    pub fn is_valid_move(&self, x: isize, y: isize) -> bool {
        let Some((cx, cy)) = self.cell(x, y) else {
            return false;
        };
        if self.tiles[cy][cx] == 0 {
            return false;
        }
        let (ex, ey) = self.empty;
        cx.abs_diff(ex) + cy.abs_diff(ey) == 1
    }

    /// Moves the tile at `(x, y)` into the empty cell. Leaves the board
    /// untouched and returns `None` when the move is not legal.
    pub fn slide(&mut self, x: isize, y: isize) -> Option<Slide> {
        if !self.is_valid_move(x, y) {
            return None;
        }
        let from = (x as usize, y as usize);
        let to = self.empty;
        let tile = self.tiles[from.1][from.0];

        self.tiles[to.1][to.0] = tile;
        self.tiles[from.1][from.0] = 0;
        self.empty = from;

        Some(Slide { from, to, tile })
    }

    /// Moves the empty cell one step in `movement`, swapping with whatever
    /// tile is there. Returns false at the edge of the board.
    pub fn step_empty(&mut self, movement: Direction) -> bool {
        let Some((nx, ny)) = self.neighbor(self.empty, movement) else {
            return false;
        };
        let (ex, ey) = self.empty;

        self.tiles[ey][ex] = self.tiles[ny][nx];
        self.tiles[ny][nx] = 0;
        self.empty = (nx, ny);
        true
    }

    pub fn is_solved(&self) -> bool {
        let mut expected = 1;

        for y in 0..self.size {
            for x in 0..self.size {
                if x == self.size - 1 && y == self.size - 1 {
                    if self.tiles[y][x] != 0 {
                        return false;
                    }
                } else {
                    if self.tiles[y][x] != expected {
                        return false;
                    }
                    expected += 1;
                }
            }
        }

        true
    }

    /// Whether the current permutation can reach the solved board.
    pub fn is_solvable(&self) -> bool {
        let flattened: Vec<u8> = self.tiles.iter().flatten().copied().collect();
        let inversions = Self::count_inversions(&flattened);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            // Blank row parity counted from the top matches the bottom count
            // for even sizes.
            (inversions + self.empty.1) % 2 == 1
        }
    }

    fn count_inversions(flattened: &[u8]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Cheap structural check: one zero, every value once, cache in sync.
    pub fn is_consistent(&self) -> bool {
        let n = self.size * self.size;
        let mut seen = vec![false; n];
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, &val) in row.iter().enumerate() {
                let v = val as usize;
                if v >= n || seen[v] {
                    return false;
                }
                seen[v] = true;
                if val == 0 && self.empty != (x, y) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for &val in row {
                if val == 0 {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(board: &Board) -> Vec<Vec<u8>> {
        board.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn new_board_is_solved_for_every_size() {
        for n in MIN_SIZE..=MAX_SIZE {
            let b = Board::new(n).unwrap();
            assert!(b.is_solved());
            assert!(b.is_solvable());
            assert!(b.is_consistent());
            assert_eq!(b.empty(), (n - 1, n - 1));
            assert_eq!(b.tile_at(0, 0), Some(1));
            assert_eq!(b.tile_at(n - 1, n - 1), Some(0));
        }
    }

    #[test]
    fn rejects_unsupported_sizes() {
        assert!(matches!(Board::new(2), Err(TaquinError::InvalidSize(2))));
        assert!(matches!(Board::new(6), Err(TaquinError::InvalidSize(6))));
        assert!(Board::new(0).is_err());
    }

    #[test]
    fn tile_at_is_bounds_checked() {
        let b = Board::new(3).unwrap();
        assert_eq!(b.tile_at(3, 0), None);
        assert_eq!(b.tile_at(0, 3), None);
        assert_eq!(b.tile_at(2, 1), Some(6));
    }

    #[test]
    fn valid_moves_are_orthogonal_neighbours_only() {
        let b = Board::new(3).unwrap();
        // Empty at (2, 2).
        assert!(b.is_valid_move(1, 2));
        assert!(b.is_valid_move(2, 1));
        assert!(!b.is_valid_move(2, 2));
        assert!(!b.is_valid_move(1, 1));
        assert!(!b.is_valid_move(0, 2));
        assert!(!b.is_valid_move(3, 2));
        assert!(!b.is_valid_move(2, 3));
        assert!(!b.is_valid_move(-1, 0));
    }

    #[test]
    fn slide_swaps_with_empty_cell() {
        let mut b = Board::new(3).unwrap();
        let slide = b.slide(1, 2).unwrap();
        assert_eq!(
            slide,
            Slide {
                from: (1, 2),
                to: (2, 2),
                tile: 8
            }
        );
        assert_eq!(grid(&b), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        assert_eq!(b.empty(), (1, 2));
        assert!(!b.is_solved());
        assert!(b.is_consistent());
    }

    #[test]
    fn rejected_slide_leaves_board_alone() {
        let mut b = Board::new(4).unwrap();
        let before = b.clone();
        for _ in 0..3 {
            assert_eq!(b.slide(0, 0), None);
        }
        assert_eq!(b, before);
    }

    #[test]
    fn step_empty_stops_at_edges() {
        let mut b = Board::new(3).unwrap();
        assert!(!b.step_empty(Direction::Right));
        assert!(!b.step_empty(Direction::Down));
        assert!(b.step_empty(Direction::Up));
        assert_eq!(b.empty(), (2, 1));
        assert_eq!(b.tile_at(2, 2), Some(6));
        assert!(b.step_empty(Direction::Down));
        assert!(b.is_solved());
    }

    #[test]
    fn odd_permutation_is_unsolvable() {
        let mut b = Board::new(3).unwrap();
        b.tiles[0].swap(0, 1);
        assert!(!b.is_solvable());
        assert!(b.is_consistent());
    }

    #[test]
    fn direction_opposites_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.as_offset();
            let (ox, oy) = d.opposite().as_offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn display_leaves_empty_cell_blank() {
        let b = Board::new(3).unwrap();
        assert_eq!(b.to_string(), " 1  2  3 \n 4  5  6 \n 7  8    \n");
    }
}
