use crate::piece::{Piece, PieceKind};

/// A single cell of the playfield.
///
/// Occupied cells remember which piece kind produced them; the planner only
/// inspects occupancy, the kind is carried for rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The playfield: 10 columns × 24 rows, row 0 at the top.
///
/// The top [`Grid::HIDDEN_ROWS`] rows are the hidden buffer above the visible
/// field; pieces spawn there. Piece cells may temporarily sit above row 0
/// during rotation near the ceiling — such cells never collide and are not
/// written when the piece locks.
///
/// The grid always holds exactly `HEIGHT × WIDTH` cells; only a full-row
/// removal ever clears occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; Self::WIDTH]; Self::HEIGHT],
}

impl Grid {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 24;
    pub const HIDDEN_ROWS: usize = 4;
    pub const VISIBLE_HEIGHT: usize = Self::HEIGHT - Self::HIDDEN_ROWS;

    pub const EMPTY: Self = Self {
        rows: [[Cell::Empty; Self::WIDTH]; Self::HEIGHT],
    };

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; Self::WIDTH]> {
        self.rows.iter()
    }

    /// Checks occupancy of a cell by signed coordinates.
    ///
    /// Coordinates above the ceiling (`y < 0`) read as empty.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        debug_assert!((0..Self::WIDTH as i16).contains(&x));
        debug_assert!(y < Self::HEIGHT as i16);
        y >= 0 && !self.rows[y as usize][x as usize].is_empty()
    }

    /// Checks whether the piece overlaps a wall, the floor, or occupied cells.
    ///
    /// A shape cell collides when it falls outside `[0, WIDTH)` horizontally,
    /// at or past `HEIGHT` vertically, or onto an occupied cell at row ≥ 0.
    /// Cells above the ceiling (row < 0) never collide.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn is_colliding(&self, piece: Piece) -> bool {
        piece.cells().any(|(x, y)| {
            !(0..Self::WIDTH as i16).contains(&x)
                || y >= Self::HEIGHT as i16
                || (y >= 0 && !self.rows[y as usize][x as usize].is_empty())
        })
    }

    /// Writes the piece's shape cells into the grid as occupied cells.
    ///
    /// Cells with row < 0 are not written: they vanish above the ceiling.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lock_piece(&mut self, piece: Piece) {
        let kind = piece.kind();
        for (x, y) in piece.cells() {
            debug_assert!((0..Self::WIDTH as i16).contains(&x));
            if (0..Self::HEIGHT as i16).contains(&y) {
                self.rows[y as usize][x as usize] = Cell::Piece(kind);
            }
        }
    }

    /// Removes every row with zero empty cells and returns how many were
    /// removed.
    ///
    /// Remaining rows keep their relative order; that many blank rows are
    /// inserted at the top, so the row count is always preserved.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut count = 0;
        for y in (0..Self::HEIGHT).rev() {
            if self.rows[y].iter().all(|cell| !cell.is_empty()) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill([Cell::Empty; Self::WIDTH]);
        count
    }

    /// Builds a grid from ASCII art for tests: `#` occupied, `.` empty.
    ///
    /// Rows are given top to bottom and aligned to the bottom of the grid, so
    /// fixtures only spell out the stacked region. Occupied cells are stored
    /// as I blocks; nothing in the planner reads the kind back.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut grid = Self::EMPTY;
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(lines.len() <= Self::HEIGHT, "too many rows: {}", lines.len());

        let y0 = Self::HEIGHT - lines.len();
        for (dy, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                cells.len(),
                Self::WIDTH,
                "each row must have exactly {} cells, got {} at row {dy}",
                Self::WIDTH,
                cells.len(),
            );
            for (x, &ch) in cells.iter().enumerate() {
                if ch == '#' {
                    grid.rows[y0 + dy][x] = Cell::Piece(PieceKind::I);
                }
            }
        }
        grid
    }
}
