use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece, the only piece that can clear four lines at once.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds, in table order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Returns the `(dx, dy)` offsets of the four shape cells for this kind in
    /// the given rotation, relative to the piece anchor.
    #[must_use]
    pub fn shape_cells(self, rotation: Rotation) -> &'static ShapeCells {
        &PIECE_CELLS[self as usize][rotation.index()]
    }
}

/// Rotation state of a piece.
///
/// One of four states; `0` is the spawn orientation and each step is 90°
/// clockwise. Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Rotation(u8);

impl Rotation {
    /// All four rotation states, in order.
    pub const ALL: [Self; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];

    #[must_use]
    pub fn rotated(self, dir: RotationDir) -> Self {
        match dir {
            RotationDir::Cw => Rotation((self.0 + 1) % 4),
            RotationDir::Ccw => Rotation((self.0 + 3) % 4),
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Direction of a rotation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Cw,
    Ccw,
}

/// A piece at a specific anchor position and orientation.
///
/// Pieces are immutable snapshots: movement and rotation return new `Piece`
/// values. The anchor `y` may be negative while part of the piece is still
/// above the hidden buffer; those cells never collide and vanish if locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i16,
    y: i16,
}

impl Piece {
    const SPAWN_X: i16 = 3;
    const SPAWN_Y: i16 = 0;

    /// Creates a piece at the spawn pose inside the hidden buffer rows.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        Self::with_pose(kind, Rotation::default(), Self::SPAWN_X, Self::SPAWN_Y)
    }

    #[must_use]
    pub fn with_pose(kind: PieceKind, rotation: Rotation, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The physical pose `(x, y, rotation)`, used as the search dedup key.
    #[must_use]
    pub fn pose(&self) -> (i16, i16, Rotation) {
        (self.x, self.y, self.rotation)
    }

    /// Absolute grid coordinates of the four shape cells.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.kind
            .shape_cells(self.rotation)
            .iter()
            .map(move |&(dx, dy)| (self.x + i16::from(dx), self.y + i16::from(dy)))
    }

    #[must_use]
    pub fn translated(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    #[must_use]
    pub fn left(self) -> Self {
        self.translated(-1, 0)
    }

    #[must_use]
    pub fn right(self) -> Self {
        self.translated(1, 0)
    }

    #[must_use]
    pub fn down(self) -> Self {
        self.translated(0, 1)
    }

    /// Rotates in place without any kick resolution.
    #[must_use]
    pub fn rotated(self, dir: RotationDir) -> Self {
        Self {
            rotation: self.rotation.rotated(dir),
            ..self
        }
    }

    /// Attempts a rotation, resolving collisions with the kick table.
    ///
    /// The kick table entry for the current rotation state is an ordered list
    /// of `(dx, dy)` candidates; the first candidate that avoids collision is
    /// applied. Returns `None` when every candidate collides, in which case
    /// callers keep the original pose (rotation is a no-op). The O-piece
    /// never rotates and always succeeds with its pose unchanged.
    #[must_use]
    pub fn kicked_rotation(self, grid: &Grid, dir: RotationDir) -> Option<Self> {
        if self.kind == PieceKind::O {
            return Some(self);
        }
        let rotated = self.rotated(dir);
        let kicks = match self.kind {
            PieceKind::I => &I_KICKS[self.rotation.index()],
            _ => &COMMON_KICKS[self.rotation.index()],
        };
        kicks
            .iter()
            .map(|&(dx, dy)| rotated.translated(i16::from(dx), i16::from(dy)))
            .find(|kicked| !grid.is_colliding(*kicked))
    }

    /// Projects the piece straight down to its resting row.
    ///
    /// Idempotent: re-projecting the result yields the same pose.
    #[must_use]
    pub fn dropped(self, grid: &Grid) -> Self {
        let mut piece = self;
        loop {
            let below = piece.down();
            if grid.is_colliding(below) {
                return piece;
            }
            piece = below;
        }
    }
}

/// The four shape cells of a (kind, rotation) pair, as anchor-relative offsets.
pub type ShapeCells = [(i8, i8); 4];

/// Generates all 4 rotation states of a cell list by rotating 90° clockwise
/// within the piece's bounding box.
///
/// # Arguments
///
/// * `size` - Bounding box size (4 for I, 2 for O, 3 for the rest)
/// * `base` - Shape cells at the spawn orientation
const fn cell_rotations(size: i8, base: ShapeCells) -> [ShapeCells; 4] {
    let mut rotations = [base; 4];
    let mut i = 1;
    while i < 4 {
        let mut rotated = [(0i8, 0i8); 4];
        let mut c = 0;
        while c < 4 {
            let (x, y) = rotations[i - 1][c];
            rotated[c] = (size - 1 - y, x);
            c += 1;
        }
        rotations[i] = rotated;
        i += 1;
    }
    rotations
}

const PIECE_CELLS: [[ShapeCells; 4]; PieceKind::LEN] = [
    // I-piece
    cell_rotations(4, [(0, 1), (1, 1), (2, 1), (3, 1)]),
    // O-piece
    cell_rotations(2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
    // S-piece
    cell_rotations(3, [(1, 0), (2, 0), (0, 1), (1, 1)]),
    // Z-piece
    cell_rotations(3, [(0, 0), (1, 0), (1, 1), (2, 1)]),
    // J-piece
    cell_rotations(3, [(0, 0), (0, 1), (1, 1), (2, 1)]),
    // L-piece
    cell_rotations(3, [(2, 0), (0, 1), (1, 1), (2, 1)]),
    // T-piece
    cell_rotations(3, [(1, 0), (0, 1), (1, 1), (2, 1)]),
];

/// Kick candidates tried during a rotation attempt, indexed by the current
/// rotation state. One table for the I-piece, one shared by the other
/// rotating pieces; the O-piece never rotates and consults neither.
type KickTable = [[(i8, i8); 5]; 4];

const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

const COMMON_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];
