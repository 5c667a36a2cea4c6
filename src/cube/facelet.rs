use crate::prelude::*;

pub const FACELETS: usize = 9 * Face::COUNT;

/// One sticker, addressed the way a person reads a face: row 0 is the top
/// edge and column 0 the left edge while looking straight at it.
///
/// Faces are read off the unfolded net
///
/// ```text
///       U
///     L F R B
///       D
/// ```
///
/// so U's bottom row touches F's top row and B's left column touches R's
/// right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

pub(crate) type Vec3 = [i8; 3];

/// Panics unless every center shows its face's home color. Centers never
/// move, so any other center means the stickers do not describe a cube.
pub(crate) fn check_centers(facelets: &[Color; FACELETS]) {
    for face in Face::all() {
        let center = facelets[Facelet::new(face, 1, 1).index()];
        assert!(
            center == face.home_color(),
            "{:?} center is {:?}, not {:?}",
            face,
            center,
            face.home_color()
        );
    }
}

impl Facelet {
    pub const fn new(face: Face, row: u8, col: u8) -> Facelet {
        Facelet { face, row, col }
    }

    pub fn all() -> impl Iterator<Item = Facelet> {
        Face::all().flat_map(|face| {
            (0..3).flat_map(move |row| (0..3).map(move |col| Facelet::new(face, row, col)))
        })
    }

    pub fn from_index(index: usize) -> Facelet {
        assert!(index < FACELETS);
        let face = Face::all()
            .nth(index / 9)
            .unwrap_or_else(|| unreachable!());
        Facelet::new(face, (index % 9 / 3) as u8, (index % 3) as u8)
    }

    pub fn index(self) -> usize {
        self.face.index() * 9 + self.row as usize * 3 + self.col as usize
    }

    pub fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// Position of the cubie carrying this sticker, each axis in -1..=1.
    ///
    /// x points right, y up and z out of the front face.
    pub(crate) fn position(self) -> Vec3 {
        let r = self.row as i8;
        let c = self.col as i8;
        match self.face {
            Face::Up => [c - 1, 1, r - 1],
            Face::Down => [c - 1, -1, 1 - r],
            Face::Front => [c - 1, 1 - r, 1],
            Face::Back => [1 - c, 1 - r, -1],
            Face::Left => [-1, 1 - r, c - 1],
            Face::Right => [1, 1 - r, 1 - c],
        }
    }

    /// The sticker on the cubie at `position` facing along `normal`.
    pub(crate) fn at(position: Vec3, normal: Vec3) -> Facelet {
        let [x, y, z] = position;
        let face = Face::from_normal(normal);
        let (row, col) = match face {
            Face::Up => (z + 1, x + 1),
            Face::Down => (1 - z, x + 1),
            Face::Front => (1 - y, x + 1),
            Face::Back => (1 - y, 1 - x),
            Face::Left => (1 - y, z + 1),
            Face::Right => (1 - y, 1 - z),
        };
        assert!((0..3).contains(&row) && (0..3).contains(&col));
        Facelet::new(face, row as u8, col as u8)
    }
}

impl Face {
    /// Outward unit normal.
    pub(crate) fn normal(self) -> Vec3 {
        match self {
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
        }
    }

    pub(crate) fn from_normal(normal: Vec3) -> Face {
        match normal {
            [0, 1, 0] => Face::Up,
            [0, -1, 0] => Face::Down,
            [0, 0, 1] => Face::Front,
            [0, 0, -1] => Face::Back,
            [-1, 0, 0] => Face::Left,
            [1, 0, 0] => Face::Right,
            _ => unreachable!("{:?} is not a face normal", normal),
        }
    }
}

pub(crate) fn dot(a: Vec3, b: Vec3) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotates `v` a quarter turn clockwise as seen from the tip of `axis`.
pub(crate) fn quarter_clockwise(axis: Vec3, v: Vec3) -> Vec3 {
    let along = dot(axis, v);
    let c = cross(axis, v);
    [
        axis[0] * along - c[0],
        axis[1] * along - c[1],
        axis[2] * along - c[2],
    ]
}

const fn f(face: Face, row: u8, col: u8) -> Facelet {
    Facelet::new(face, row, col)
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

/// Corner slots URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB.
///
/// Each slot lists its U/D sticker first, then the others clockwise.
pub const CORNER_FACELETS: [[Facelet; 3]; 8] = [
    [f(U, 2, 2), f(R, 0, 0), f(F, 0, 2)],
    [f(U, 2, 0), f(F, 0, 0), f(L, 0, 2)],
    [f(U, 0, 0), f(L, 0, 0), f(B, 0, 2)],
    [f(U, 0, 2), f(B, 0, 0), f(R, 0, 2)],
    [f(D, 0, 2), f(F, 2, 2), f(R, 2, 0)],
    [f(D, 0, 0), f(L, 2, 2), f(F, 2, 0)],
    [f(D, 2, 0), f(B, 2, 2), f(L, 2, 0)],
    [f(D, 2, 2), f(R, 2, 2), f(B, 2, 0)],
];

/// Edge slots UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR.
pub const EDGE_FACELETS: [[Facelet; 2]; 12] = [
    [f(U, 1, 2), f(R, 0, 1)],
    [f(U, 2, 1), f(F, 0, 1)],
    [f(U, 1, 0), f(L, 0, 1)],
    [f(U, 0, 1), f(B, 0, 1)],
    [f(D, 1, 2), f(R, 2, 1)],
    [f(D, 0, 1), f(F, 2, 1)],
    [f(D, 1, 0), f(L, 2, 1)],
    [f(D, 2, 1), f(B, 2, 1)],
    [f(F, 1, 2), f(R, 1, 0)],
    [f(F, 1, 0), f(L, 1, 2)],
    [f(B, 1, 2), f(L, 1, 0)],
    [f(B, 1, 0), f(R, 1, 2)],
];
