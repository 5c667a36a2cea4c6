use crate::prelude::*;

use core::{fmt, hash::Hash};
use rand::Rng;

mod coord;
mod cubie;
mod facelet;
mod flat;
mod grid;
mod planar;
mod surface;
mod table;

pub use coord::*;
pub use cubie::*;
pub use facelet::*;
pub use flat::FlatCube;
pub use grid::GridCube;
pub use planar::Planar;
pub use surface::BitCube;

/// The representation used when nothing else is asked for.
pub type Cube = FlatCube;

macro_rules! named_moves {
    ($($name:ident => $move_:ident,)*) => {
        $(
            fn $name(&mut self) -> &mut Self {
                self.rotate(Move::$move_)
            }
        )*
    };
}

/// The contract every cube encoding satisfies.
///
/// Encodings differ only in how fast they are; for any sequence of moves they
/// must report the same colors everywhere.
pub trait CubeLike: Sized + Clone + fmt::Debug + Eq + Hash {
    const NAME: &'static str;

    fn solved() -> Self;

    /// Builds a cube from 54 colors laid out as `face * 9 + row * 3 + col`.
    fn from_facelets(facelets: &[Color; FACELETS]) -> Self;

    /// Color at `row`, `col` of `face`, as seen looking straight at that face.
    fn color(&self, face: Face, row: usize, col: usize) -> Color;

    fn is_solved(&self) -> bool;

    /// Turns one face in place.
    fn rotate(&mut self, move_: Move) -> &mut Self;

    fn invert(&mut self, move_: Move) -> &mut Self {
        self.rotate(move_.reverse())
    }

    fn apply(mut self, move_: Move) -> Self {
        self.rotate(move_);
        self
    }

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    fn facelets(&self) -> [Color; FACELETS] {
        let mut out = [Color::White; FACELETS];
        for facelet in Facelet::all() {
            out[facelet.index()] = self.color_at(facelet);
        }
        out
    }

    fn color_at(&self, facelet: Facelet) -> Color {
        self.color(facelet.face, facelet.row as usize, facelet.col as usize)
    }

    /// Applies `times` uniformly random moves and returns them in order.
    fn random_shuffle(&mut self, times: usize) -> Vec<Move> {
        self.shuffle_with(&mut rand::thread_rng(), times)
    }

    fn shuffle_with<R: Rng>(&mut self, rng: &mut R, times: usize) -> Vec<Move> {
        let moves = crate::scramble::random_moves(rng, times);
        for &m in &moves {
            self.rotate(m);
        }
        moves
    }

    /// Which corner piece sits in corner slot `slot`.
    fn corner_index(&self, slot: usize) -> u8 {
        corner_at(self, slot).0
    }

    /// Twist (0, 1 or 2) of the corner piece in slot `slot`.
    fn corner_orientation(&self, slot: usize) -> u8 {
        corner_at(self, slot).1
    }

    /// Color letters of corner slot `slot`, U/D facelet first, then clockwise.
    fn corner_colors(&self, slot: usize) -> String {
        CORNER_FACELETS[slot]
            .iter()
            .map(|&f| self.color_at(f).letter())
            .collect()
    }

    fn key(&self) -> CubeKey {
        Cubies::from_cube(self).key()
    }

    named_moves! {
        f => F,
        f_prime => F_PRIME,
        f2 => F2,
        u => U,
        u_prime => U_PRIME,
        u2 => U2,
        l => L,
        l_prime => L_PRIME,
        l2 => L2,
        r => R,
        r_prime => R_PRIME,
        r2 => R2,
        d => D,
        d_prime => D_PRIME,
        d2 => D2,
        b => B,
        b_prime => B_PRIME,
        b2 => B2,
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence,
)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    pub const COUNT: usize = 6;

    pub fn all() -> impl Iterator<Item = Face> {
        enum_iterator::all()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Left => Color::Green,
            Face::Front => Color::Red,
            Face::Right => Color::Blue,
            Face::Back => Color::Orange,
            Face::Down => Color::Yellow,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence,
)]
#[repr(u8)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    const ALL: [Color; 6] = [
        Color::White,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
    ];

    /// First letter of the color name, e.g. `G` for green.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Color {
        Color::ALL[raw as usize]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Runs `check` against every representation, so a property is stated once.
#[cfg(test)]
macro_rules! for_each_cube {
    ($check:ident) => {
        $check::<$crate::cube::FlatCube>();
        $check::<$crate::cube::GridCube>();
        $check::<$crate::cube::BitCube>();
    };
}

#[cfg(test)]
pub(crate) use for_each_cube;

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_is_solved<C: CubeLike>() {
        assert!(C::solved().is_solved(), "{}", C::NAME);
        assert_eq!(C::solved(), C::solved());
    }

    #[test]
    fn solved_is_solved_everywhere() {
        for_each_cube!(solved_is_solved);
    }

    fn single_move_is_not_solved<C: CubeLike>() {
        for m in Move::all() {
            let cube = C::solved().apply(m);
            assert!(!cube.is_solved(), "{} after {}", C::NAME, m);
            assert_ne!(cube, C::solved());
        }
    }

    #[test]
    fn single_move_is_not_solved_everywhere() {
        for_each_cube!(single_move_is_not_solved);
    }

    fn any_changed_facelet_is_unsolved<C: CubeLike>() {
        for facelet in Facelet::all().filter(|f| !f.is_center()) {
            let mut colors = C::solved().facelets();
            let home = colors[facelet.index()];
            for other in Color::ALL.iter().filter(|&&c| c != home) {
                colors[facelet.index()] = *other;
                assert!(!C::from_facelets(&colors).is_solved(), "{} {:?}", C::NAME, facelet);
            }
        }
    }

    #[test]
    fn any_changed_facelet_is_unsolved_everywhere() {
        for_each_cube!(any_changed_facelet_is_unsolved);
    }

    fn recolored_center<C: CubeLike>() -> C {
        let mut colors = C::solved().facelets();
        colors[Facelet::new(Face::Up, 1, 1).index()] = Color::Green;
        C::from_facelets(&colors)
    }

    #[test]
    #[should_panic(expected = "center")]
    fn flat_rejects_recolored_center() {
        recolored_center::<FlatCube>();
    }

    #[test]
    #[should_panic(expected = "center")]
    fn grid_rejects_recolored_center() {
        recolored_center::<GridCube>();
    }

    #[test]
    #[should_panic(expected = "center")]
    fn bitboard_rejects_recolored_center() {
        recolored_center::<BitCube>();
    }

    fn named_moves_chain<C: CubeLike>() {
        let mut chained = C::solved();
        chained.r().u().r_prime().u_prime();
        let applied = C::solved().apply_all(Move::parse_sequence("R U R' U'").unwrap());
        assert_eq!(chained, applied);
    }

    #[test]
    fn named_moves_chain_everywhere() {
        for_each_cube!(named_moves_chain);
    }

    fn invert_undoes<C: CubeLike>() {
        for m in Move::all() {
            let mut cube = cube_with_moves::<C>("F U2 L' D");
            let before = cube.clone();
            cube.rotate(m).invert(m);
            assert_eq!(cube, before, "{} {}", C::NAME, m);
        }
    }

    #[test]
    fn invert_undoes_everywhere() {
        for_each_cube!(invert_undoes);
    }

    fn zero_shuffle_stays_solved<C: CubeLike>() {
        let mut cube = C::solved();
        assert!(cube.random_shuffle(0).is_empty());
        assert!(cube.is_solved());
    }

    #[test]
    fn zero_shuffle_stays_solved_everywhere() {
        for_each_cube!(zero_shuffle_stays_solved);
    }

    fn shuffle_reports_what_it_did<C: CubeLike>() {
        let mut cube = C::solved();
        let moves = cube.random_shuffle(25);
        assert_eq!(moves.len(), 25);
        assert_eq!(cube, C::solved().apply_all(moves));
    }

    #[test]
    fn shuffle_reports_what_it_did_everywhere() {
        for_each_cube!(shuffle_reports_what_it_did);
    }

    #[test]
    fn color_letters() {
        assert_eq!(Color::Green.letter(), 'G');
        assert_eq!(Color::White.letter(), 'W');
        assert_eq!(Color::Yellow.to_string(), "Y");
    }

    #[test]
    fn solved_corners_are_identity() {
        let cube = Cube::solved();
        for slot in 0..8 {
            assert_eq!(cube.corner_index(slot), slot as u8);
            assert_eq!(cube.corner_orientation(slot), 0);
        }
        assert_eq!(cube.corner_colors(0), "WBR");
        assert_eq!(cube.corner_colors(7), "YBO");
    }

    #[test]
    fn right_turn_twists_corners() {
        let cube = cube_with_moves::<Cube>("R");
        // URF now holds DFR, with its yellow facelet on the front
        assert_eq!(cube.corner_index(0), 4);
        assert_eq!(cube.corner_orientation(0), 2);
        assert_eq!(cube.corner_colors(0), "RBY");
    }

    #[test]
    fn upper_turn_keeps_corner_twist() {
        let cube = cube_with_moves::<Cube>("U");
        for slot in 0..8 {
            assert_eq!(cube.corner_orientation(slot), 0);
        }
        assert_ne!(cube.corner_index(0), 0);
    }

    #[test]
    fn faces_pair_up() {
        for face in Face::all() {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }
}
