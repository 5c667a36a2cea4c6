use crate::prelude::*;

use super::table::MOVE_TABLE;

/// Sticker ring positions around a face, clockwise from the top-left corner.
/// The center never moves and is not stored.
const RING: [(u8, u8); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

fn ring_slot(row: u8, col: u8) -> u8 {
    match RING.iter().position(|&rc| rc == (row, col)) {
        Some(slot) => slot as u8,
        None => unreachable!("({}, {}) is the center", row, col),
    }
}

/// One sticker moved by a face turn, outside the turning face itself.
#[derive(Clone, Copy, Debug, Default)]
struct SideSticker {
    to_face: u8,
    to_slot: u8,
    from_face: u8,
    from_slot: u8,
}

const SIDE_STICKERS: usize = 12;

lazy_static::lazy_static! {
    static ref SIDE_TABLE: [[SideSticker; SIDE_STICKERS]; Move::COUNT] = {
        let mut table = [[SideSticker::default(); SIDE_STICKERS]; Move::COUNT];
        for m in Move::all() {
            let perm = MOVE_TABLE.get(m);
            let mut count = 0;
            for (to, &from) in perm.iter().enumerate() {
                let to = Facelet::from_index(to);
                let from = Facelet::from_index(from as usize);
                if to == from || to.face == m.face {
                    continue;
                }
                table[m.index()][count] = SideSticker {
                    to_face: to.face.index() as u8,
                    to_slot: ring_slot(to.row, to.col),
                    from_face: from.face.index() as u8,
                    from_slot: ring_slot(from.row, from.col),
                };
                count += 1;
            }
            assert_eq!(count, SIDE_STICKERS, "{}", m);
        }
        table
    };
}

/// Six faces, each packed into one `u64` with a byte per ring sticker.
///
/// A clockwise face turn moves every ring sticker two slots forward, which is
/// a 16 bit rotation of the face's word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitCube([Surface; Face::COUNT]);

impl CubeLike for BitCube {
    const NAME: &'static str = "bitboard";

    fn solved() -> Self {
        let mut surfaces = [Surface(0); Face::COUNT];
        for face in Face::all() {
            surfaces[face.index()] = Surface::from(face.home_color());
        }
        BitCube(surfaces)
    }

    fn from_facelets(facelets: &[Color; FACELETS]) -> Self {
        super::facelet::check_centers(facelets);
        let mut surfaces = [Surface(0); Face::COUNT];
        for facelet in Facelet::all().filter(|f| !f.is_center()) {
            surfaces[facelet.face.index()].set(
                ring_slot(facelet.row, facelet.col),
                facelets[facelet.index()],
            );
        }
        BitCube(surfaces)
    }

    fn color(&self, face: Face, row: usize, col: usize) -> Color {
        assert!(row < 3 && col < 3, "no sticker at ({}, {})", row, col);
        if row == 1 && col == 1 {
            return face.home_color();
        }
        self.0[face.index()].get(ring_slot(row as u8, col as u8))
    }

    fn is_solved(&self) -> bool {
        Face::all().all(|face| self.0[face.index()] == Surface::from(face.home_color()))
    }

    fn rotate(&mut self, move_: Move) -> &mut Self {
        let side = &SIDE_TABLE[move_.index()];
        let mut moving = [Color::White; SIDE_STICKERS];
        for (color, s) in moving.iter_mut().zip(side.iter()) {
            *color = self.0[s.from_face as usize].get(s.from_slot);
        }
        for (color, s) in moving.iter().zip(side.iter()) {
            self.0[s.to_face as usize].set(s.to_slot, *color);
        }

        let surface = &mut self.0[move_.face.index()];
        match move_.direction {
            Direction::Single => surface.rotate(),
            Direction::Reverse => surface.rotate_reverse(),
            Direction::Double => surface.rotate_double(),
        }

        self
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
struct Surface(u64);

impl Surface {
    #[inline]
    fn rotate(&mut self) {
        self.0 = self.0.rotate_left(16);
    }

    #[inline]
    fn rotate_reverse(&mut self) {
        self.0 = self.0.rotate_right(16);
    }

    #[inline]
    fn rotate_double(&mut self) {
        self.0 = self.0.rotate_right(32);
    }

    fn get(&self, slot: u8) -> Color {
        Color::from_u8((self.0 >> (slot * 8)) as u8)
    }

    fn set(&mut self, slot: u8, color: Color) {
        let shift = slot * 8;
        self.0 = (self.0 & !(0xff << shift)) | ((color as u64) << shift);
    }
}

impl From<Color> for Surface {
    fn from(color: Color) -> Surface {
        Surface(u64::from_ne_bytes([color as u8; 8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(colors: [Color; 8]) -> Surface {
        let mut s = Surface(0);
        for (slot, c) in colors.iter().enumerate() {
            s.set(slot as u8, *c);
        }
        s
    }

    use Color::{Blue as B, Green as G, White as W, Yellow as Y};

    #[test]
    fn rotate_surface() {
        let mut s = surface([G, G, W, W, B, B, Y, Y]);
        s.rotate();
        assert_eq!(s, surface([Y, Y, G, G, W, W, B, B]));
    }

    #[test]
    fn rotate_surface_reverse() {
        let mut s = surface([G, G, W, W, B, B, Y, Y]);
        s.rotate_reverse();
        assert_eq!(s, surface([W, W, B, B, Y, Y, G, G]));
    }

    #[test]
    fn rotate_surface_double() {
        let mut s = surface([G, G, W, W, B, B, Y, Y]);
        s.rotate_double();
        assert_eq!(s, surface([B, B, Y, Y, G, G, W, W]));
    }

    #[test]
    fn set_only_touches_its_slot() {
        let mut s = Surface::from(Color::Orange);
        s.set(3, Color::Red);
        for slot in 0..8 {
            let expected = if slot == 3 { Color::Red } else { Color::Orange };
            assert_eq!(s.get(slot), expected);
        }
    }

    #[test]
    fn face_rotation_matches_move_table() {
        let mut colors = BitCube::solved().facelets();
        for (slot, &(row, col)) in RING.iter().enumerate() {
            colors[Facelet::new(Face::Front, row, col).index()] = Color::from_u8(slot as u8 % 6);
        }
        for m in Move::all().filter(|m| m.face == Face::Front) {
            let bits = BitCube::from_facelets(&colors).apply(m);
            let flat = FlatCube::from_facelets(&colors).apply(m);
            assert_eq!(bits.facelets(), flat.facelets(), "{}", m);
        }
    }

    #[quickcheck]
    fn agrees_with_flat(moves: Vec<Move>) -> bool {
        let bits = BitCube::solved().apply_all(moves.clone());
        let flat = FlatCube::solved().apply_all(moves);
        bits.facelets() == flat.facelets()
    }

    #[quickcheck]
    fn solved_check_matches_flat(moves: Vec<Move>) -> bool {
        let bits = BitCube::solved().apply_all(moves.clone());
        let flat = FlatCube::solved().apply_all(moves);
        bits.is_solved() == flat.is_solved()
    }
}
