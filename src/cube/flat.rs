use crate::prelude::*;

use super::table::MOVE_TABLE;

/// Every sticker in one array, indexed `face * 9 + row * 3 + col`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FlatCube([Color; FACELETS]);

impl CubeLike for FlatCube {
    const NAME: &'static str = "flat";

    fn solved() -> Self {
        let mut colors = [Color::White; FACELETS];
        for facelet in Facelet::all() {
            colors[facelet.index()] = facelet.face.home_color();
        }
        FlatCube(colors)
    }

    fn from_facelets(facelets: &[Color; FACELETS]) -> Self {
        super::facelet::check_centers(facelets);
        FlatCube(*facelets)
    }

    fn color(&self, face: Face, row: usize, col: usize) -> Color {
        assert!(row < 3 && col < 3, "no sticker at ({}, {})", row, col);
        self.0[face.index() * 9 + row * 3 + col]
    }

    fn is_solved(&self) -> bool {
        self.0
            .chunks(9)
            .zip(Face::all())
            .all(|(stickers, face)| stickers.iter().all(|&c| c == face.home_color()))
    }

    fn rotate(&mut self, move_: Move) -> &mut Self {
        let perm = MOVE_TABLE.get(move_);
        let before = self.0;
        for (to, &from) in self.0.iter_mut().zip(perm.iter()) {
            *to = before[from as usize];
        }
        self
    }

    fn facelets(&self) -> [Color; FACELETS] {
        self.0
    }
}

impl core::fmt::Debug for FlatCube {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let letters = self.0.iter().map(|c| c.letter()).collect::<String>();
        f.debug_tuple("FlatCube").field(&letters).finish()
    }
}
