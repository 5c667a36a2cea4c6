use crate::prelude::*;

pub const CORNERS: usize = 8;
pub const EDGES: usize = 12;

/// Piece-level encoding of a cube: which piece sits in each slot, and how it
/// is twisted or flipped there.
///
/// Slot order is that of [`CORNER_FACELETS`] and [`EDGE_FACELETS`]. Piece `i`
/// is the one whose home is slot `i`, so the solved cube is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubies {
    pub corner_permutation: [u8; CORNERS],
    pub corner_orientation: [u8; CORNERS],
    pub edge_permutation: [u8; EDGES],
    pub edge_orientation: [u8; EDGES],
}

/// A representation-independent fingerprint of a cube state.
///
/// Equal keys mean equal states no matter which encoding produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeKey(pub u128);

lazy_static::lazy_static! {
    /// What each move does to the pieces of a solved cube.
    static ref MOVE_CUBIES: [Cubies; Move::COUNT] = {
        let mut table = [Cubies::solved(); Move::COUNT];
        for m in Move::all() {
            table[m.index()] = Cubies::from_cube(&FlatCube::solved().apply(m));
        }
        table
    };
}

/// Corner piece and twist found in corner slot `slot`.
pub(crate) fn corner_at<C: CubeLike>(cube: &C, slot: usize) -> (u8, u8) {
    let colors = CORNER_FACELETS[slot].map(|f| cube.color_at(f));
    let twist = match colors
        .iter()
        .position(|&c| matches!(c, Color::White | Color::Yellow))
    {
        Some(twist) => twist,
        None => panic!("corner slot {} has no U/D sticker: {:?}", slot, colors),
    };
    let turned = [colors[twist], colors[(twist + 1) % 3], colors[(twist + 2) % 3]];

    match CORNER_FACELETS
        .iter()
        .position(|home| home.map(|f| f.face.home_color()) == turned)
    {
        Some(piece) => (piece as u8, twist as u8),
        None => panic!("corner slot {} holds no real piece: {:?}", slot, colors),
    }
}

/// Edge piece and flip found in edge slot `slot`.
pub(crate) fn edge_at<C: CubeLike>(cube: &C, slot: usize) -> (u8, u8) {
    let [a, b] = EDGE_FACELETS[slot].map(|f| cube.color_at(f));

    for (piece, home) in EDGE_FACELETS.iter().enumerate() {
        let [x, y] = home.map(|f| f.face.home_color());
        if (a, b) == (x, y) {
            return (piece as u8, 0);
        }
        if (a, b) == (y, x) {
            return (piece as u8, 1);
        }
    }

    panic!("edge slot {} holds no real piece: {:?}", slot, (a, b))
}

impl Cubies {
    pub fn solved() -> Self {
        let mut corner_permutation = [0; CORNERS];
        for (i, p) in corner_permutation.iter_mut().enumerate() {
            *p = i as u8;
        }
        let mut edge_permutation = [0; EDGES];
        for (i, p) in edge_permutation.iter_mut().enumerate() {
            *p = i as u8;
        }

        Cubies {
            corner_permutation,
            corner_orientation: [0; CORNERS],
            edge_permutation,
            edge_orientation: [0; EDGES],
        }
    }

    /// Reads the pieces off any encoding.
    ///
    /// Panics if the stickers do not form real pieces, which cannot happen
    /// for a cube reached by moves.
    pub fn from_cube<C: CubeLike>(cube: &C) -> Self {
        let mut cubies = Cubies::solved();
        for slot in 0..CORNERS {
            let (piece, twist) = corner_at(cube, slot);
            cubies.corner_permutation[slot] = piece;
            cubies.corner_orientation[slot] = twist;
        }
        for slot in 0..EDGES {
            let (piece, flip) = edge_at(cube, slot);
            cubies.edge_permutation[slot] = piece;
            cubies.edge_orientation[slot] = flip;
        }
        cubies
    }

    /// Paints the pieces back onto stickers.
    pub fn to_cube<C: CubeLike>(&self) -> C {
        let mut colors = C::solved().facelets();
        for slot in 0..CORNERS {
            let piece = CORNER_FACELETS[self.corner_permutation[slot] as usize];
            let twist = self.corner_orientation[slot] as usize;
            for (k, facelet) in CORNER_FACELETS[slot].iter().enumerate() {
                colors[facelet.index()] = piece[(k + 3 - twist) % 3].face.home_color();
            }
        }
        for slot in 0..EDGES {
            let piece = EDGE_FACELETS[self.edge_permutation[slot] as usize];
            let flip = self.edge_orientation[slot] as usize;
            for (k, facelet) in EDGE_FACELETS[slot].iter().enumerate() {
                colors[facelet.index()] = piece[(k + flip) % 2].face.home_color();
            }
        }
        C::from_facelets(&colors)
    }

    /// `self` followed by `other`, where `other` is read as a transformation.
    pub fn then(&self, other: &Cubies) -> Cubies {
        let mut out = *self;
        for i in 0..CORNERS {
            let from = other.corner_permutation[i] as usize;
            out.corner_permutation[i] = self.corner_permutation[from];
            out.corner_orientation[i] =
                (self.corner_orientation[from] + other.corner_orientation[i]) % 3;
        }
        for i in 0..EDGES {
            let from = other.edge_permutation[i] as usize;
            out.edge_permutation[i] = self.edge_permutation[from];
            out.edge_orientation[i] = (self.edge_orientation[from] + other.edge_orientation[i]) % 2;
        }
        out
    }

    pub fn apply(self, move_: Move) -> Self {
        self.then(&MOVE_CUBIES[move_.index()])
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |c, m| c.apply(m))
    }

    pub fn is_solved(&self) -> bool {
        *self == Cubies::solved()
    }

    /// Packs the state into 100 bits: corner permutation (8 x 3), corner
    /// orientation (8 x 2), edge permutation (12 x 4), edge orientation (12 x 1).
    pub fn key(&self) -> CubeKey {
        let mut key = 0u128;
        let mut push = |value: u8, bits: u32| {
            key = (key << bits) | value as u128;
        };
        for i in 0..CORNERS {
            push(self.corner_permutation[i], 3);
            push(self.corner_orientation[i], 2);
        }
        for i in 0..EDGES {
            push(self.edge_permutation[i], 4);
            push(self.edge_orientation[i], 1);
        }
        CubeKey(key)
    }

    pub fn corner_parity(&self) -> bool {
        parity(&self.corner_permutation)
    }

    pub fn edge_parity(&self) -> bool {
        parity(&self.edge_permutation)
    }
}

/// Odd permutations are `true`.
fn parity(perm: &[u8]) -> bool {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 1
}
