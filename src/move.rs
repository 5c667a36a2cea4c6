use crate::cube::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Reverse,
    Double,
}

impl Direction {
    /// Number of clockwise quarter turns this direction amounts to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => 3,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        }
    }
}

macro_rules! move_consts {
    ($($single:ident, $reverse:ident, $double:ident => $face:ident;)*) => {
        $(
            pub const $single: Move = Move::new(Face::$face, Direction::Single);
            pub const $reverse: Move = Move::new(Face::$face, Direction::Reverse);
            pub const $double: Move = Move::new(Face::$face, Direction::Double);
        )*
    };
}

impl Move {
    pub const COUNT: usize = 18;

    move_consts! {
        L, L_PRIME, L2 => Left;
        R, R_PRIME, R2 => Right;
        U, U_PRIME, U2 => Up;
        D, D_PRIME, D2 => Down;
        F, F_PRIME, F2 => Front;
        B, B_PRIME, B2 => Back;
    }

    const ALL: [Move; Move::COUNT] = [
        Move::L,
        Move::L_PRIME,
        Move::L2,
        Move::R,
        Move::R_PRIME,
        Move::R2,
        Move::U,
        Move::U_PRIME,
        Move::U2,
        Move::D,
        Move::D_PRIME,
        Move::D2,
        Move::F,
        Move::F_PRIME,
        Move::F2,
        Move::B,
        Move::B_PRIME,
        Move::B2,
    ];

    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> + Clone {
        Move::ALL.iter().copied()
    }

    /// Dense index into per-move tables, in storage face order.
    pub fn index(self) -> usize {
        self.face.index() * 3
            + match self.direction {
                Direction::Single => 0,
                Direction::Reverse => 1,
                Direction::Double => 2,
            }
    }

    pub fn reverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.reverse(),
        }
    }

    /// Whether `self` is worth trying right after `prev`.
    ///
    /// Two turns of one face always collapse into at most one, and turns of
    /// opposite faces commute, so only one order of each opposite pair is kept.
    pub fn could_follow(&self, prev: &Move) -> bool {
        if self.face == prev.face {
            return false;
        }
        !(self.face.opposite() == prev.face && self.face < prev.face)
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' | 'f' => Face::Front,
            'R' | 'r' => Face::Right,
            'U' | 'u' => Face::Up,
            'L' | 'l' => Face::Left,
            'B' | 'b' => Face::Back,
            'D' | 'd' => Face::Down,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} in move {}", c, s));
        }

        Ok(Move { face, direction })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let suffix = match self.direction {
            Direction::Single => "",
            Direction::Reverse => "'",
            Direction::Double => "2",
        };
        write!(f, "{}{}", self.face.letter(), suffix)
    }
}

/// Renders a move sequence in standard notation, separated by spaces.
pub fn notation(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        use rand::Rng;
        Move::ALL[g.gen_range(0, Move::COUNT)]
    }
}
