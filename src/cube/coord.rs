use crate::prelude::*;

use std::collections::VecDeque;

/// Kociemba-style coordinates: small integers naming one feature of a cube.
///
/// Each coordinate can be advanced by a move through a transition table
/// without touching the stickers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coords {
    corner_orientation: u16,
    edge_orientation: u16,
    corner_position: u16,
}

impl From<&Cubies> for Coords {
    fn from(cubies: &Cubies) -> Self {
        Coords {
            corner_orientation: Coordinate::CornerOrientation.of(cubies),
            edge_orientation: Coordinate::EdgeOrientation.of(cubies),
            corner_position: Coordinate::CornerPosition.of(cubies),
        }
    }
}

impl Coords {
    pub fn init_table() {
        lazy_static::initialize(&TRANSITION_TABLE);
    }

    pub fn of<C: CubeLike>(cube: &C) -> Self {
        Coords::from(&Cubies::from_cube(cube))
    }

    pub fn apply(mut self, move_: Move) -> Self {
        self.corner_orientation = TRANSITION_TABLE
            .corner_orientation
            .get(self.corner_orientation, move_);
        self.edge_orientation = TRANSITION_TABLE
            .edge_orientation
            .get(self.edge_orientation, move_);
        self.corner_position = TRANSITION_TABLE
            .corner_position
            .get(self.corner_position, move_);

        self
    }

    pub fn get(&self, coordinate: Coordinate) -> u16 {
        match coordinate {
            Coordinate::CornerOrientation => self.corner_orientation,
            Coordinate::EdgeOrientation => self.edge_orientation,
            Coordinate::CornerPosition => self.corner_position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Coordinate {
    /// Twists of the first seven corners; the eighth follows from them.
    CornerOrientation,
    /// Flips of the first eleven edges; the twelfth follows from them.
    EdgeOrientation,
    /// Rank of the corner permutation.
    CornerPosition,
}

impl Coordinate {
    pub fn all() -> impl Iterator<Item = Coordinate> {
        enum_iterator::all()
    }

    pub fn name(self) -> &'static str {
        match self {
            Coordinate::CornerOrientation => "corner_orientation",
            Coordinate::EdgeOrientation => "edge_orientation",
            Coordinate::CornerPosition => "corner_position",
        }
    }

    /// Number of distinct values.
    pub fn size(self) -> usize {
        match self {
            Coordinate::CornerOrientation => 2187,
            Coordinate::EdgeOrientation => 2048,
            Coordinate::CornerPosition => 40320,
        }
    }

    pub fn of(self, cubies: &Cubies) -> u16 {
        match self {
            Coordinate::CornerOrientation => corner_orientation(cubies),
            Coordinate::EdgeOrientation => edge_orientation(cubies),
            Coordinate::CornerPosition => corner_position(cubies),
        }
    }

    pub fn transition(self, from: u16, move_: Move) -> u16 {
        let table = match self {
            Coordinate::CornerOrientation => &TRANSITION_TABLE.corner_orientation,
            Coordinate::EdgeOrientation => &TRANSITION_TABLE.edge_orientation,
            Coordinate::CornerPosition => &TRANSITION_TABLE.corner_position,
        };
        table.get(from, move_)
    }
}

lazy_static::lazy_static! {
    static ref TRANSITION_TABLE: TransitionTable = TransitionTable::init();
}

fn corner_orientation(cubies: &Cubies) -> u16 {
    cubies.corner_orientation[..CORNERS - 1]
        .iter()
        .fold(0, |v, &twist| v * 3 + twist as u16)
}

fn edge_orientation(cubies: &Cubies) -> u16 {
    cubies.edge_orientation[..EDGES - 1]
        .iter()
        .fold(0, |v, &flip| v * 2 + flip as u16)
}

fn corner_position(cubies: &Cubies) -> u16 {
    let ordered = &cubies.corner_permutation;
    let bad_cubies_before = ordered.iter().enumerate().skip(1).map(|(i, piece)| {
        ordered[0..i]
            .iter()
            .filter(|&other| other > piece)
            .count()
    });
    bad_cubies_before
        .enumerate()
        .fold(0, |v, (i, count)| v + factorial(i + 1) * count) as u16
}

fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        n => n * factorial(n - 1),
    }
}

#[derive(Default)]
struct TransitionTable {
    corner_orientation: SingleTable,
    edge_orientation: SingleTable,
    corner_position: SingleTable,
}

impl TransitionTable {
    fn init() -> Self {
        TransitionTable {
            corner_orientation: SingleTable::populate_with(Coordinate::CornerOrientation),
            edge_orientation: SingleTable::populate_with(Coordinate::EdgeOrientation),
            corner_position: SingleTable::populate_with(Coordinate::CornerPosition),
        }
    }
}

const VACANT: u16 = u16::MAX;

#[derive(Default)]
struct SingleTable(Vec<[u16; Move::COUNT]>);

impl SingleTable {
    /// Walks the cube graph from solved until every value of `coordinate`
    /// has been expanded once, recording where each move takes it.
    fn populate_with(coordinate: Coordinate) -> Self {
        let start = std::time::Instant::now();
        log::info!("Populating transition table {}", coordinate.name());

        let mut table = SingleTable(vec![[VACANT; Move::COUNT]; coordinate.size()]);
        let mut seen = vec![false; coordinate.size()];

        let mut to_expand = VecDeque::new();
        to_expand.push_back(Cubies::solved());
        seen[coordinate.of(&Cubies::solved()) as usize] = true;

        while let Some(from) = to_expand.pop_front() {
            let from_value = coordinate.of(&from);
            for m in Move::all() {
                let to = from.apply(m);
                let to_value = coordinate.of(&to);
                table.insert(from_value, m, to_value);

                if !seen[to_value as usize] {
                    seen[to_value as usize] = true;
                    to_expand.push_back(to);
                }
            }
        }

        assert!(
            table.0.iter().flatten().all(|&v| v != VACANT),
            "{} transition table has gaps",
            coordinate.name()
        );
        log::info!(
            "Finished populating transition table {}, took {:?}",
            coordinate.name(),
            start.elapsed()
        );

        table
    }

    fn get(&self, from: u16, move_: Move) -> u16 {
        self.0[from as usize][move_.index()]
    }

    fn insert(&mut self, from: u16, move_: Move, to: u16) {
        let entry = &mut self.0[from as usize][move_.index()];
        if *entry != VACANT {
            assert_eq!(*entry, to);
        }
        *entry = to;
    }
}
