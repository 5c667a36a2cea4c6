use crate::prelude::*;

lazy_static::lazy_static! {
    static ref HEURISTIC: Heuristic = Heuristic::init();
}

/// Lower bound on the number of moves left, from the exact distance-to-solved
/// of several cube features. Each feature needs at least as many moves as its
/// own distance, so the largest of them never overestimates.
pub struct Heuristic {
    tables: Vec<HeuristicTable>,
}

impl Heuristic {
    pub fn get() -> &'static Heuristic {
        &HEURISTIC
    }

    fn init() -> Self {
        Coords::init_table();
        Heuristic {
            tables: Coordinate::all().map(HeuristicTable::init).collect(),
        }
    }

    pub fn estimate(&self, coords: &Coords) -> u8 {
        self.tables
            .iter()
            .map(|t| t.min_moves(coords))
            .max()
            .unwrap_or_default()
    }
}

const UNREACHED: u8 = u8::MAX;

/// Distance from solved for every value of one coordinate.
struct HeuristicTable {
    coordinate: Coordinate,
    distances: Vec<u8>,
}

impl HeuristicTable {
    fn init(coordinate: Coordinate) -> Self {
        let start = std::time::Instant::now();
        let mut distances = vec![UNREACHED; coordinate.size()];

        let solved = coordinate.of(&Cubies::solved());
        distances[solved as usize] = 0;
        let mut frontier = vec![solved];

        let mut depth = 0;
        while !frontier.is_empty() {
            log::info!(
                "{}: Expanding to depth: {}, {} items",
                coordinate.name(),
                depth + 1,
                frontier.len()
            );
            depth += 1;

            let mut next = Vec::new();
            for &from in &frontier {
                for m in Move::all() {
                    let to = coordinate.transition(from, m);
                    if distances[to as usize] == UNREACHED {
                        distances[to as usize] = depth;
                        next.push(to);
                    }
                }
            }
            frontier = next;
        }

        assert!(
            distances.iter().all(|&d| d != UNREACHED),
            "{}: not every value is reachable",
            coordinate.name()
        );
        log::info!(
            "{}: Finished expanding at depth {}, took {:?}",
            coordinate.name(),
            depth - 1,
            start.elapsed()
        );

        HeuristicTable {
            coordinate,
            distances,
        }
    }

    fn min_moves(&self, coords: &Coords) -> u8 {
        self.distances[coords.get(self.coordinate) as usize]
    }

    #[cfg(test)]
    fn max_distance(&self) -> u8 {
        self.distances.iter().copied().max().unwrap_or_default()
    }
}
