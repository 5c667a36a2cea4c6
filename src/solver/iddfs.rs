use crate::prelude::*;

/// Iterative deepening: bounded depth-first searches with growing bounds.
///
/// Memory stays proportional to the depth, and because every shorter bound
/// was exhausted first, the first solution found is a shortest one. With the
/// heuristic on this becomes IDA*: branches whose depth plus estimate exceed
/// the bound are cut, and the next bound is the smallest one that was exceeded.
#[derive(Debug, Clone)]
pub struct Iddfs {
    max_depth: u8,
    use_heuristic: bool,
}

impl Default for Iddfs {
    fn default() -> Self {
        Iddfs {
            max_depth: 20,
            use_heuristic: true,
        }
    }
}

#[derive(Clone, Copy)]
enum Search {
    Found,
    NotFound(u8),
}

impl Iddfs {
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn without_heuristic(mut self) -> Self {
        self.use_heuristic = false;
        self
    }

    fn find_solution<C: CubeLike>(
        &self,
        max_moves: u8,
        cube: &mut C,
        coords: Coords,
        path: &mut Path,
        nodes: &mut u64,
    ) -> Search {
        *nodes += 1;
        let this_moves = path.len() as u8 + Heuristic::get().estimate(&coords);
        if this_moves > max_moves {
            return Search::NotFound(this_moves);
        }

        if cube.is_solved() {
            return Search::Found;
        }

        let mut best = Search::NotFound(u8::MAX);
        for m in next_moves(path).collect::<Path>() {
            cube.rotate(m);
            path.push(m);
            let sub = self.find_solution(max_moves, cube, coords.apply(m), path, nodes);
            cube.invert(m);

            match (best, sub) {
                (_, Search::Found) => return Search::Found,
                (Search::NotFound(a), Search::NotFound(b)) => {
                    best = Search::NotFound(core::cmp::min(a, b));
                }
                (Search::Found, _) => unreachable!(),
            }
            path.pop();
        }

        best
    }

    fn solve_plain<C: CubeLike>(&self, cube: &mut C, nodes: &mut u64) -> Option<Path> {
        for move_depth in 0..=self.max_depth {
            log::info!("iddfs: Searching <= {} moves", move_depth);
            let mut path = Path::new();
            if Dfs::find_solution(move_depth, cube, &mut path, nodes) {
                return Some(path);
            }
        }
        None
    }

    fn solve_informed<C: CubeLike>(&self, cube: &mut C, nodes: &mut u64) -> Option<Path> {
        let coords = Coords::of(&*cube);
        let mut max_moves = Heuristic::get().estimate(&coords);

        while max_moves <= self.max_depth {
            log::info!("iddfs: Searching <= {} moves", max_moves);
            let mut path = Path::new();
            match self.find_solution(max_moves, cube, coords, &mut path, nodes) {
                Search::Found => return Some(path),
                Search::NotFound(next) => max_moves = next,
            }
        }
        None
    }
}

impl Solver for Iddfs {
    fn name(&self) -> &'static str {
        "iddfs"
    }

    fn solve<C: CubeLike>(&self, cube: &C) -> Outcome {
        let start = std::time::Instant::now();
        let mut cube = cube.clone();
        let mut nodes = 0;

        let found = if self.use_heuristic {
            self.solve_informed(&mut cube, &mut nodes)
        } else {
            self.solve_plain(&mut cube, &mut nodes)
        };

        match found {
            Some(path) => {
                log::info!(
                    "iddfs: found {} move solution, {} nodes in {:?}",
                    path.len(),
                    nodes,
                    start.elapsed()
                );
                Outcome::Solved(path.into_vec())
            }
            None => {
                log::info!(
                    "iddfs: nothing within {} moves, {} nodes in {:?}",
                    self.max_depth,
                    nodes,
                    start.elapsed()
                );
                Outcome::Inconclusive
            }
        }
    }
}
