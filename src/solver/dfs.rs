use crate::prelude::*;

/// Depth-limited depth-first search on a single cube, undoing each move on
/// the way back up.
///
/// Returns the first solution it reaches, which need not be the shortest.
#[derive(Debug, Clone)]
pub struct Dfs {
    max_depth: u8,
}

impl Default for Dfs {
    fn default() -> Self {
        Dfs { max_depth: 6 }
    }
}

impl Dfs {
    pub fn with_max_depth(max_depth: u8) -> Self {
        Dfs { max_depth }
    }

    /// Looks for a solution of at most `remaining` more moves, leaving `cube`
    /// exactly as it found it.
    pub(crate) fn find_solution<C: CubeLike>(
        remaining: u8,
        cube: &mut C,
        path: &mut Path,
        nodes: &mut u64,
    ) -> bool {
        *nodes += 1;
        if cube.is_solved() {
            return true;
        }
        if remaining == 0 {
            return false;
        }

        for m in next_moves(path).collect::<Path>() {
            cube.rotate(m);
            path.push(m);
            let found = Self::find_solution(remaining - 1, cube, path, nodes);
            if found {
                cube.invert(m);
                return true;
            }
            path.pop();
            cube.invert(m);
        }

        false
    }
}

impl Solver for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn solve<C: CubeLike>(&self, cube: &C) -> Outcome {
        let start = std::time::Instant::now();
        let mut cube = cube.clone();
        let mut path = Path::new();
        let mut nodes = 0;

        if Self::find_solution(self.max_depth, &mut cube, &mut path, &mut nodes) {
            log::info!(
                "dfs: found {} move solution, {} nodes in {:?}",
                path.len(),
                nodes,
                start.elapsed()
            );
            Outcome::Solved(path.into_vec())
        } else {
            log::info!(
                "dfs: nothing within {} moves, {} nodes in {:?}",
                self.max_depth,
                nodes,
                start.elapsed()
            );
            Outcome::Inconclusive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::for_each_cube;

    #[test]
    fn depth_zero_on_solved() {
        assert_eq!(
            Dfs::with_max_depth(0).solve(&Cube::solved()),
            Outcome::Solved(vec![])
        );
    }

    #[test]
    fn depth_zero_is_inconclusive() {
        for m in Move::all() {
            let cube = Cube::solved().apply(m);
            assert_eq!(Dfs::with_max_depth(0).solve(&cube), Outcome::Inconclusive);
        }
    }

    #[test]
    fn too_shallow_is_inconclusive() {
        let cube = cube_with_moves::<Cube>("R U F");
        assert_eq!(Dfs::with_max_depth(2).solve(&cube), Outcome::Inconclusive);
    }

    #[test]
    fn single_turn() {
        let cube = cube_with_moves::<Cube>("R");
        assert_eq!(Dfs::with_max_depth(1).solve(&cube), Outcome::Solved(vec![Move::R_PRIME]));
    }

    fn solves_within_bound<C: CubeLike>() {
        let cube = cube_with_moves::<C>("F U R'");
        match Dfs::with_max_depth(3).solve(&cube) {
            Outcome::Solved(solution) => {
                assert!(solution.len() <= 3);
                assert!(verify(&cube, &solution));
            }
            Outcome::Inconclusive => panic!("{}: nothing found", C::NAME),
        }
    }

    #[test]
    fn solves_within_bound_everywhere() {
        for_each_cube!(solves_within_bound);
    }

    #[test]
    fn leaves_the_cube_untouched() {
        let original = cube_with_moves::<GridCube>("B L2 D'");
        let mut cube = original.clone();
        let mut path = Path::new();
        let mut nodes = 0;
        assert!(!Dfs::find_solution(2, &mut cube, &mut path, &mut nodes));
        assert_eq!(cube, original);
        assert!(path.is_empty());

        assert!(Dfs::find_solution(3, &mut cube, &mut path, &mut nodes));
        assert_eq!(cube, original);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn first_found_may_be_long() {
        let cube = cube_with_moves::<Cube>("U");
        match Dfs::with_max_depth(4).solve(&cube) {
            Outcome::Solved(solution) => assert!(verify(&cube, &solution)),
            Outcome::Inconclusive => panic!("nothing found"),
        }
    }
}
