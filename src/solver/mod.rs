use crate::prelude::*;

mod bfs;
pub use bfs::*;

mod dfs;
pub use dfs::*;

mod heuristic;
pub use heuristic::*;

mod iddfs;
pub use iddfs::*;

/// Searches the move graph from a scrambled cube towards solved.
///
/// Solvers only use [`CubeLike`], so they run unchanged on every encoding.
pub trait Solver {
    fn name(&self) -> &'static str;

    fn solve<C: CubeLike>(&self, cube: &C) -> Outcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Vec<Move>),
    /// Nothing found within the search's limits. Says nothing about whether a
    /// solution exists; a deeper search may still find one.
    Inconclusive,
}

impl Outcome {
    pub fn solution(&self) -> Option<&[Move]> {
        match self {
            Outcome::Solved(moves) => Some(moves),
            Outcome::Inconclusive => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Whether `solution` takes `cube` to solved.
pub fn verify<C: CubeLike>(cube: &C, solution: &[Move]) -> bool {
    cube.clone().apply_all(solution.iter().copied()).is_solved()
}

/// Search path with room for a full God's-number solution on the stack.
pub(crate) type Path = smallvec::SmallVec<[Move; 24]>;

/// Moves worth trying after the last move of `path`.
pub(crate) fn next_moves(path: &[Move]) -> impl Iterator<Item = Move> + '_ {
    let last = path.last().copied();
    Move::all().filter(move |m| match last {
        None => true,
        Some(prev) => m.could_follow(&prev),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_is_free() {
        assert_eq!(next_moves(&[]).count(), Move::COUNT);
    }

    #[test]
    fn pruned_branching() {
        // 15 after U, which precedes D; 12 after D
        assert_eq!(next_moves(&[Move::U]).count(), 15);
        assert_eq!(next_moves(&[Move::D]).count(), 12);
    }

    #[test]
    fn verify_accepts_inverse() {
        let cube = cube_with_moves::<Cube>("R U F'");
        assert!(verify(&cube, &Move::parse_sequence("F U' R'").unwrap()));
        assert!(!verify(&cube, &Move::parse_sequence("F U' R").unwrap()));
    }
}
