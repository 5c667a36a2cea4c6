use crate::prelude::*;

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first search. Finds a shortest solution, but keeps every frontier
/// state in memory, so it is only practical for short scrambles.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    max_depth: Option<u8>,
}

/// One step of a search path: the trail entry it came from and the move taken.
#[derive(Clone, Copy)]
struct Step {
    parent: u32,
    move_: Move,
}

const ROOT: u32 = u32::MAX;

impl Bfs {
    /// Stops expanding at `max_depth` moves and reports inconclusive instead
    /// of running out of memory.
    pub fn with_max_depth(max_depth: u8) -> Self {
        Bfs {
            max_depth: Some(max_depth),
        }
    }

    fn path(trail: &[Step], mut at: u32) -> Vec<Move> {
        let mut moves = Vec::new();
        while at != ROOT {
            let step = trail[at as usize];
            moves.push(step.move_);
            at = step.parent;
        }
        moves.reverse();
        moves
    }
}

impl Solver for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve<C: CubeLike>(&self, cube: &C) -> Outcome {
        let start = std::time::Instant::now();

        // Frontier entries own their cube; paths live in `trail` as parent links.
        let mut trail: Vec<Step> = Vec::new();
        let mut queue: VecDeque<(C, u32, u8)> = VecDeque::new();
        let mut visited = FxHashSet::default();

        visited.insert(cube.key());
        queue.push_back((cube.clone(), ROOT, 0));
        let mut layer = 0;

        while let Some((cube, at, depth)) = queue.pop_front() {
            if depth != layer {
                log::debug!(
                    "bfs: layer {} done, {} visited, {} queued",
                    layer,
                    visited.len(),
                    queue.len() + 1
                );
                layer = depth;
            }

            if cube.is_solved() {
                let solution = Self::path(&trail, at);
                log::info!(
                    "bfs: found {} move solution after visiting {} states in {:?}",
                    solution.len(),
                    visited.len(),
                    start.elapsed()
                );
                return Outcome::Solved(solution);
            }

            if matches!(self.max_depth, Some(max) if depth >= max) {
                continue;
            }

            let last = if at == ROOT {
                None
            } else {
                Some(trail[at as usize].move_)
            };
            for m in Move::all() {
                if let Some(prev) = last {
                    if !m.could_follow(&prev) {
                        continue;
                    }
                }

                let next = cube.clone().apply(m);
                if !visited.insert(next.key()) {
                    continue;
                }

                trail.push(Step {
                    parent: at,
                    move_: m,
                });
                queue.push_back((next, (trail.len() - 1) as u32, depth + 1));
            }
        }

        match self.max_depth {
            Some(max) => {
                log::info!(
                    "bfs: nothing within {} moves, {} states visited",
                    max,
                    visited.len()
                );
                Outcome::Inconclusive
            }
            None => panic!(
                "bfs exhausted {} states without reaching solved; the move tables are inconsistent",
                visited.len()
            ),
        }
    }
}
