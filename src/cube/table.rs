use crate::prelude::*;

use super::facelet::{dot, quarter_clockwise};

/// For every move, where each facelet's new color comes from:
/// after the move, facelet `i` holds what facelet `perm[i]` held before.
pub(crate) type Permutation = [u8; FACELETS];

lazy_static::lazy_static! {
    pub(crate) static ref MOVE_TABLE: MoveTable = MoveTable::init();
}

pub(crate) struct MoveTable {
    perms: [Permutation; Move::COUNT],
}

impl MoveTable {
    fn init() -> Self {
        let start = std::time::Instant::now();

        let mut perms = [identity(); Move::COUNT];
        for m in Move::all() {
            let quarter = quarter_turn(m.face);
            perms[m.index()] = (1..m.direction.quarter_turns())
                .fold(quarter, |acc, _| compose(&acc, &quarter));
        }

        log::debug!("Built facelet move table in {:?}", start.elapsed());
        MoveTable { perms }
    }

    pub(crate) fn get(&self, move_: Move) -> &Permutation {
        &self.perms[move_.index()]
    }

    /// The permutation split into its non-trivial cycles.
    ///
    /// Each cycle `[a, b, c, ..]` means `a` takes the color of `b`, `b` of `c`
    /// and the last takes the color of `a`.
    pub(crate) fn cycles(&self, move_: Move) -> Vec<Vec<u8>> {
        let perm = self.get(move_);
        let mut seen = [false; FACELETS];
        let mut cycles = Vec::new();

        for start in 0..FACELETS {
            if seen[start] || perm[start] as usize == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut at = start;
            while !seen[at] {
                seen[at] = true;
                cycle.push(at as u8);
                at = perm[at] as usize;
            }
            cycles.push(cycle);
        }

        cycles
    }
}

fn identity() -> Permutation {
    let mut perm = [0; FACELETS];
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i as u8;
    }
    perm
}

/// `first` followed by `then`.
fn compose(first: &Permutation, then: &Permutation) -> Permutation {
    let mut out = [0; FACELETS];
    for (i, o) in out.iter_mut().enumerate() {
        *o = first[then[i] as usize];
    }
    out
}

/// Clockwise quarter turn of `face`, derived by rotating every sticker of the
/// turning layer about the face's axis.
fn quarter_turn(face: Face) -> Permutation {
    let axis = face.normal();
    let mut perm = identity();

    for from in Facelet::all() {
        let position = from.position();
        if dot(position, axis) != 1 {
            continue;
        }
        let to = Facelet::at(
            quarter_clockwise(axis, position),
            quarter_clockwise(axis, from.face.normal()),
        );
        perm[to.index()] = from.index() as u8;
    }

    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(perm: &Permutation, colors: &[u8; FACELETS]) -> [u8; FACELETS] {
        let mut out = [0; FACELETS];
        for i in 0..FACELETS {
            out[i] = colors[perm[i] as usize];
        }
        out
    }

    #[test]
    fn every_move_is_a_permutation() {
        for m in Move::all() {
            let mut sorted = *MOVE_TABLE.get(m);
            sorted.sort();
            assert_eq!(sorted, identity(), "{}", m);
        }
    }

    #[test]
    fn quarter_turns_have_order_four() {
        for m in Move::all().filter(|m| m.direction != Direction::Double) {
            let perm = MOVE_TABLE.get(m);
            let four = (0..3).fold(*perm, |acc, _| compose(&acc, perm));
            assert_eq!(four, identity(), "{}", m);
        }
    }

    #[test]
    fn half_turns_have_order_two() {
        for m in Move::all().filter(|m| m.direction == Direction::Double) {
            let perm = MOVE_TABLE.get(m);
            assert_eq!(compose(perm, perm), identity(), "{}", m);
        }
    }

    #[test]
    fn reverse_undoes() {
        for m in Move::all() {
            assert_eq!(
                compose(MOVE_TABLE.get(m), MOVE_TABLE.get(m.reverse())),
                identity(),
                "{}",
                m
            );
        }
    }

    #[test]
    fn quarter_turn_is_five_four_cycles() {
        for m in Move::all().filter(|m| m.direction != Direction::Double) {
            let cycles = MOVE_TABLE.cycles(m);
            assert_eq!(cycles.len(), 5, "{}", m);
            assert!(cycles.iter().all(|c| c.len() == 4));
        }
    }

    #[test]
    fn half_turn_is_ten_swaps() {
        for m in Move::all().filter(|m| m.direction == Direction::Double) {
            let cycles = MOVE_TABLE.cycles(m);
            assert_eq!(cycles.len(), 10, "{}", m);
            assert!(cycles.iter().all(|c| c.len() == 2));
        }
    }

    #[test]
    fn centers_never_move() {
        for m in Move::all() {
            for face in Face::all() {
                let center = Facelet::new(face, 1, 1).index();
                assert_eq!(MOVE_TABLE.get(m)[center] as usize, center);
            }
        }
    }

    #[test]
    fn up_turn_moves_front_row_left() {
        let mut colors = [0u8; FACELETS];
        for facelet in Facelet::all() {
            colors[facelet.index()] = facelet.face.index() as u8;
        }
        let turned = apply(MOVE_TABLE.get(Move::U), &colors);
        for col in 0..3 {
            let left_top = Facelet::new(Face::Left, 0, col).index();
            assert_eq!(turned[left_top], Face::Front.index() as u8);
            let front_top = Facelet::new(Face::Front, 0, col).index();
            assert_eq!(turned[front_top], Face::Right.index() as u8);
        }
    }

    #[test]
    fn right_turn_moves_front_column_up() {
        let mut colors = [0u8; FACELETS];
        for facelet in Facelet::all() {
            colors[facelet.index()] = facelet.face.index() as u8;
        }
        let turned = apply(MOVE_TABLE.get(Move::R), &colors);
        for row in 0..3 {
            let up_right = Facelet::new(Face::Up, row, 2).index();
            assert_eq!(turned[up_right], Face::Front.index() as u8);
            let back_left = Facelet::new(Face::Back, row, 0).index();
            assert_eq!(turned[back_left], Face::Up.index() as u8);
        }
    }

    #[test]
    fn clockwise_turn_moves_top_left_to_top_right() {
        let m = Move::F;
        let top_right = Facelet::new(Face::Front, 0, 2).index();
        let top_left = Facelet::new(Face::Front, 0, 0).index();
        assert_eq!(MOVE_TABLE.get(m)[top_right] as usize, top_left);
    }
}
