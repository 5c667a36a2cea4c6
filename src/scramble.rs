use crate::prelude::*;

use rand::{seq::SliceRandom, Rng};

/// `times` moves drawn uniformly from all 18.
pub fn random_moves<R: Rng + ?Sized>(rng: &mut R, times: usize) -> Vec<Move> {
    let moves = Move::all().collect::<Vec<_>>();
    (0..times)
        .map(|_| match moves.choose(rng) {
            Some(&m) => m,
            None => unreachable!(),
        })
        .collect()
}

/// A solved cube scrambled with `times` random moves, and the moves used.
pub fn scrambled<C: CubeLike, R: Rng>(rng: &mut R, times: usize) -> (C, Vec<Move>) {
    let mut cube = C::solved();
    let moves = cube.shuffle_with(rng, times);
    (cube, moves)
}
