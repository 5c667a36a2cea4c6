//! Rubik's cube state encodings and the searches that solve them.
//!
//! ```
//! use cubesearch::prelude::*;
//!
//! let mut cube = BitCube::solved();
//! cube.r().u().f_prime();
//!
//! let solution = Iddfs::default().solve(&cube);
//! assert_eq!(solution.solution().map(|s| s.len()), Some(3));
//! ```

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod cube;
pub mod r#move;
pub mod prelude;
pub mod scramble;
pub mod solver;
