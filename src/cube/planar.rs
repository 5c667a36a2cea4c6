use crate::prelude::*;

use std::fmt;

/// Prints any cube as its unfolded net, reading colors through [`CubeLike::color`].
///
/// ```text
///        W W W
///        W W W
///        W W W
/// G G G  R R R  B B B  O O O
/// ...
/// ```
pub struct Planar<'c, C>(pub &'c C);

impl<'c, C: CubeLike> Planar<'c, C> {
    fn row(&self, face: Face, row: usize) -> String {
        (0..3)
            .map(|col| self.0.color(face, row, col).letter().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'c, C: CubeLike> fmt::Display for Planar<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let indent = " ".repeat(7);

        for row in 0..3 {
            writeln!(f, "{}{}", indent, self.row(Face::Up, row))?;
        }

        for row in 0..3 {
            let middle = [Face::Left, Face::Front, Face::Right, Face::Back]
                .iter()
                .map(|&face| self.row(face, row))
                .collect::<Vec<_>>();
            writeln!(f, "{}", middle.join("  "))?;
        }

        for row in 0..3 {
            writeln!(f, "{}{}", indent, self.row(Face::Down, row))?;
        }

        Ok(())
    }
}
