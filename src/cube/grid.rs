use crate::prelude::*;

use super::table::MOVE_TABLE;

type Cell = (u8, u8, u8);

lazy_static::lazy_static! {
    /// Per move, the sticker cycles as `(face, row, col)` cells.
    static ref CYCLES: Vec<Vec<Vec<Cell>>> = {
        let mut cycles = vec![Vec::new(); Move::COUNT];
        for m in Move::all() {
            cycles[m.index()] = MOVE_TABLE
                .cycles(m)
                .into_iter()
                .map(|cycle| {
                    cycle
                        .into_iter()
                        .map(|i| {
                            let f = Facelet::from_index(i as usize);
                            (f.face.index() as u8, f.row, f.col)
                        })
                        .collect()
                })
                .collect();
        }
        cycles
    };
}

/// Six 3x3 grids, one per face, in storage face order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridCube([[[Color; 3]; 3]; Face::COUNT]);

impl GridCube {
    fn get(&self, (face, row, col): Cell) -> Color {
        self.0[face as usize][row as usize][col as usize]
    }

    fn set(&mut self, (face, row, col): Cell, color: Color) {
        self.0[face as usize][row as usize][col as usize] = color;
    }
}

impl CubeLike for GridCube {
    const NAME: &'static str = "grid";

    fn solved() -> Self {
        let mut grid = [[[Color::White; 3]; 3]; Face::COUNT];
        for face in Face::all() {
            grid[face.index()] = [[face.home_color(); 3]; 3];
        }
        GridCube(grid)
    }

    fn from_facelets(facelets: &[Color; FACELETS]) -> Self {
        super::facelet::check_centers(facelets);
        let mut grid = [[[Color::White; 3]; 3]; Face::COUNT];
        for facelet in Facelet::all() {
            grid[facelet.face.index()][facelet.row as usize][facelet.col as usize] =
                facelets[facelet.index()];
        }
        GridCube(grid)
    }

    fn color(&self, face: Face, row: usize, col: usize) -> Color {
        self.0[face.index()][row][col]
    }

    fn is_solved(&self) -> bool {
        Face::all().all(|face| {
            self.0[face.index()]
                .iter()
                .flatten()
                .all(|&c| c == face.home_color())
        })
    }

    fn rotate(&mut self, move_: Move) -> &mut Self {
        for cycle in &CYCLES[move_.index()] {
            let first = self.get(cycle[0]);
            for pair in cycle.windows(2) {
                self.set(pair[0], self.get(pair[1]));
            }
            self.set(cycle[cycle.len() - 1], first);
        }
        self
    }
}
