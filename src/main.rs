use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

use cubesearch::prelude::*;

/// Scrambles a cube and searches for a way back to solved.
#[derive(Parser)]
#[command(name = "cubesearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cube encoding to search with.
    #[arg(long, value_enum, default_value_t = Representation::Flat)]
    representation: Representation,

    /// Search strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Iddfs)]
    solver: Strategy,

    /// Scramble to apply, e.g. "R U' F2". Random when omitted.
    #[arg(long)]
    scramble: Option<String>,

    /// Length of the random scramble.
    #[arg(long, default_value_t = 6)]
    length: usize,

    /// Seed for the random scramble.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many moves. Breadth-first search is unbounded by default.
    #[arg(long)]
    max_depth: Option<u8>,

    /// Search without the pattern table lower bound.
    #[arg(long)]
    no_heuristic: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Representation {
    Grid,
    Flat,
    Bitboard,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Bfs,
    Dfs,
    Iddfs,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let cli = Cli::parse();

    match cli.representation {
        Representation::Grid => run::<GridCube>(&cli),
        Representation::Flat => run::<FlatCube>(&cli),
        Representation::Bitboard => run::<BitCube>(&cli),
    }
}

fn run<C: CubeLike>(cli: &Cli) -> anyhow::Result<()> {
    let mut cube = C::solved();
    let scramble = match &cli.scramble {
        Some(s) => {
            let moves = Move::parse_sequence(s)?;
            for &m in &moves {
                cube.rotate(m);
            }
            moves
        }
        None => match cli.seed {
            Some(seed) => cube.shuffle_with(&mut StdRng::seed_from_u64(seed), cli.length),
            None => cube.random_shuffle(cli.length),
        },
    };

    log::info!("Using {} cube", C::NAME);
    println!("Scramble: {}", notation(&scramble));
    println!("{}", Planar(&cube));

    let outcome = match cli.solver {
        Strategy::Bfs => {
            let bfs = match cli.max_depth {
                Some(max) => Bfs::with_max_depth(max),
                None => Bfs::default(),
            };
            bfs.solve(&cube)
        }
        Strategy::Dfs => {
            let dfs = match cli.max_depth {
                Some(max) => Dfs::with_max_depth(max),
                None => Dfs::default(),
            };
            dfs.solve(&cube)
        }
        Strategy::Iddfs => {
            let mut iddfs = Iddfs::default();
            if let Some(max) = cli.max_depth {
                iddfs = iddfs.with_max_depth(max);
            }
            if cli.no_heuristic {
                iddfs = iddfs.without_heuristic();
            }
            iddfs.solve(&cube)
        }
    };

    match outcome {
        Outcome::Solved(solution) => {
            if !verify(&cube, &solution) {
                anyhow::bail!("solution {} does not solve the cube", notation(&solution));
            }
            println!("Solution ({} moves): {}", solution.len(), notation(&solution));
            println!("{}", Planar(&cube.apply_all(solution)));
        }
        Outcome::Inconclusive => {
            println!("Inconclusive: no solution within the search limits");
        }
    }

    Ok(())
}
