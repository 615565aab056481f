use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use itertools::Itertools;
use log::warn;
use pocketcube::solver::{BidirectionalSolver, DEFAULT_STATE_LIMIT};
use pocketcube::turn::{format_sequence, parse_sequence};
use pocketcube::CubeState;

/// Finds a shortest sequence of quarter turns solving a 2x2x2 cube
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Turns applied to the solved cube, e.g. "F L R' U"
    #[arg(short, long, conflicts_with_all = ["stickers", "faces"])]
    scramble: Option<String>,
    /// 24 sticker letters out of BGORWY, face by face in U L F R B D order, each face row by row
    #[arg(long, conflicts_with = "faces")]
    stickers: Option<String>,
    /// Six packed face words in hex, in U L F R B D order
    #[arg(long, num_args = 6, value_parser = parse_word)]
    faces: Option<Vec<u16>>,
    /// Give up after discovering this many states
    #[arg(short, long, default_value_t = DEFAULT_STATE_LIMIT)]
    limit: usize,
}

fn parse_word(s: &str) -> Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let args = Args::parse();

    let cube = match (args.scramble, args.stickers, args.faces) {
        (Some(scramble), _, _) => {
            let mut cube = CubeState::SOLVED;
            cube.apply_all(&parse_sequence(&scramble)?);
            cube
        }
        (_, Some(stickers), _) => stickers.parse::<CubeState>()?,
        (_, _, Some(faces)) => {
            let count = faces.len();
            CubeState::from_faces(faces.try_into().map_err(|_| eyre!("expected 6 face words, got {count}"))?)
        }
        _ => bail!("nothing to solve, pass one of --scramble, --stickers or --faces"),
    };

    if !cube.is_well_formed() {
        warn!("{cube:?} holds nibbles which are not colors");
    }
    println!("{cube}");

    let solution = BidirectionalSolver::new(cube).with_state_limit(args.limit).solve()?;
    if solution.is_empty() {
        println!("already solved");
    } else {
        println!("{} ({} turns)", format_sequence(&solution), solution.len());
        println!("turn ids: {}", solution.iter().map(|turn| turn.id()).join(" "));
    }

    Ok(())
}
