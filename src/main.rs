use std::process;

use board_viewer::board::{BoardController, BoardId};
use board_viewer::render::DisplayConfig;
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "board_viewer")]
#[command(about = "Replay chess move text and print the resulting board")]
#[command(version)]
struct Args {
    /// Starting position (six-field FEN); defaults to the initial position
    #[arg(short, long)]
    fen: Option<String>,

    /// Move text to play, e.g. "1. d4 Nf6 2. c4"
    #[arg(short, long)]
    moves: Option<String>,

    /// Absolute ply of the first move in --moves (0 = White's first move).
    /// Defaults to the ply of the starting position.
    #[arg(long)]
    start_ply: Option<usize>,

    /// Display bits: 1 = rank digits, 2 = flipped, 4 = file letters, 8 = no shading
    #[arg(long, default_value_t = 5)]
    flags: u8,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match DisplayConfig::from_bits(args.flags) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let board = match args.fen.as_deref() {
        Some(snapshot) => BoardController::from_fen(BoardId::Live, snapshot),
        None => Ok(BoardController::new(BoardId::Live)),
    };
    let mut board = match board {
        Ok(board) => board.with_config(config),
        Err(e) => {
            eprintln!("Error: invalid FEN: {}", e);
            process::exit(1);
        }
    };

    let mut failed = false;
    if let Some(moves) = args.moves.as_deref() {
        let start_ply = args.start_ply.unwrap_or_else(|| board.position().ply());
        match board.apply_move_list_text(moves, start_ply) {
            Ok(applied) => info!("played {} moves", applied),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    println!("{}", board.render());
    println!();
    println!("FEN:      {}", board.fen());
    println!("Mobility: {}", board.mobility());
    println!("Balance:  {}", board.balance());

    let position = board.position();
    if position.is_checkmate() {
        println!("Checkmate, {:?} wins", position.side_to_move.opposite());
    } else if position.is_stalemate() {
        println!("Stalemate");
    } else if position.is_in_check(position.side_to_move) {
        println!("{:?} is in check", position.side_to_move);
    }

    if failed {
        process::exit(1);
    }
}
