//! Example demonstrating memory-game board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` over a character pool
//! - Generate a board for a given configuration
//! - Reproduce a board from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick the board size and difficulty:
//!
//! ```sh
//! cargo run --example generate_board -- --blocks 3 --difficulty 3 --scattered
//! ```
//!
//! Reproduce a board (the seed is printed with every board):
//!
//! ```sh
//! cargo run --example generate_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Restrict the pool to a range of ids:
//!
//! ```sh
//! cargo run --example generate_board -- --pool-size 64
//! ```

use std::process;

use cheonja_generator::{
    BoardConfig, BoardGenerator, BoardSeed, Difficulty, GeneratedBoard, testing::pool_with_ids,
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of 8-character blocks on the board.
    #[arg(short, long, value_name = "COUNT", default_value_t = 5)]
    blocks: usize,

    /// Difficulty level (1-3).
    #[arg(short, long, value_name = "LEVEL", default_value_t = 1)]
    difficulty: u8,

    /// Pick blocks anywhere in the pool instead of one contiguous run.
    #[arg(long)]
    scattered: bool,

    /// Number of characters in the pool (ids 1..=N).
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pool_size: u32,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<BoardSeed>,
}

fn main() {
    let args = Args::parse();

    let Some(difficulty) = Difficulty::from_level(args.difficulty) else {
        eprintln!("--difficulty must be 1, 2 or 3.");
        process::exit(2);
    };
    let config = BoardConfig::default()
        .with_block_count(args.blocks)
        .with_sequential_blocks(!args.scattered)
        .with_difficulty(difficulty);

    let pool = pool_with_ids(1..=args.pool_size);
    let generator = BoardGenerator::new(&pool);
    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(&config, seed),
        None => generator.generate(&config),
    };

    match result {
        Ok(generated) => print_board(&generated),
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    }
}

fn print_board(generated: &GeneratedBoard) {
    let board = &generated.board;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Config:");
    println!("  Blocks: {}", generated.config.block_count());
    println!("  Sequential: {}", generated.config.sequential_blocks());
    println!("  Difficulty: {}", generated.config.difficulty());
    println!();

    println!("Target:");
    for row in board.target.chunks(8) {
        let ids = row.iter().map(|r| format!("{:>4}", r.id)).collect::<String>();
        println!("  {ids}");
    }
    println!();

    println!("Initial:");
    for (row, target_row) in board.initial.chunks(8).zip(board.target.chunks(8)) {
        let ids = row
            .iter()
            .zip(target_row)
            .map(|(tile, target)| {
                let mark = if tile.id == target.id { '*' } else { ' ' };
                format!("{:>3}{mark}", tile.id)
            })
            .collect::<String>();
        println!("  {ids}");
    }
    println!();

    println!("Stats:");
    println!("  tiles: {}", board.tile_count());
    println!("  correct: {}", board.correct_count());
}
