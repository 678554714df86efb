//! `perft` — a small CLI for running perft/divide against a position, and
//! for dumping what this crate makes of a FEN string. Grounded in
//! `not-alien12-barnarok`'s `clap`-derived `main.rs` in this pack (the
//! teacher itself has no binary at all), restated in the teacher's own
//! brace style and against this crate's types.

use clap::{Parser, Subcommand};
use colored::Colorize;
use lucena::position::Position;
use lucena::{fen, perft};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "perft", about = "Perft/divide driver for the lucena move generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Counts leaf nodes at `depth`, printing a per-root-move breakdown.
    Divide {
        #[arg(long, default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")]
        fen: String,
        #[arg(long, default_value_t = 4)]
        depth: u32,
    },
    /// Runs an EPD test suite, comparing this crate's perft output against
    /// each line's expected node counts.
    Epd {
        path: String,
        #[arg(long, default_value_t = 5)]
        max_depth: u32,
        #[arg(long, default_value_t = usize::MAX)]
        num_tests: usize,
        #[arg(long, default_value_t = 0)]
        start_at: usize,
    },
    /// Parses a FEN string and prints what this crate made of it.
    Fen {
        fen: String,
    },
}

fn main() {
    lucena::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Divide { fen, depth } => match fen::parse(&fen) {
            Ok(mut pos) => {
                perft::perft(&mut pos, depth, true);
            }
            Err(err) => eprintln!("{}: {err}", "invalid FEN".red()),
        },
        Commands::Epd { path, max_depth, num_tests, start_at } => {
            perft::test_epd(&path, max_depth, num_tests, start_at);
        }
        Commands::Fen { fen } => show_fen(&fen),
    }
}

fn show_fen(text: &str) {
    match fen::parse(text) {
        Ok(pos) => {
            println!("side to move: {}", pos.side_to_move());
            println!("castling rights: {}", pos.castle_rights());
            println!(
                "en passant: {}",
                pos.en_passant_target().map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
            );
            println!("in check: {}", pos.is_in_check(pos.side_to_move()));
            print_board(&pos);
            println!("re-rendered FEN: {}", fen::render(&pos));
        }
        Err(err) => eprintln!("{}: {err}", "invalid FEN".red()),
    }
}

fn print_board(pos: &Position) {
    use lucena::square::{File, Rank};
    for rank_idx in (0..8).rev() {
        let rank = Rank::from_index(rank_idx).expect("rank_idx < 8");
        print!("{} ", rank.to_char());
        for file_idx in 0..8 {
            let file = File::from_index(file_idx).expect("file_idx < 8");
            let square = lucena::Square::from_file_rank(file, rank);
            let glyph = pos.piece_on(square).map(|p| p.symbol()).unwrap_or('.');
            print!("{glyph} ");
        }
        println!();
    }
    println!("  a b c d e f g h");
}
