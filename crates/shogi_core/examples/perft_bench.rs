//! Move generation and beam search timings, for flamegraph runs.
//!
//! ```text
//! cargo flamegraph --example perft_bench -p shogi_core -- [perft-depth] [sfen]
//! ```
//!
//! Without an SFEN the built-in positions are measured.

use std::env;
use std::time::{Duration, Instant};

use shogi_core::{Board, SearchLimits, ValueTable, best_move, perft};

const POSITIONS: &[(&str, &str)] = &[
    (
        "opening",
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
    ),
    (
        "bishops traded",
        "lnsgkgsnl/1r5+B1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL w B 4",
    ),
    (
        "full hands",
        "l6nl/5+P1gk/2np1S3/p1p4Pp/3P2Sp1/1PPb2P1P/P5GS1/R8/LN4bKL w RGgsn5p 1",
    ),
];

fn rate(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { count as f64 / secs } else { 0.0 }
}

fn measure(name: &str, board: &mut Board, depth: u8) {
    let start = Instant::now();
    let nodes = perft(board, depth);
    let perft_time = start.elapsed();

    let color = board.side_to_move();
    let table = ValueTable::zeros();
    let start = Instant::now();
    let (_, stats) = best_move(board, color, SearchLimits::default(), &table);
    let search_time = start.elapsed();

    println!(
        "{name:<16} perft({depth}) {nodes:>10} in {perft_time:>9.3?} ({:>10.0}/s)   beam {:>6} nodes in {search_time:>9.3?}",
        rate(nodes, perft_time),
        stats.nodes,
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(sfen) => vec![("custom", sfen.as_str())],
        None => POSITIONS.to_vec(),
    };

    for (name, sfen) in positions {
        match Board::from_sfen(sfen) {
            Ok(mut board) => measure(name, &mut board, depth),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
