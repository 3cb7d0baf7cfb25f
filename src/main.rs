use checkers::{Game, GameConfig};
use std::env;
use std::time::Instant;
use tracing::{error, info};

/// Time a perft run from the starting position.
///
/// Usage: `checkers [depth] [piece_rows]`.  Set `RUST_LOG=checkers=debug` to watch the moves.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let depth = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let piece_rows = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let game = match Game::with_config(GameConfig::default().with_piece_rows(piece_rows)) {
        Ok(game) => game,
        Err(e) => {
            error!(error = %e, "cannot set up the board");
            std::process::exit(1);
        }
    };
    info!(depth, piece_rows, "starting perft");

    println!("{}", game);
    let start = Instant::now();
    println!("Perft {}: {}", depth, game.perft(depth));
    println!("Performed in {} seconds", start.elapsed().as_secs_f64());
}
