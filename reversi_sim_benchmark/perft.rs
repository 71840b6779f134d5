use instant::Instant;
use reversi_sim::prelude::*;
use reversi_sim_cli_utils::cli_args::{PositionError, SearchOpts};

/// Same count as `perft`, with the first `parallel_depth` plies split across threads.
pub fn perft_parallel(board: &Board, side: Side, depth: u8, parallel_depth: u8) -> u64 {
    use rayon::prelude::*;
    if parallel_depth == 0 || depth <= 2 {
        return perft(board, side, depth);
    }
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return perft(board, side, depth);
    }
    moves
        .into_vec()
        .into_par_iter()
        .map(|mv| {
            let mut next = *board;
            apply_move(&mut next, side, mv);
            perft_parallel(&next, side.opposite(), depth - 1, parallel_depth - 1)
        })
        .sum()
}

pub fn run_perft(opts: &SearchOpts, parallel: bool, depth: u8) -> Result<(), PositionError> {
    let (board, side) = opts.get_position()?;
    let start_time = Instant::now();
    let n = if parallel {
        perft_parallel(&board, side, depth, 4)
    } else {
        perft(&board, side, depth)
    };
    let dt = start_time.elapsed();
    let dt_ms = (dt.as_nanos() as f64) * 1e-6;
    let rate = 1e-3f64 * (n as f64) / dt_ms.max(1e-6);
    println!("depth = {depth}, n_pos = {n}, dt = {dt_ms:.3} ms, rate = {rate:.3} Mpos/s");
    Ok(())
}
