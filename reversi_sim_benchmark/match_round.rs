use instant::{Duration, Instant};
use rayon::prelude::*;
use reversi_sim::prelude::*;
use reversi_sim_search::{GameTreeSearch, SearchCounter, SearchResult};

/// Final position of a game played out by two searches.
pub struct MatchOutcome {
    pub status: GameStatus,
    pub board: Board,
    pub plies: u32,
}

/// Plays `searches` against each other from `board`, `to_move` first, for at most `max_plies` plies.
///
/// The game ends after two consecutive passes. An illegal move ends it early
/// with `GameStatus::Ongoing`.
pub fn match_round<T: GameTreeSearch>(
    board: Board,
    to_move: Side,
    searches: &mut ByPlayer<T>,
    max_plies: u32,
    verbose: bool,
) -> (MatchOutcome, Duration, SearchCounter) {
    let t0 = Instant::now();
    let mut board = board;
    let mut to_move = to_move;
    let mut total_counter = SearchCounter::ZERO;
    let mut passes = 0;
    let mut plies = 0;
    while passes < 2 && plies < max_plies {
        let t1 = Instant::now();
        let SearchResult {
            best_move,
            eval: v,
            counter: c,
        } = searches[to_move].search(&board, to_move);
        total_counter.add_in_place(&c);
        match best_move {
            Some(mv) => {
                if let Err(e) = try_apply_move(&mut board, to_move, mv) {
                    println!("----------");
                    println!("Error: {e}");
                    println!("Board:\n{board}");
                    println!("----------");
                    return (
                        MatchOutcome {
                            status: GameStatus::Ongoing,
                            board,
                            plies,
                        },
                        t0.elapsed(),
                        total_counter,
                    );
                }
                passes = 0;
            }
            None => passes += 1,
        }
        if verbose {
            let mv = best_move.map_or_else(|| "pass".to_string(), |mv| mv.square_name());
            println!(
                "--> {plies:2} {to_move} {mv} | {v:.3} | {} | {c:?}",
                c.summary(t1.elapsed().as_nanos())
            );
        }
        to_move = to_move.opposite();
        plies += 1;
    }

    let outcome = MatchOutcome {
        status: status(&board, to_move.opposite()),
        board,
        plies,
    };
    (outcome, t0.elapsed(), total_counter)
}

pub struct IterateMatchOpts {
    pub rounds: u32,
    pub max_plies: u32,
    pub parallel: bool,
    pub initial: (Board, Side),
}

/// Plays `rounds` games between a candidate search and a standard opponent,
/// alternating the candidate's side every round.
///
/// `make_searches(round)` returns `(candidate, standard)`. Returns the candidate's score
/// (2 per win, 1 per tie) and its share of the maximum score.
pub fn iterate_match<T: GameTreeSearch, M: Send + Sync + Fn(u32) -> (T, T)>(
    make_searches: &M,
    opts: IterateMatchOpts,
) -> (u32, f32, SearchCounter) {
    let IterateMatchOpts {
        rounds,
        max_plies,
        parallel,
        initial: (board, to_move),
    } = opts;
    let play = |i: u32| {
        let candidate_side = if i % 2 == 0 { Side::Black } else { Side::White };
        let (candidate, standard) = make_searches(i);
        let mut searches = match candidate_side {
            Side::White => ByPlayer::new(candidate, standard),
            Side::Black => ByPlayer::new(standard, candidate),
        };

        println!("+ Round {:3}", i + 1);
        let (outcome, dt, c) = match_round(board, to_move, &mut searches, max_plies, false);
        let (result_str, d_score) = get_winner_value(outcome.status, candidate_side);
        println!(
            "- Round {:3} ... {result_str} candidate={candidate_side} white={} black={} dt={:6}ms, states_visited={:8}",
            i + 1,
            outcome.board.count(Side::White),
            outcome.board.count(Side::Black),
            dt.as_millis(),
            c.states_visited
        );
        (d_score, c)
    };
    let merge = |(s, mut c): (u32, SearchCounter), (s1, c1): (u32, SearchCounter)| {
        c.add_in_place(&c1);
        (s + s1, c)
    };
    let (score, total_counter) = if parallel {
        (0..rounds)
            .into_par_iter()
            .map(play)
            .reduce(|| (0, SearchCounter::ZERO), merge)
    } else {
        (0..rounds).map(play).fold((0, SearchCounter::ZERO), merge)
    };

    (score, (score as f32) / ((2 * rounds.max(1)) as f32), total_counter)
}

/// Result string from the candidate's point of view, and its score.
pub fn get_winner_value(status: GameStatus, candidate: Side) -> (&'static str, u32) {
    match status.winner() {
        Some(winner) if winner == candidate => ("1-0", 2),
        Some(_) => ("0-1", 0),
        None if status == GameStatus::Tie => ("1/2", 1),
        None => ("*", 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_games_finish() {
        let mut searches = ByPlayer::new(RandomSearch::new(1), RandomSearch::new(2));
        let (outcome, _, counter) = match_round(Board::standard(), Side::Black, &mut searches, 200, false);
        assert!(outcome.status.is_terminal());
        assert_eq!(counter.iterations, outcome.plies as u64);
        assert!(!has_legal_move(&outcome.board, Side::White));
        assert!(!has_legal_move(&outcome.board, Side::Black));
    }

    #[test]
    fn ply_cap_stops_the_game() {
        let mut searches = ByPlayer::new(RandomSearch::new(1), RandomSearch::new(2));
        let (outcome, _, _) = match_round(Board::standard(), Side::Black, &mut searches, 4, false);
        assert_eq!(outcome.plies, 4);
        assert_eq!(outcome.board.occupied(), 8);
        assert_eq!(outcome.status, GameStatus::Ongoing);
    }

    #[test]
    fn winner_value_is_from_the_candidate_side() {
        assert_eq!(get_winner_value(GameStatus::WhiteWins, Side::White), ("1-0", 2));
        assert_eq!(get_winner_value(GameStatus::WhiteWins, Side::Black), ("0-1", 0));
        assert_eq!(get_winner_value(GameStatus::Tie, Side::Black), ("1/2", 1));
        assert_eq!(get_winner_value(GameStatus::Ongoing, Side::Black), ("*", 0));
    }

    #[test]
    fn iterate_match_scores_every_round() {
        let make = |i: u32| (RandomSearch::new(i as u64), RandomSearch::new(1000 + i as u64));
        let opts = IterateMatchOpts {
            rounds: 4,
            max_plies: 200,
            parallel: false,
            initial: (Board::standard(), Side::Black),
        };
        let (score, share, counter) = iterate_match(&make, opts);
        assert!(score <= 8);
        assert!((0.0..=1.0).contains(&share));
        assert!(counter.iterations > 0);
    }
}
