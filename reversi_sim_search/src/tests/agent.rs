use std::time::Duration;

use super::*;
use crate::prelude::*;

fn capped_agent(side: Side, iterations: u64, seed: u64) -> Agent {
    let config = MCTSConfig::STANDARD.with_limits(SearchLimits::iterations(iterations));
    Agent::with_config(BOARD_SIZE, side, 60.0, config, seed).unwrap()
}

#[test]
fn new_validates_board_size_and_time_limit() {
    assert!(Agent::new(8, Side::Black, 1.0).is_ok());
    assert_eq!(
        Agent::new(6, Side::Black, 1.0).err(),
        Some(AgentError::UnsupportedBoardSize(6))
    );
    assert!(matches!(
        Agent::new(8, Side::White, -1.0),
        Err(AgentError::InvalidTimeLimit(t)) if t == -1.0
    ));
    assert!(matches!(
        Agent::new(8, Side::White, f64::NAN),
        Err(AgentError::InvalidTimeLimit(_))
    ));
    assert!(matches!(
        Agent::new(8, Side::White, f64::INFINITY),
        Err(AgentError::InvalidTimeLimit(_))
    ));
    let agent = Agent::new(8, Side::White, 0.25).unwrap();
    assert_eq!(agent.time_limit(), Duration::from_millis(250));
    assert_eq!(agent.side(), Side::White);
}

#[test]
fn returns_the_only_legal_move() {
    let mut agent = Agent::new(8, Side::Black, 0.05).unwrap();
    assert_eq!(agent.choose_move(&single_move_for_black()), Some(Move::new(0, 2)));
    assert!(agent.last_counter().iterations >= 1);
}

#[test]
fn returns_none_without_touching_the_board() {
    let board = black_must_pass();
    let before = board;
    let mut agent = Agent::new(8, Side::Black, 0.05).unwrap();
    assert_eq!(agent.choose_move(&board), None);
    assert_eq!(board, before);
    assert_eq!(agent.last_counter(), SearchCounter::ZERO);
}

#[test]
fn zero_time_budget_still_returns_a_legal_move() {
    let mut agent = Agent::new(8, Side::Black, 0.0).unwrap();
    let mv = agent.choose_move(&Board::standard()).unwrap();
    assert!(legal_moves(&Board::standard(), Side::Black).contains(&mv));
    assert_eq!(agent.last_counter().iterations, 1);
}

#[test]
fn opening_move_is_legal_under_a_short_budget() {
    let mut agent = Agent::new(8, Side::Black, 0.05).unwrap();
    let board = Board::standard();
    let mv = agent.choose_move(&board).unwrap();
    assert!(is_legal_move(&board, Side::Black, mv));
}

#[test]
fn same_seed_and_cap_choose_the_same_moves() {
    let board = Board::standard().play(Side::Black, Move::new(2, 3));
    let mut a = capped_agent(Side::White, 300, 17);
    let mut b = capped_agent(Side::White, 300, 17);
    for _ in 0..3 {
        assert_eq!(a.choose_move(&board), b.choose_move(&board));
        assert_eq!(a.last_counter(), b.last_counter());
    }
}

#[test]
fn statistics_do_not_persist_between_calls() {
    let mut agent = capped_agent(Side::Black, 40, 1);
    agent.choose_move(&Board::standard());
    let first = agent.last_counter();
    agent.choose_move(&Board::standard());
    assert_eq!(agent.last_counter().iterations, first.iterations);
    assert_eq!(first.iterations, 40);
}

#[test]
fn choose_move_raw_validates_input() {
    let mut agent = capped_agent(Side::Black, 10, 1);
    let rows: Vec<Vec<i8>> = Board::standard().to_rows().iter().map(|r| r.to_vec()).collect();
    let mv = agent.choose_move_raw(&rows).unwrap().unwrap();
    assert!(is_legal_move(&Board::standard(), Side::Black, mv));

    let mut bad = rows.clone();
    bad[0][0] = 3;
    assert_eq!(
        agent.choose_move_raw(&bad),
        Err(AgentError::InvalidBoard(InvalidBoardError::InvalidCell {
            row: 0,
            col: 0,
            value: 3
        }))
    );
    assert_eq!(
        agent.choose_move_raw(&rows[..4]),
        Err(AgentError::InvalidBoard(InvalidBoardError::WrongRowCount(4)))
    );
}

#[test]
fn self_play_reaches_a_finished_game() {
    let mut agents = ByPlayer::new(capped_agent(Side::White, 30, 2), capped_agent(Side::Black, 30, 3));
    let mut board = Board::standard();
    let mut to_move = Side::FIRST;
    let mut passes = 0;
    while passes < 2 {
        match agents[to_move].choose_move(&board) {
            Some(mv) => {
                try_apply_move(&mut board, to_move, mv).unwrap();
                passes = 0;
            }
            None => passes += 1,
        }
        to_move = to_move.opposite();
    }
    assert!(status(&board, to_move).is_terminal());
}
