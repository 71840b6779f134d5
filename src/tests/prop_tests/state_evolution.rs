use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn legal_moves_are_empty_distinct_and_legal(pos in arb_reachable_position()) {
        let moves = legal_moves(&pos.board, pos.to_move);
        let mut seen = std::collections::HashSet::new();
        for &mv in &moves {
            prop_assert!(pos.board.get(mv).is_empty());
            prop_assert!(is_legal_move(&pos.board, pos.to_move, mv));
            prop_assert!(seen.insert(mv), "duplicate move {}", mv);
        }
        prop_assert_eq!(moves.is_empty(), !has_legal_move(&pos.board, pos.to_move));
    }

    #[test]
    fn try_apply_move_agrees_with_legal_moves(pos in arb_reachable_position()) {
        let moves = legal_moves(&pos.board, pos.to_move);
        for index in 0..64 {
            let mv = Move::from_index(index);
            let mut board = pos.board;
            let result = try_apply_move(&mut board, pos.to_move, mv);
            prop_assert_eq!(result.is_ok(), moves.contains(&mv));
            if result.is_err() {
                prop_assert_eq!(board, pos.board);
            }
        }
    }

    #[test]
    fn apply_move_places_one_disc_and_only_flips(input in arb_reachable_position_with_move()) {
        let (pos, mv) = input;
        let Some(mv) = mv else {
            return Ok(());
        };
        let side = pos.to_move;
        let mut after = pos.board;
        let flipped = apply_move(&mut after, side, mv);

        prop_assert!(flipped >= 1);
        prop_assert_eq!(after.occupied(), pos.board.occupied() + 1);
        prop_assert_eq!(after.get(mv), Cell::Disc(side));
        prop_assert_eq!(after.count(side), pos.board.count(side) + flipped + 1);
        prop_assert_eq!(after.count(side.opposite()), pos.board.count(side.opposite()) - flipped);

        for (at, now) in after.iter() {
            if at == mv {
                continue;
            }
            let prev = pos.board.get(at);
            if prev != now {
                prop_assert_eq!(prev, Cell::Disc(side.opposite()));
                prop_assert_eq!(now, Cell::Disc(side));
            }
        }
    }

    #[test]
    fn status_is_terminal_iff_nobody_can_move(pos in arb_reachable_position()) {
        let just_moved = pos.to_move.opposite();
        let status = status(&pos.board, just_moved);
        let stuck = !has_legal_move(&pos.board, Side::White) && !has_legal_move(&pos.board, Side::Black);
        prop_assert_eq!(status.is_terminal(), stuck);
    }

    #[test]
    fn finished_games_favour_the_side_with_fewer_discs(pos in arb_finished_position()) {
        let status = status(&pos.board, pos.to_move.opposite());
        prop_assert!(status.is_terminal());
        let material = pos.board.material();
        let expected = match material.signum() {
            1 => GameStatus::BlackWins,
            -1 => GameStatus::WhiteWins,
            _ => GameStatus::Tie,
        };
        prop_assert_eq!(status, expected);
    }
}
