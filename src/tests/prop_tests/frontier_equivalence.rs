use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn incremental_frontier_matches_recomputation(pos in arb_reachable_position()) {
        prop_assert_eq!(pos.frontier, Frontier::from_board(&pos.board));
    }

    #[test]
    fn frontier_moves_match_full_scan(pos in arb_reachable_position()) {
        for side in [Side::White, Side::Black] {
            prop_assert_eq!(
                sorted(&legal_moves_via_frontier(&pos.board, side, &pos.frontier)),
                sorted(&legal_moves(&pos.board, side))
            );
        }
    }

    #[test]
    fn frontier_cells_are_empty_and_touch_a_disc(pos in arb_reachable_position()) {
        for mv in pos.frontier.iter() {
            prop_assert!(pos.board.get(mv).is_empty());
            prop_assert!(mv.neighbors().any(|n| !pos.board.get(n).is_empty()));
        }
    }

    #[test]
    fn update_frontier_after_one_more_move(input in arb_reachable_position_with_move()) {
        let (pos, mv) = input;
        if let Some(mv) = mv {
            let mut board = pos.board;
            let mut frontier = pos.frontier;
            apply_move(&mut board, pos.to_move, mv);
            update_frontier(&mut frontier, &board, mv);
            prop_assert!(!frontier.contains(mv));
            prop_assert_eq!(frontier, Frontier::from_board(&board));
        }
    }
}
