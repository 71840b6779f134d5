use super::*;

#[test]
fn perft_from_standard_position() {
    let board = Board::standard();
    let expected = [1u64, 4, 12, 56, 244, 1396];
    for (depth, n) in expected.into_iter().enumerate() {
        assert_eq!(perft(&board, Side::FIRST, depth as u8), n, "depth {depth}");
    }
}

#[test]
fn perft_counts_passes_as_plies() {
    // Black has no move, White has exactly one.
    let board = board_from_str(
        "
        W B - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        ",
    );
    assert_eq!(perft(&board, Side::Black, 1), 1);
    assert_eq!(perft(&board, Side::Black, 2), 1);
    // After White's move the game is over; the finished position counts once.
    assert_eq!(perft(&board, Side::Black, 5), 1);
}
