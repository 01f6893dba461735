use super::*;

/// In-progress game with both seats filled; returns (game, black, white).
fn active_game(rows: usize, cols: usize, win_len: usize) -> (GameState, Uuid, Uuid) {
    let black = Uuid::new_v4();
    let white = Uuid::new_v4();
    let board = Board::new(rows, cols).unwrap();
    let mut game = GameState::new(board, win_len, black);
    game.white = Some(white);
    game.phase = GamePhase::InProgress;
    (game, black, white)
}

#[test]
fn black_moves_first_and_turns_alternate() {
    let (mut game, black, white) = active_game(15, 15, 5);

    apply_move(&mut game, black, 7, 7).unwrap();
    assert_eq!(game.to_move, Player::White);
    apply_move(&mut game, white, 8, 7).unwrap();
    assert_eq!(game.to_move, Player::Black);

    assert_eq!(game.board.get(7, 7), Some(Cell::Stone(Player::Black)));
    assert_eq!(game.board.get(8, 7), Some(Cell::Stone(Player::White)));
    assert_eq!(game.moves.len(), 2);
}

#[test]
fn move_before_opponent_joins_is_rejected() {
    let black = Uuid::new_v4();
    let mut game = GameState::new(Board::new(15, 15).unwrap(), 5, black);

    let err = apply_move(&mut game, black, 0, 0).unwrap_err();
    assert!(matches!(err, GameError::GameNotStarted));
    assert_eq!(game.board.stones(), 0);
}

#[test]
fn out_of_turn_move_is_rejected() {
    let (mut game, _black, white) = active_game(15, 15, 5);

    let err = apply_move(&mut game, white, 0, 0).unwrap_err();
    assert!(matches!(err, GameError::NotYourTurn { expected: Player::Black }));
}

#[test]
fn unseated_player_cannot_move() {
    let (mut game, _black, _white) = active_game(15, 15, 5);
    let spectator = Uuid::new_v4();
    game.spectators.insert(spectator);

    let err = apply_move(&mut game, spectator, 0, 0).unwrap_err();
    assert!(matches!(err, GameError::NotSeated(id) if id == spectator));
}

#[test]
fn occupied_cell_is_rejected_without_turn_change() {
    let (mut game, black, white) = active_game(15, 15, 5);
    apply_move(&mut game, black, 3, 3).unwrap();

    let err = apply_move(&mut game, white, 3, 3).unwrap_err();
    assert!(matches!(err, GameError::CellOccupied { x: 3, y: 3 }));
    assert_eq!(game.to_move, Player::White);
}

#[test]
fn out_of_bounds_move_is_rejected() {
    let (mut game, black, _white) = active_game(9, 9, 5);

    let err = apply_move(&mut game, black, 9, 0).unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { x: 9, y: 0 }));
    let err = apply_move(&mut game, black, 0, 42).unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { x: 0, y: 42 }));
}

#[test]
fn horizontal_run_wins() {
    let (mut game, black, white) = active_game(15, 15, 5);

    // Black builds a row at y=0, white parks on y=14.
    for x in 0..4 {
        apply_move(&mut game, black, x, 0).unwrap();
        apply_move(&mut game, white, x, 14).unwrap();
    }
    apply_move(&mut game, black, 4, 0).unwrap();

    assert_eq!(game.phase, GamePhase::Won { winner: Player::Black });
}

#[test]
fn vertical_run_wins() {
    let (mut game, black, white) = active_game(15, 15, 5);

    for y in 0..4 {
        apply_move(&mut game, black, 0, y).unwrap();
        apply_move(&mut game, white, 14, y).unwrap();
    }
    apply_move(&mut game, black, 0, 4).unwrap();

    assert_eq!(game.phase, GamePhase::Won { winner: Player::Black });
}

#[test]
fn diagonal_run_wins_for_white() {
    let (mut game, black, white) = active_game(15, 15, 5);

    // Black scatters along the top edge, white builds the main diagonal.
    for i in 0..4 {
        apply_move(&mut game, black, i + 8, 0).unwrap();
        apply_move(&mut game, white, i, i + 1).unwrap();
    }
    apply_move(&mut game, black, 14, 0).unwrap();
    apply_move(&mut game, white, 4, 5).unwrap();

    assert_eq!(game.phase, GamePhase::Won { winner: Player::White });
}

#[test]
fn anti_diagonal_run_wins() {
    let (mut game, black, white) = active_game(15, 15, 5);

    for i in 0..4 {
        apply_move(&mut game, black, i, 10 - i).unwrap();
        apply_move(&mut game, white, i, 14).unwrap();
    }
    apply_move(&mut game, black, 4, 6).unwrap();

    assert_eq!(game.phase, GamePhase::Won { winner: Player::Black });
}

#[test]
fn filling_a_gap_completes_the_run() {
    let (mut game, _black, _white) = active_game(15, 15, 5);
    for x in [0usize, 1, 3, 4] {
        game.board.set(x, 7, Cell::Stone(Player::Black)).unwrap();
    }

    assert!(!completes_run(&game.board, 3, 7, Player::Black, 5));
    game.board.set(2, 7, Cell::Stone(Player::Black)).unwrap();
    assert!(completes_run(&game.board, 2, 7, Player::Black, 5));
}

#[test]
fn four_in_a_row_is_not_a_win() {
    let (mut game, black, white) = active_game(15, 15, 5);

    for x in 0..3 {
        apply_move(&mut game, black, x, 0).unwrap();
        apply_move(&mut game, white, x, 14).unwrap();
    }
    apply_move(&mut game, black, 3, 0).unwrap();

    assert_eq!(game.phase, GamePhase::InProgress);
    assert_eq!(game.to_move, Player::White);
}

#[test]
fn full_board_without_a_run_is_a_draw() {
    let (mut game, black, _white) = active_game(3, 3, 3);

    // Hand-laid position with (2, 2) open and no three-run anywhere:
    //   B W B
    //   B W W
    //   W B .
    let layout = [
        (0, 0, Player::Black),
        (1, 0, Player::White),
        (2, 0, Player::Black),
        (0, 1, Player::Black),
        (1, 1, Player::White),
        (2, 1, Player::White),
        (0, 2, Player::White),
        (1, 2, Player::Black),
    ];
    for (x, y, player) in layout {
        game.board.set(x, y, Cell::Stone(player)).unwrap();
    }

    apply_move(&mut game, black, 2, 2).unwrap();
    assert_eq!(game.phase, GamePhase::Draw);
}

#[test]
fn no_moves_accepted_after_a_win() {
    let (mut game, black, white) = active_game(15, 15, 5);
    for x in 0..4 {
        apply_move(&mut game, black, x, 0).unwrap();
        apply_move(&mut game, white, x, 14).unwrap();
    }
    apply_move(&mut game, black, 4, 0).unwrap();

    let err = apply_move(&mut game, white, 5, 5).unwrap_err();
    assert!(matches!(err, GameError::GameOver));
}
