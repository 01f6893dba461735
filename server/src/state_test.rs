use super::*;

fn sample_game() -> GameState {
    let board = Board::new(15, 15).unwrap();
    GameState::new(board, 5, Uuid::new_v4())
}

#[test]
fn new_game_waits_for_opponent_with_owner_on_black() {
    let game = sample_game();
    assert_eq!(game.phase, GamePhase::WaitingForOpponent);
    assert_eq!(game.black, game.owner);
    assert!(game.white.is_none());
    assert_eq!(game.to_move, Player::Black);
    assert_eq!(game.revision, 0);
    assert!(game.moves.is_empty());
}

#[test]
fn seat_of_resolves_both_colors() {
    let mut game = sample_game();
    let white = Uuid::new_v4();
    game.white = Some(white);

    assert_eq!(game.seat_of(game.owner), Some(Player::Black));
    assert_eq!(game.seat_of(white), Some(Player::White));
    assert_eq!(game.seat_of(Uuid::new_v4()), None);
}

#[test]
fn knows_covers_seats_and_spectators() {
    let mut game = sample_game();
    let spectator = Uuid::new_v4();
    game.spectators.insert(spectator);

    assert!(game.knows(game.owner));
    assert!(game.knows(spectator));
    assert!(!game.knows(Uuid::new_v4()));
}

#[test]
fn bump_increments_revision_monotonically() {
    let mut game = sample_game();
    game.bump();
    game.bump();
    assert_eq!(game.revision, 2);
}

#[tokio::test]
async fn app_state_starts_with_no_games() {
    let state = AppState::new();
    assert!(state.games.read().await.is_empty());
}

#[tokio::test]
async fn seed_active_game_is_in_progress() {
    let state = AppState::new();
    let (game_id, black, white) = test_helpers::seed_active_game(&state, 9, 9).await;

    let games = state.games.read().await;
    let game = games.get(&game_id).unwrap();
    assert_eq!(game.phase, GamePhase::InProgress);
    assert_eq!(game.seat_of(black), Some(Player::Black));
    assert_eq!(game.seat_of(white), Some(Player::White));
}
