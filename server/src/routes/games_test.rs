use super::*;
use protocol::{GamePhase, Player};

use crate::state::test_helpers;

#[test]
fn error_mapping_not_found_is_404() {
    let (status, Json(body)) = game_error_response(&GameError::NotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "E_GAME_NOT_FOUND");
}

#[test]
fn error_mapping_ownership_violations_are_403() {
    let (status, _) = game_error_response(&GameError::NotOwner(Uuid::nil()));
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = game_error_response(&GameError::NotSeated(Uuid::nil()));
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[test]
fn error_mapping_rule_violations_are_409() {
    for err in [
        GameError::NotYourTurn { expected: Player::Black },
        GameError::GameNotStarted,
        GameError::GameOver,
        GameError::CellOccupied { x: 1, y: 1 },
    ] {
        let (status, Json(body)) = game_error_response(&err);
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.code.starts_with("E_"));
        assert!(!body.message.is_empty());
    }
}

#[test]
fn error_mapping_bad_input_is_400() {
    let (status, _) = game_error_response(&GameError::OutOfBounds { x: 99, y: 0 });
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) =
        game_error_response(&GameError::InvalidWinLen { win_len: 2, rows: 15, cols: 15 });
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_handler_returns_201_with_owner_credentials() {
    let state = AppState::new();
    let (status, Json(created)) =
        create_game(State(state), Json(CreateGameBody::default()))
            .await
            .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert!(created.is_owner);
    assert_eq!(created.stone, Player::Black);
}

#[tokio::test]
async fn snapshot_handler_personalizes_by_query_player_id() {
    let state = AppState::new();
    let (game_id, owner, _white) = test_helpers::seed_active_game(&state, 15, 15).await;

    let Json(snapshot) = get_snapshot(
        State(state.clone()),
        Path(game_id),
        Query(SnapshotQuery { player_id: Some(owner) }),
    )
    .await
    .unwrap();
    assert!(snapshot.is_owner);
    assert_eq!(snapshot.phase, GamePhase::InProgress);

    let Json(snapshot) = get_snapshot(
        State(state),
        Path(game_id),
        Query(SnapshotQuery { player_id: None }),
    )
    .await
    .unwrap();
    assert!(!snapshot.is_owner);
}

#[tokio::test]
async fn move_handler_rejects_unknown_game_with_404() {
    let state = AppState::new();
    let (status, Json(body)) = play_move(
        State(state),
        Path(Uuid::new_v4()),
        Json(MoveBody { player_id: Uuid::new_v4(), x: 0, y: 0 }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "E_GAME_NOT_FOUND");
}

#[test]
fn error_body_wire_shape() {
    let (_, Json(body)) = game_error_response(&GameError::CellOccupied { x: 3, y: 4 });
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "code": "E_CELL_OCCUPIED",
            "message": "cell (3, 4) is already occupied",
        })
    );
}

#[tokio::test]
async fn restart_handler_enforces_ownership() {
    let state = AppState::new();
    let (game_id, _owner, white) = test_helpers::seed_active_game(&state, 15, 15).await;

    let (status, Json(body)) = restart_game(
        State(state),
        Path(game_id),
        Json(PlayerBody { player_id: white }),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.code, "E_NOT_OWNER");
}
