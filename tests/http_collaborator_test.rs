//! Tests for the HTTP client against a local axum server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use broadside::{
    Board, BoardPayload, BoardQuery, Collaborator, Coord, GameId, HttpCollaborator, ScoreGrid,
    ShotReport, Snapshot, Square, SyncError,
};
use serde_json::{Value, json};

/// Request bodies the fake service received.
#[derive(Default)]
struct Received {
    shots: Mutex<Vec<Value>>,
    undos: Mutex<Vec<Value>>,
    board_queries: Mutex<Vec<String>>,
}

type Shared = Arc<Received>;

async fn new_game() -> Json<Value> {
    Json(json!({ "game_id": "g-42" }))
}

async fn board(State(received): State<Shared>, Query(query): Query<BoardQuery>) -> Json<BoardPayload> {
    received
        .board_queries
        .lock()
        .expect("Lock")
        .push(query.game_id.to_string());
    let board = Board::open(3).with(Coord::new(0, 1), Square::Miss);
    let snapshot = Snapshot::new(board, ScoreGrid::uniform(3, 4.0)).expect("Square shapes");
    Json(BoardPayload::from(&snapshot))
}

async fn shoot(State(received): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    received.shots.lock().expect("Lock").push(body);
    Json(json!({ "message": "recorded", "scores_version": 7 }))
}

async fn undo(State(received): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    received.undos.lock().expect("Lock").push(body);
    Json(json!({}))
}

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind");
    let addr = listener.local_addr().expect("Local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Serve");
    });
    format!("http://{addr}")
}

async fn happy_service() -> (HttpCollaborator, Shared) {
    let received = Shared::default();
    let router = Router::new()
        .route("/new_game", post(new_game))
        .route("/board", get(board))
        .route("/shoot", post(shoot))
        .route("/undo", post(undo))
        .with_state(Arc::clone(&received));
    let url = serve(router).await;
    let client = HttpCollaborator::new(format!("{url}/"), Duration::from_secs(5)).expect("Client");
    (client, received)
}

fn game() -> GameId {
    GameId::from("g-42")
}

#[tokio::test]
async fn test_create_game_and_fetch_board() {
    let (client, received) = happy_service().await;
    assert!(!client.base_url().ends_with('/'));

    let game_id = client.create_game().await.expect("Game created");
    assert_eq!(game_id, game());

    let snapshot = client.get_board(&game_id).await.expect("Board fetched");
    assert_eq!(snapshot.size(), 3);
    assert_eq!(snapshot.board().get(Coord::new(0, 1)), Some(Square::Miss));
    assert_eq!(snapshot.scores().get(Coord::new(2, 2)), Some(4.0));
    assert_eq!(*received.board_queries.lock().expect("Lock"), vec!["g-42".to_string()]);
}

#[tokio::test]
async fn test_shot_bodies() {
    let (client, received) = happy_service().await;

    let ack = client
        .record_shot(&game(), &ShotReport::missed(Coord::new(3, 4)))
        .await
        .expect("Miss recorded");
    assert_eq!(ack.message.as_deref(), Some("recorded"));

    client
        .record_shot(&game(), &ShotReport::hit_afloat(Coord::new(5, 5)))
        .await
        .expect("Hit recorded");
    client
        .record_shot(
            &game(),
            &ShotReport::hit_and_sunk(Coord::new(1, 1), vec![Coord::new(1, 1), Coord::new(1, 2)]),
        )
        .await
        .expect("Sunk recorded");

    let shots = received.shots.lock().expect("Lock").clone();
    assert_eq!(
        shots[0],
        json!({ "game_id": "g-42", "coords": [3, 4], "hit": false })
    );
    assert_eq!(
        shots[1],
        json!({ "game_id": "g-42", "coords": [5, 5], "hit": true, "sunk": false })
    );
    assert_eq!(
        shots[2],
        json!({
            "game_id": "g-42",
            "coords": [1, 1],
            "hit": true,
            "sunk": true,
            "sunk_coords": [[1, 1], [1, 2]]
        })
    );
}

#[tokio::test]
async fn test_undo_body() {
    let (client, received) = happy_service().await;

    let ack = client.undo_last_shot(&game()).await.expect("Undone");
    assert_eq!(ack.notice(), None);
    assert_eq!(
        received.undos.lock().expect("Lock").clone(),
        vec![json!({ "game_id": "g-42" })]
    );
}

#[tokio::test]
async fn test_error_body_is_a_rejection_not_a_failure() {
    let router = Router::new().route(
        "/shoot",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "square already shot" })),
            )
        }),
    );
    let url = serve(router).await;
    let client = HttpCollaborator::new(url, Duration::from_secs(5)).expect("Client");

    let ack = client
        .record_shot(&game(), &ShotReport::missed(Coord::new(0, 0)))
        .await
        .expect("Rejection is an acknowledgement");
    assert_eq!(ack.error.as_deref(), Some("square already shot"));
}

#[tokio::test]
async fn test_server_error_without_body() {
    let router = Router::new()
        .route(
            "/undo",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database locked") }),
        )
        .route(
            "/board",
            get(|| async { (StatusCode::NOT_FOUND, "no such game") }),
        );
    let url = serve(router).await;
    let client = HttpCollaborator::new(url, Duration::from_secs(5)).expect("Client");

    let err = client.undo_last_shot(&game()).await.expect_err("500");
    assert_eq!(
        err,
        SyncError::Status {
            code: 500,
            body: "database locked".to_string()
        }
    );

    let err = client.get_board(&game()).await.expect_err("404");
    assert!(matches!(err, SyncError::Status { code: 404, .. }));
}

#[tokio::test]
async fn test_bad_board_payloads_are_malformed() {
    let router = Router::new()
        .route(
            "/board",
            get(|| async {
                Json(json!({
                    "grid": [[{ "shot": false, "hit": false, "sunk": false }]],
                    "scores": [[1.0, 2.0]]
                }))
            }),
        )
        .route(
            "/new_game",
            post(|| async { Json(json!({ "id": "missing-field" })) }),
        );
    let url = serve(router).await;
    let client = HttpCollaborator::new(url, Duration::from_secs(5)).expect("Client");

    let err = client.get_board(&game()).await.expect_err("Ragged scores");
    assert!(err.is_malformed());

    let err = client.create_game().await.expect_err("No game_id");
    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_inconsistent_square_flags_are_malformed() {
    let router = Router::new().route(
        "/board",
        get(|| async {
            Json(json!({
                "grid": [[{ "shot": false, "hit": true, "sunk": false }]],
                "scores": [[1.0]]
            }))
        }),
    );
    let url = serve(router).await;
    let client = HttpCollaborator::new(url, Duration::from_secs(5)).expect("Client");

    let err = client.get_board(&game()).await.expect_err("Hit without shot");
    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind");
    let addr = listener.local_addr().expect("Local addr");
    drop(listener);

    let client =
        HttpCollaborator::new(format!("http://{addr}"), Duration::from_secs(5)).expect("Client");
    let err = client.get_board(&game()).await.expect_err("Nothing listening");
    assert!(matches!(err, SyncError::Transport(_)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let router = Router::new().route(
        "/board",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let url = serve(router).await;
    let client = HttpCollaborator::new(url, Duration::from_millis(200)).expect("Client");

    let err = client.get_board(&game()).await.expect_err("Timed out");
    assert!(matches!(err, SyncError::Transport(_)));
}

#[test]
fn test_base_url_accepts_str_or_string() {
    let from_str = HttpCollaborator::new("http://127.0.0.1:5000/", Duration::from_secs(1))
        .expect("Client");
    assert_eq!(from_str.base_url(), "http://127.0.0.1:5000");

    let from_string =
        HttpCollaborator::new(String::from("http://127.0.0.1:5000"), Duration::from_secs(1))
            .expect("Client");
    assert_eq!(from_string.base_url(), "http://127.0.0.1:5000");
}
