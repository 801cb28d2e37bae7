//! Tests for the board model and its wire shape.

use broadside::{
    Board, BoardModel, BoardPayload, Coord, ScoreGrid, ShapeError, Snapshot, Square, SyncError,
};

fn snapshot(board: Board, scores: ScoreGrid) -> Snapshot {
    Snapshot::new(board, scores).expect("Square shapes")
}

#[test]
fn test_snapshot_rejects_mismatched_shapes() {
    assert_eq!(
        Snapshot::new(Board::new(Vec::new()), ScoreGrid::new(Vec::new())),
        Err(ShapeError::Empty)
    );

    let ragged = Board::new(vec![vec![Square::Open; 3], vec![Square::Open; 2], vec![Square::Open; 3]]);
    assert_eq!(
        Snapshot::new(ragged, ScoreGrid::uniform(3, 1.0)),
        Err(ShapeError::RaggedBoard {
            row: 1,
            len: 2,
            size: 3
        })
    );

    assert_eq!(
        Snapshot::new(Board::open(3), ScoreGrid::uniform(2, 1.0)),
        Err(ShapeError::ScoreRows { rows: 2, size: 3 })
    );

    let ragged_scores = ScoreGrid::new(vec![vec![1.0; 3], vec![1.0; 3], vec![1.0; 4]]);
    assert_eq!(
        Snapshot::new(Board::open(3), ragged_scores),
        Err(ShapeError::RaggedScores {
            row: 2,
            len: 4,
            size: 3
        })
    );
}

#[test]
fn test_replace_reports_changes_only() {
    let first = snapshot(Board::open(4), ScoreGrid::uniform(4, 2.0));
    let mut model = BoardModel::new(first.clone());

    assert!(!model.replace(first));

    let shot = Board::open(4).with(Coord::new(1, 2), Square::Miss);
    assert!(model.replace(snapshot(shot, ScoreGrid::uniform(4, 2.0))));
    assert_eq!(model.square(Coord::new(1, 2)), Some(Square::Miss));
}

#[test]
fn test_board_and_scores_replaced_together() {
    let mut model = BoardModel::new(snapshot(Board::open(3), ScoreGrid::uniform(3, 0.0)));

    let board = Board::open(3).with(Coord::new(0, 0), Square::Hit);
    let scores = ScoreGrid::uniform(3, 7.0);
    model.replace(snapshot(board.clone(), scores.clone()));

    assert_eq!(model.board(), &board);
    assert_eq!(model.scores(), &scores);
    assert_eq!(model.score(Coord::new(2, 2)), Some(7.0));
}

#[test]
fn test_lookups_outside_the_board() {
    let model = BoardModel::new(snapshot(Board::open(3), ScoreGrid::uniform(3, 1.0)));

    assert_eq!(model.size(), 3);
    assert!(model.contains(Coord::new(2, 2)));
    assert!(!model.contains(Coord::new(3, 0)));
    assert!(!model.is_unshot(Coord::new(0, 3)));
    assert_eq!(model.square(Coord::new(5, 5)), None);
    assert_eq!(model.score(Coord::new(5, 5)), None);
}

#[test]
fn test_has_any_shot() {
    let model = BoardModel::new(snapshot(Board::open(3), ScoreGrid::uniform(3, 1.0)));
    assert!(!model.has_any_shot());

    let board = Board::open(3).with(Coord::new(2, 1), Square::Miss);
    let model = BoardModel::new(snapshot(board, ScoreGrid::uniform(3, 1.0)));
    assert!(model.has_any_shot());
    assert!(!model.is_unshot(Coord::new(2, 1)));
    assert!(model.is_unshot(Coord::new(1, 2)));
}

#[test]
fn test_payload_decodes_flags_and_coords() {
    let json = r#"{
        "grid": [
            [{"shot": false, "hit": false, "sunk": false}, {"shot": true, "hit": false, "sunk": false}],
            [{"shot": true, "hit": true, "sunk": false}, {"shot": true, "hit": true, "sunk": true}]
        ],
        "scores": [[3.5, 0], [0, 0]]
    }"#;

    let payload: BoardPayload = serde_json::from_str(json).expect("Valid payload");
    let snapshot = Snapshot::try_from(payload).expect("Square payload");

    assert_eq!(snapshot.board().get(Coord::new(0, 0)), Some(Square::Open));
    assert_eq!(snapshot.board().get(Coord::new(0, 1)), Some(Square::Miss));
    assert_eq!(snapshot.board().get(Coord::new(1, 0)), Some(Square::Hit));
    assert_eq!(snapshot.board().get(Coord::new(1, 1)), Some(Square::Sunk));
    assert_eq!(snapshot.scores().get(Coord::new(0, 0)), Some(3.5));

    let coord: Coord = serde_json::from_str("[4, 7]").expect("Coord array");
    assert_eq!(coord, Coord::new(4, 7));
    assert_eq!(serde_json::to_string(&coord).expect("Serializes"), "[4,7]");
}

#[test]
fn test_inconsistent_flags_rejected() {
    let hit_unshot = r#"{"shot": false, "hit": true, "sunk": false}"#;
    assert!(serde_json::from_str::<Square>(hit_unshot).is_err());

    let sunk_miss = r#"{"shot": true, "hit": false, "sunk": true}"#;
    assert!(serde_json::from_str::<Square>(sunk_miss).is_err());
}

#[test]
fn test_ragged_payload_is_malformed() {
    let json = r#"{
        "grid": [[{"shot": false, "hit": false, "sunk": false}]],
        "scores": [[1.0], [2.0]]
    }"#;
    let payload: BoardPayload = serde_json::from_str(json).expect("Parses");

    let err = Snapshot::try_from(payload).expect_err("Shapes differ");
    assert!(err.is_malformed());
    assert!(matches!(err, SyncError::Malformed(_)));
}
