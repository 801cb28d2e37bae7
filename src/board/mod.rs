mod heat;
mod model;
mod types;

pub use heat::{MAX_SCORE, clamp_score, heat_color};
pub use model::{BoardModel, ShapeError, Snapshot};
pub use types::{Board, Coord, InvalidSquare, ScoreGrid, Square, SquareFlags};
