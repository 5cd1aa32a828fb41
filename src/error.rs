/*!
 * Everything that can go wrong while loading or walking a puzzle.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::grid::Position;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse puzzle: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board must be {expected}x{expected}, found {found}")]
    Shape { expected: usize, found: String },
    #[error("bad cell {0:?}: expected one of + - * or a number")]
    BadCell(String),
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("cell {found:?} at {pos}: expected {expected}")]
    UnexpectedCell {
        pos: Position,
        expected: &'static str,
        found: String,
    },
    #[error("path breaks alternation at step {index} ({found:?})")]
    Alternation { index: usize, found: String },
    #[error("path overflows at step {0}")]
    Overflow(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
