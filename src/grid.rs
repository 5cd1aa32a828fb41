/*!
 * The vault grid: a 4x4 board of rooms, each holding an operator or a number.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    /// Combine the running value with the next number.
    ///
    /// Values are `i64`, not arbitrary precision: `None` means the result
    /// overflowed and the search drops that walk. Within the default path
    /// limit this only happens on boards holding very large numbers.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Op(Op),
    Num(i64),
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Cell::Op(Op::Add)),
            "-" => Ok(Cell::Op(Op::Sub)),
            "*" => Ok(Cell::Op(Op::Mul)),
            n if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => n
                .parse()
                .map(Cell::Num)
                .map_err(|_| Error::BadCell(s.to_string())),
            _ => Err(Error::BadCell(s.to_string())),
        }
    }
}

/// A parsed cell along with the text it was written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub cell: Cell,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(usize, usize)")]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < SIZE && self.y < SIZE
    }

    // left, up, right, down - this order decides which path bfs finds first
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let Position { x, y } = self;
        [
            x.checked_sub(1).map(|x| Position { x, y }),
            y.checked_sub(1).map(|y| Position { x, y }),
            (x + 1 < SIZE).then(|| Position { x: x + 1, y }),
            (y + 1 < SIZE).then(|| Position { x, y: y + 1 }),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rows are indexed by `y` (top row first), columns by `x`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>")]
pub struct Board {
    rooms: [[Room; SIZE]; SIZE],
}

impl Board {
    pub fn parse<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                let rooms = row
                    .iter()
                    .map(|label| -> Result<Room> {
                        let label = label.as_ref();
                        Ok(Room { cell: label.parse()?, label: label.to_string() })
                    })
                    .collect::<Result<Vec<_>>>()?;

                <[Room; SIZE]>::try_from(rooms).map_err(|rooms| Error::Shape {
                    expected: SIZE,
                    found: format!("{} cells in row {}", rooms.len(), y),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rooms = <[[Room; SIZE]; SIZE]>::try_from(rows).map_err(|rows| Error::Shape {
            expected: SIZE,
            found: format!("{} rows", rows.len()),
        })?;

        Ok(Self { rooms })
    }

    /// The board from the vault antechamber.
    pub fn vault() -> Self {
        let rows = vec![
            vec!["*", "8", "-", "1"],
            vec!["4", "*", "11", "*"],
            vec!["+", "4", "-", "18"],
            vec!["22", "-", "9", "*"],
        ];
        Self::parse(&rows).expect("vault board is well formed")
    }

    /// Panics if `pos` is out of bounds.
    pub fn room(&self, pos: Position) -> &Room {
        &self.rooms[pos.y][pos.x]
    }
}

impl TryFrom<Vec<Vec<String>>> for Board {
    type Error = Error;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        Self::parse(&rows)
    }
}
