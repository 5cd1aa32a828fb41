/*!
 * Breadth-first walk of the vault grid, carrying the orb's running value
 * along with whatever operator is waiting for its next number.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::error::{Error, Result};
use crate::grid::{Board, Cell, Op, Position, SIZE};
use log::{debug, info, trace};
use std::collections::{HashSet, VecDeque};

/// Longest path explored unless a puzzle asks for something else.
pub const DEFAULT_MAX_PATH_LEN: usize = SIZE * SIZE;

/// The defaults always let the frontier drain, so an unsolvable puzzle ends
/// with `Ok(None)`. `unbounded()` walks the grid with neither limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop expanding states once their path is this long.
    pub max_path_len: Option<usize>,
    /// Skip states whose (position, pending, value) was already queued.
    /// This never changes which path is found first.
    pub dedup: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_path_len: Some(DEFAULT_MAX_PATH_LEN), dedup: true }
    }
}

impl SearchOptions {
    pub fn unbounded() -> Self {
        Self { max_path_len: None, dedup: false }
    }
}

/// One entry in the frontier: where the orb is about to step and what it is
/// carrying from the rooms behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub pos: Position,
    pub pending: Option<Op>,
    pub value: i64,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub expanded: usize,
    pub peak_frontier: usize,
}

pub struct PathSearch<'a> {
    board: &'a Board,
    start: Position,
    end: Position,
    target: i64,
    options: SearchOptions,
    stats: Stats,
}

// a number in the first room is read as `0 + n`
fn seed(cell: Cell) -> Option<Op> {
    match cell {
        Cell::Num(_) => Some(Op::Add),
        Cell::Op(_) => None,
    }
}

impl<'a> PathSearch<'a> {
    pub fn new(board: &'a Board, start: Position, end: Position, target: i64) -> Self {
        Self {
            board,
            start,
            end,
            target,
            options: SearchOptions::default(),
            stats: Stats::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Find the first path (in bfs order) from start to end whose rooms
    /// evaluate to the target. `Ok(None)` means the frontier ran dry.
    pub fn run(&mut self) -> Result<Option<Vec<String>>> {
        for pos in [self.start, self.end] {
            if !pos.in_bounds() {
                return Err(Error::OutOfBounds(pos));
            }
        }

        self.stats = Stats::default();

        let initial = SearchState {
            pos: self.start,
            pending: seed(self.board.room(self.start).cell),
            value: 0,
            path: vec![],
        };

        let mut seen = HashSet::new();
        if self.options.dedup {
            seen.insert((initial.pos, initial.pending, initial.value));
        }

        let mut queue = VecDeque::new();
        queue.push_back(initial);

        while let Some(state) = queue.pop_front() {
            let SearchState { pos, mut pending, mut value, mut path } = state;

            // walking back into the first room is never allowed
            if pos == self.start && !path.is_empty() {
                continue;
            }

            self.stats.expanded += 1;
            trace!("bfs: {} pending={:?} value={} path={:?}", pos, pending, value, path);

            let room = self.board.room(pos);
            match (pending, room.cell) {
                (None, Cell::Op(op)) => pending = Some(op),
                (Some(op), Cell::Num(n)) => {
                    let Some(v) = op.apply(value, n) else {
                        debug!("dropping {:?} at {}: {:?} {} overflows", path, pos, op, n);
                        continue;
                    };
                    value = v;
                    pending = None;
                }
                (None, Cell::Num(_)) => {
                    return Err(Error::UnexpectedCell {
                        pos,
                        expected: "an operator",
                        found: room.label.clone(),
                    });
                }
                (Some(_), Cell::Op(_)) => {
                    return Err(Error::UnexpectedCell {
                        pos,
                        expected: "a number",
                        found: room.label.clone(),
                    });
                }
            }
            path.push(room.label.clone());

            if pos == self.end && value == self.target {
                info!(
                    "found a path of {} rooms after expanding {} states",
                    path.len(),
                    self.stats.expanded
                );
                return Ok(Some(path));
            }

            if self.options.max_path_len.is_some_and(|max| path.len() >= max) {
                continue;
            }

            for next in pos.neighbors() {
                if self.options.dedup && !seen.insert((next, pending, value)) {
                    continue;
                }
                queue.push_back(SearchState { pos: next, pending, value, path: path.clone() });
            }

            self.stats.peak_frontier = self.stats.peak_frontier.max(queue.len());
        }

        info!("frontier exhausted after expanding {} states", self.stats.expanded);
        Ok(None)
    }
}

/// Evaluate an alternating operator/number path left to right, reading a
/// leading number as `0 + n` the same way the search does.
pub fn evaluate<S: AsRef<str>>(path: &[S]) -> Result<i64> {
    let mut value = 0;
    let mut pending = None;

    for (i, label) in path.iter().enumerate() {
        let label = label.as_ref();
        let cell: Cell = label.parse()?;
        if i == 0 {
            pending = seed(cell);
        }

        match (pending, cell) {
            (None, Cell::Op(op)) => pending = Some(op),
            (Some(op), Cell::Num(n)) => {
                value = op.apply(value, n).ok_or(Error::Overflow(i))?;
                pending = None;
            }
            (None, Cell::Num(_)) | (Some(_), Cell::Op(_)) => {
                return Err(Error::Alternation { index: i, found: label.to_string() });
            }
        }
    }

    Ok(value)
}
