/*!
 * A puzzle is a board plus where to start, where to end and what the orb
 * should read when it gets there.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

use crate::error::Result;
use crate::grid::{Board, Position};
use crate::search::{DEFAULT_MAX_PATH_LEN, PathSearch, SearchOptions};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Puzzle {
    pub board: Board,
    pub start: Position,
    pub end: Position,
    pub target: i64,
    /// Left out means the default limit, `null` means no limit at all.
    #[serde(default = "default_max_path_len")]
    pub max_path_len: Option<usize>,
    #[serde(default = "default_dedup")]
    pub dedup: bool,
}

fn default_max_path_len() -> Option<usize> {
    Some(DEFAULT_MAX_PATH_LEN)
}

fn default_dedup() -> bool {
    SearchOptions::default().dedup
}

impl Puzzle {
    /// The orb puzzle guarding the vault door.
    pub fn vault() -> Self {
        Self {
            board: Board::vault(),
            start: Position::new(0, 3),
            end: Position::new(3, 0),
            target: 30,
            max_path_len: default_max_path_len(),
            dedup: default_dedup(),
        }
    }

    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(file)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions { max_path_len: self.max_path_len, dedup: self.dedup }
    }

    pub fn search(&self) -> PathSearch<'_> {
        PathSearch::new(&self.board, self.start, self.end, self.target)
            .with_options(self.options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn bundled_vault_file() {
        let puzzle: Puzzle = serde_json::from_str(include_str!("../puzzles/vault.json")).unwrap();
        assert_eq!(puzzle, Puzzle::vault());
    }

    #[test]
    fn load_from_disk() {
        let file = concat!(env!("CARGO_MANIFEST_DIR"), "/puzzles/vault.json");
        assert_eq!(Puzzle::load(file).unwrap(), Puzzle::vault());

        let err = Puzzle::load("puzzles/does-not-exist.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn optional_search_settings() {
        let json = r#"{
            "board": [
                ["*", "8", "-", "1"],
                ["4", "*", "11", "*"],
                ["+", "4", "-", "18"],
                ["22", "-", "9", "*"]
            ],
            "start": [0, 3],
            "end": [3, 0],
            "target": 30,
            "max_path_len": 12,
            "dedup": true
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.options(), SearchOptions { max_path_len: Some(12), dedup: true });
        assert_eq!(puzzle.search().run().unwrap(), None);
    }

    #[test]
    fn search_limits_from_json() {
        let board = r#"[
            ["2", "+", "2", "+"],
            ["+", "2", "+", "2"],
            ["2", "+", "2", "+"],
            ["+", "2", "+", "2"]
        ]"#;

        let json = format!(
            r#"{{"board": {}, "start": [0, 3], "end": [3, 0], "target": 3}}"#,
            board
        );
        let puzzle: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(puzzle.options(), SearchOptions::default());
        // every value on this board is even
        assert_eq!(puzzle.search().run().unwrap(), None);

        let json = format!(
            r#"{{"board": {}, "start": [0, 3], "end": [3, 0], "target": 3,
                "max_path_len": null, "dedup": false}}"#,
            board
        );
        let puzzle: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(puzzle.options(), SearchOptions::unbounded());
    }

    #[test]
    fn bad_board_in_json() {
        let json = r#"{
            "board": [["+", "1"], ["2", "-"]],
            "start": [0, 0],
            "end": [1, 1],
            "target": 3
        }"#;
        let err = serde_json::from_str::<Puzzle>(json).unwrap_err();
        assert!(err.to_string().contains("board must be 4x4"), "{}", err);

        let json = r#"{
            "board": [
                ["*", "8", "-", "1"],
                ["4", "*", "11", "*"],
                ["+", "4", "/", "18"],
                ["22", "-", "9", "*"]
            ],
            "start": [0, 3],
            "end": [3, 0],
            "target": 30
        }"#;
        let err = serde_json::from_str::<Puzzle>(json).unwrap_err();
        assert!(err.to_string().contains("bad cell \"/\""), "{}", err);
    }

    #[test]
    fn vault_search_from_puzzle() {
        let path = Puzzle::vault().search().run().unwrap().unwrap();
        assert_eq!(path.len(), 13);
        assert_eq!(path.last().map(String::as_str), Some("1"));
    }
}
