/*!
 * Find a walk across the vault antechamber grid that leaves the orb
 * reading the right number at the vault door.
 *
 * Author: Dave Eddy <ysap@daveeddy.com>
 * Date: December 21, 2025
 * License: MIT
 */

mod error;
mod grid;
mod puzzle;
mod search;

use log::{debug, info};
use puzzle::Puzzle;
use std::env;
use std::io::Write;
use std::process::ExitCode;

fn run(file: Option<&str>) -> error::Result<Option<Vec<String>>> {
    let puzzle = match file {
        Some(file) => {
            info!("loading puzzle from {}", file);
            Puzzle::load(file)?
        }
        None => Puzzle::vault(),
    };

    info!(
        "walking from {} to {} looking for {}",
        puzzle.start, puzzle.end, puzzle.target
    );

    let mut bfs = puzzle.search();
    let found = bfs.run()?;

    let stats = bfs.stats();
    debug!(
        "expanded {} states, frontier peaked at {}",
        stats.expanded, stats.peak_frontier
    );

    if let Some(path) = &found {
        debug!("path evaluates to {}", search::evaluate(path)?);
    }

    Ok(found)
}

fn main() -> ExitCode {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "> {}", record.args()))
        .init();

    let args: Vec<_> = env::args().skip(1).collect();

    match run(args.first().map(String::as_str)) {
        Ok(Some(path)) => {
            println!("{:?}", path);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("no path found");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
