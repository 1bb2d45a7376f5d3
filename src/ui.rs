//! Text rendering and input parsing for terminal front ends.

use std::fmt::Write;

use crate::{
    common::{GameError, ShotOutcome, Side},
    config::GRID_SIZE,
    game::{GameSnapshot, Phase, ShotRecord, ShotReport},
    grid::{Cell, Grid},
};

/// Format a coordinate as column letter plus 1-based row, e.g. `(4, 0)` → `A5`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse a coordinate such as `A5` or `j10` into zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

/// Render a grid with column letters and row numbers. With `reveal` unset,
/// unrevealed ship segments are drawn as water.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in grid.rows().iter().enumerate() {
        let _ = write!(out, "  {:2}", r + 1);
        for &cell in row {
            let ch = match cell {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Occupied if reveal => 'S',
                Cell::Occupied | Cell::Empty => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Render the player's shot history, oldest first.
pub fn render_shot_log(shots: &[ShotRecord]) -> String {
    let mut out = String::from("Your shots:");
    if shots.is_empty() {
        out.push_str(" none");
    }
    for shot in shots {
        let mark = match shot.outcome {
            ShotOutcome::Hit => 'X',
            ShotOutcome::Miss => 'o',
        };
        let _ = write!(out, " {}={}", coord_to_string(shot.row, shot.col), mark);
    }
    out.push('\n');
    out
}

/// Render both boards, the shot log, and the session score.
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    out.push_str("Computer board:\n");
    out.push_str(&render_grid(&snapshot.computer_grid, false));
    out.push_str("\nYour board:\n");
    out.push_str(&render_grid(&snapshot.player_grid, true));
    if snapshot.phase != Phase::Placing {
        out.push('\n');
        out.push_str(&render_shot_log(&snapshot.shots));
    }
    let _ = writeln!(
        out,
        "Games won - You: {}  Computer: {}",
        snapshot.wins.player, snapshot.wins.computer
    );
    out
}

/// One-line announcement for a resolved shot.
pub fn describe_shot(report: &ShotReport) -> String {
    let at = coord_to_string(report.row, report.col);
    let mut line = match (report.side, report.outcome) {
        (Side::Player, ShotOutcome::Hit) => format!("{}: You hit a ship!", at),
        (Side::Player, ShotOutcome::Miss) => format!("{}: Splash, water.", at),
        (Side::Computer, ShotOutcome::Hit) => format!("{}: The computer hit your ship!", at),
        (Side::Computer, ShotOutcome::Miss) => format!("{}: The computer hit water.", at),
    };
    match report.winner {
        Some(Side::Player) => line.push_str("\nCongratulations! You won the game."),
        Some(Side::Computer) => line.push_str("\nThe computer won the game."),
        None => {}
    }
    line
}

/// Player-facing explanation of a rejected command.
pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::Overlap => "Ships cannot overlap. Choose another position.".to_string(),
        GameError::OutOfBounds => "Not enough room for the ship in that direction.".to_string(),
        GameError::AlreadyRevealed { row, col } => {
            format!("You already fired at {}.", coord_to_string(*row, *col))
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coord_accepts_corners() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("j10"), Ok((9, 9)));
        assert_eq!(parse_coord(" c4 "), Ok((3, 2)));
    }

    #[test]
    fn parse_coord_rejects_garbage() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
    }

    #[test]
    fn coord_round_trips_through_text() {
        assert_eq!(coord_to_string(4, 0), "A5");
        assert_eq!(parse_coord(&coord_to_string(7, 3)), Ok((7, 3)));
    }
}
