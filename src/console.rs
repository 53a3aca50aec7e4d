//! Line-mode console: side-by-side rendering of both grids and move parsing.

use std::fmt::{self, Write};

use crate::cell::Cell;
use crate::grid::Grid;

/// Column labels, left to right.
pub const COLUMN_LABELS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Number of row labels, `1..=ROW_LABELS`.
pub const ROW_LABELS: usize = 10;

const FIELDS_SEP: &str = "   #   ";

/// Errors from [`parse_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Input is not exactly two tokens.
    WrongFormat,
    /// Row token is not one of the row labels.
    UnknownRow(String),
    /// Column token is not one of the column labels.
    UnknownColumn(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::WrongFormat => write!(f, "Expected '<row> <column>', e.g. '5 J'"),
            CommandError::UnknownRow(r) => {
                write!(f, "Unknown row '{}' - must be 1-{}", r, ROW_LABELS)
            }
            CommandError::UnknownColumn(c) => write!(
                f,
                "Unknown column '{}' - must be {}-{}",
                c,
                COLUMN_LABELS[0],
                COLUMN_LABELS[COLUMN_LABELS.len() - 1]
            ),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a move such as `"5 J"` into zero-based `(x, y)`.
pub fn parse_command(input: &str) -> Result<(usize, usize), CommandError> {
    let mut tokens = input.split_whitespace();
    let (row, col) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err(CommandError::WrongFormat),
    };

    let y = row
        .parse::<usize>()
        .ok()
        .filter(|r| (1..=ROW_LABELS).contains(r))
        .map(|r| r - 1)
        .ok_or_else(|| CommandError::UnknownRow(row.to_string()))?;

    let mut chars = col.chars();
    let x = match (chars.next(), chars.next()) {
        (Some(ch), None) => COLUMN_LABELS
            .iter()
            .position(|&label| label == ch.to_ascii_uppercase()),
        _ => None,
    }
    .ok_or_else(|| CommandError::UnknownColumn(col.to_string()))?;

    Ok((x, y))
}

/// Glyph for one cell. Plain ship cells only ever exist on our own grid.
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Destroyed => 'x',
        Cell::Damaged => '+',
        Cell::Miss => '.',
        Cell::Ship => '&',
        Cell::Empty => ' ',
    }
}

fn render_row(out: &mut String, label: usize, row: &[Cell]) {
    let _ = write!(out, "{:>2} |", label);
    for &cell in row {
        out.push(cell_glyph(cell));
        out.push('|');
    }
}

/// Render our grid and the opponent view side by side.
pub fn render_fields(own: &Grid, enemy: &Grid) -> String {
    let mut out = String::new();
    // a row is N cells, N-1 inner separators and two outer ones
    let row_width = own.width() * 2 + 1;
    let _ = writeln!(
        out,
        "   {:^w$}{}   {:^w$}",
        "Your fleet",
        FIELDS_SEP,
        "Opponent",
        w = row_width
    );

    let labels: Vec<String> = (0..own.width())
        .map(|x| COLUMN_LABELS.get(x).copied().unwrap_or('?').to_string())
        .collect();
    let header = format!("    {} ", labels.join(" "));
    let _ = writeln!(out, "{}{}{}", header, FIELDS_SEP, header);

    for (y, (own_row, enemy_row)) in own.rows().zip(enemy.rows()).enumerate() {
        render_row(&mut out, y + 1, own_row);
        out.push_str(FIELDS_SEP);
        render_row(&mut out, y + 1, enemy_row);
        out.push('\n');
    }
    out
}
