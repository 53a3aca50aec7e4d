use seabattle::console::{cell_glyph, parse_command, render_fields, CommandError};
use seabattle::{Cell, Grid};

#[test]
fn parse_valid_commands() {
    assert_eq!(parse_command("1 A"), Ok((0, 0)));
    assert_eq!(parse_command("5 J"), Ok((9, 4)));
    assert_eq!(parse_command("5 j"), Ok((9, 4)));
    assert_eq!(parse_command("  10   c \n"), Ok((2, 9)));
}

#[test]
fn parse_invalid_commands() {
    assert_eq!(parse_command(""), Err(CommandError::WrongFormat));
    assert_eq!(parse_command("5"), Err(CommandError::WrongFormat));
    assert_eq!(parse_command("5 J 1"), Err(CommandError::WrongFormat));
    assert_eq!(
        parse_command("0 A"),
        Err(CommandError::UnknownRow("0".to_string()))
    );
    assert_eq!(
        parse_command("11 A"),
        Err(CommandError::UnknownRow("11".to_string()))
    );
    assert_eq!(
        parse_command("J 5"),
        Err(CommandError::UnknownRow("J".to_string()))
    );
    assert_eq!(
        parse_command("5 K"),
        Err(CommandError::UnknownColumn("K".to_string()))
    );
    assert_eq!(
        parse_command("5 AB"),
        Err(CommandError::UnknownColumn("AB".to_string()))
    );
}

#[test]
fn glyphs() {
    assert_eq!(cell_glyph(Cell::Empty), ' ');
    assert_eq!(cell_glyph(Cell::Ship), '&');
    assert_eq!(cell_glyph(Cell::Miss), '.');
    assert_eq!(cell_glyph(Cell::Damaged), '+');
    assert_eq!(cell_glyph(Cell::Destroyed), 'x');
}

#[test]
fn render_side_by_side() {
    let mut own = Grid::new(10, 10);
    own.place_ship(0, 0, 2, 0).unwrap();
    own.upgrade(1, 0, Cell::Damaged).unwrap();
    let mut enemy = Grid::new(10, 10);
    enemy.upgrade(9, 9, Cell::Miss).unwrap();

    let text = render_fields(&own, &enemy);
    let lines: Vec<&str> = text.lines().collect();
    // title, header and one line per row
    assert_eq!(lines.len(), 12);
    assert!(lines[0].contains("Your fleet"));
    assert!(lines[0].contains("Opponent"));
    assert_eq!(lines[1].matches("A B C D E F G H I J").count(), 2);
    assert!(lines[2].starts_with(" 1 |&|+|&| | | | | | | |"));
    assert!(lines[11].starts_with("10 | | | | | | | | | | |"));
    assert!(lines[11].ends_with("10 | | | | | | | | | |.|"));
}
