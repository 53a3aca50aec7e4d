use seabattle::{BoardError, Cell, CellFlag, Grid};

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new(4, 3);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert!(grid.cells().all(|(_, _, c)| c.is_empty()));
    assert_eq!(grid.as_slice().len(), 12);
}

#[test]
fn bounds() {
    let grid = Grid::new(4, 3);
    assert!(grid.in_bounds(3, 2));
    assert!(!grid.in_bounds(4, 0));
    assert!(!grid.in_bounds(0, 3));
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.cell(0, 3), Err(BoardError::OutOfBounds { x: 0, y: 3 }));
}

#[test]
fn place_ship_stamps_rectangle() {
    let mut grid = Grid::new(5, 4);
    grid.place_ship(1, 1, 2, 1).unwrap();
    grid.place_ship(4, 0, 4, 3).unwrap();
    assert_eq!(grid.count(CellFlag::Ship), 6);
    assert_eq!(grid.get(1, 1), Some(Cell::Ship));
    assert_eq!(grid.get(2, 1), Some(Cell::Ship));
    assert_eq!(grid.get(3, 1), Some(Cell::Empty));
    for y in 0..4 {
        assert_eq!(grid.get(4, y), Some(Cell::Ship));
    }
}

#[test]
fn place_ship_rejects_bad_rectangles() {
    let mut grid = Grid::new(5, 4);
    assert!(matches!(
        grid.place_ship(0, 0, 1, 1),
        Err(BoardError::InvalidShipRect { .. })
    ));
    assert!(matches!(
        grid.place_ship(2, 0, 1, 0),
        Err(BoardError::InvalidShipRect { .. })
    ));
    assert!(matches!(
        grid.place_ship(3, 0, 5, 0),
        Err(BoardError::InvalidShipRect { .. })
    ));
    assert_eq!(grid.count(CellFlag::Ship), 0);
}

#[test]
fn row_and_column_traversal() {
    let mut grid = Grid::new(3, 2);
    // ■ · ·
    // · · o
    grid.upgrade(0, 0, Cell::Ship).unwrap();
    grid.upgrade(2, 1, Cell::Miss).unwrap();

    let rows: Vec<Vec<Cell>> = grid.rows().map(|r| r.to_vec()).collect();
    assert_eq!(
        rows,
        vec![
            vec![Cell::Ship, Cell::Empty, Cell::Empty],
            vec![Cell::Empty, Cell::Empty, Cell::Miss],
        ]
    );

    let columns: Vec<Vec<Cell>> = grid.columns().map(|c| c.collect()).collect();
    assert_eq!(
        columns,
        vec![
            vec![Cell::Ship, Cell::Empty],
            vec![Cell::Empty, Cell::Empty],
            vec![Cell::Empty, Cell::Miss],
        ]
    );
    assert!(grid.columns().all(|c| c.len() == 2));
}

#[test]
fn cells_iterates_row_major_with_coordinates() {
    let grid = Grid::new(2, 2);
    let coords: Vec<(usize, usize)> = grid.cells().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn from_cells_checks_count() {
    assert!(Grid::from_cells(2, 2, vec![Cell::Empty; 3]).is_none());
    let grid = Grid::from_cells(2, 1, vec![Cell::Ship, Cell::Miss]).unwrap();
    assert_eq!(grid.get(1, 0), Some(Cell::Miss));
}
