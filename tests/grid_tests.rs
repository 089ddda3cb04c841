mod common;

use common::{fixture, load_map, CELL_SIZE};
use raycaster::{OccupancyGrid, RaycasterError};

#[test]
fn fixtures_load_with_expected_shape() {
    let room = load_map("room.txt");
    assert_eq!((room.cols(), room.rows()), (8, 8));
    assert_eq!(room.world_width(), 320.0);

    let corridor = load_map("corridor.txt");
    assert_eq!((corridor.cols(), corridor.rows()), (10, 4));
    assert_eq!(corridor.cell(9, 2).unwrap(), 1);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let grid = load_map("crlf.txt");
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.to_string(), "1111\n1001\n1111\n");
}

#[test]
fn broken_maps_are_rejected() {
    assert!(matches!(
        OccupancyGrid::from_file(fixture("ragged.txt"), CELL_SIZE),
        Err(RaycasterError::RaggedRow { row: 1, expected: 4, found: 3 })
    ));
    assert!(matches!(
        OccupancyGrid::from_file(fixture("blank.txt"), CELL_SIZE),
        Err(RaycasterError::EmptyGrid)
    ));
    assert!(matches!(
        OccupancyGrid::from_file(fixture("bad_char.txt"), CELL_SIZE),
        Err(RaycasterError::InvalidCell { row: 1, col: 2, found: 'a' })
    ));
    assert!(matches!(
        OccupancyGrid::from_file(fixture("missing.txt"), CELL_SIZE),
        Err(RaycasterError::Io(_))
    ));
    assert!(matches!(
        OccupancyGrid::from_file(fixture("room.txt"), 0.0),
        Err(RaycasterError::InvalidConfiguration(_))
    ));
}

#[test]
fn query_is_periodic_in_both_axes() {
    let grid = load_map("room.txt");
    let width = grid.world_width();
    let height = grid.world_height();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let x = col as f32 * CELL_SIZE + 13.7;
            let y = row as f32 * CELL_SIZE + 27.1;
            let expected = grid.query(x, y);
            assert_eq!(expected, grid.cell(col, row).unwrap());

            for k in 1..4 {
                let k = k as f32;
                assert_eq!(grid.query(x + k * width, y), expected, "x wrap at ({}, {})", col, row);
                assert_eq!(grid.query(x, y + k * height), expected, "y wrap at ({}, {})", col, row);
            }
        }
    }
}

#[test]
fn query_folds_negative_onto_positive() {
    let grid = load_map("room.txt");
    for &(x, y) in &[(60.0, 100.0), (95.5, 170.0), (215.0, 99.0)] {
        assert_eq!(grid.query(-x, y), grid.query(x, y));
        assert_eq!(grid.query(x, -y), grid.query(x, y));
        assert_eq!(grid.query(-x, -y), grid.query(x, y));
    }
}
