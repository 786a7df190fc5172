//! Tests for header activation handling.

use super::*;
use crate::model::{Attributes, TableId};

// ===== Test Helpers =====

fn people() -> Table {
    Table::from_texts(
        TableId::new(0),
        &["Name", "Age"],
        &[vec!["Bob", "30"], vec!["Ann", "25"], vec!["Cid", "25"]],
    )
}

fn names(table: &Table) -> Vec<String> {
    table
        .data_rows()
        .iter()
        .map(|r| r.cells()[0].comparable_value().into_owned())
        .collect()
}

fn markers(table: &Table) -> Vec<Option<Direction>> {
    table
        .header()
        .map(|h| h.cells().iter().map(|c| c.marker()).collect())
        .unwrap_or_default()
}

// ===== Activation =====

#[test]
fn age_then_age_again_reverses_exactly() {
    let mut table = people();
    let mut controller = SortController::new();

    let first = controller.handle_header_activation(&mut table, Activation::Cell(1));
    assert_eq!(first, Some(Direction::Ascending));
    assert_eq!(names(&table), ["Ann", "Cid", "Bob"]);

    let second = controller.handle_header_activation(&mut table, Activation::Cell(1));
    assert_eq!(second, Some(Direction::Descending));
    assert_eq!(names(&table), ["Bob", "Cid", "Ann"]);
}

#[test]
fn sort_by_name_ascending() {
    let mut table = people();
    let mut controller = SortController::new();
    controller.handle_header_activation(&mut table, Activation::Cell(0));
    assert_eq!(names(&table), ["Ann", "Bob", "Cid"]);
}

#[test]
fn row_activation_is_ignored() {
    let mut table = people();
    let before = table.clone();
    let mut controller = SortController::new();

    assert_eq!(
        controller.handle_header_activation(&mut table, Activation::Row),
        None
    );
    assert_eq!(table, before);
    assert_eq!(controller.state().active_column(), None);
}

#[test]
fn row_activation_after_sort_keeps_markers() {
    let mut table = people();
    let mut controller = SortController::new();
    controller.handle_header_activation(&mut table, Activation::Cell(1));
    let sorted = table.clone();

    controller.handle_header_activation(&mut table, Activation::Row);
    assert_eq!(table, sorted);
    assert_eq!(markers(&table), [None, Some(Direction::Ascending)]);
}

#[test]
fn column_past_header_is_ignored() {
    let mut table = people();
    let mut controller = SortController::new();
    assert_eq!(
        controller.handle_header_activation(&mut table, Activation::Cell(2)),
        None
    );
    assert_eq!(names(&table), ["Bob", "Ann", "Cid"]);
    assert_eq!(markers(&table), [None, None]);
}

#[test]
fn table_without_data_rows_is_a_no_op() {
    let mut table = Table::from_texts(TableId::new(0), &["Name", "Age"], &[]);
    let mut controller = SortController::new();
    assert_eq!(
        controller.handle_header_activation(&mut table, Activation::Cell(0)),
        None
    );
    assert_eq!(markers(&table), [None, None]);
    assert_eq!(controller.state().active_column(), None);
}

#[test]
fn table_without_header_is_a_no_op() {
    let mut table = Table::new(TableId::new(0), Attributes::default(), vec![], vec![]);
    let mut controller = SortController::new();
    assert_eq!(
        controller.handle_header_activation(&mut table, Activation::Cell(0)),
        None
    );
}

// ===== Markers =====

#[test]
fn switching_columns_moves_the_marker() {
    let mut table = people();
    let mut controller = SortController::new();

    controller.handle_header_activation(&mut table, Activation::Cell(1));
    controller.handle_header_activation(&mut table, Activation::Cell(1));
    assert_eq!(markers(&table), [None, Some(Direction::Descending)]);

    controller.handle_header_activation(&mut table, Activation::Cell(0));
    assert_eq!(markers(&table), [Some(Direction::Ascending), None]);
}

#[test]
fn controller_continues_from_existing_marker() {
    let mut table = people();
    table.header_mut().unwrap().cells_mut()[1].set_marker(Some(Direction::Ascending));

    let mut controller = SortController::for_table(&table);
    let direction = controller.handle_header_activation(&mut table, Activation::Cell(1));
    assert_eq!(direction, Some(Direction::Descending));
    assert_eq!(names(&table), ["Bob", "Cid", "Ann"]);
}

// ===== Ordering =====

#[test]
fn ties_fall_back_to_remaining_columns() {
    let rows = vec![
        Row::from_texts(1, &["x", "b", "2"]),
        Row::from_texts(2, &["x", "a", "9"]),
        Row::from_texts(3, &["x", "a", "1"]),
    ];
    let ordered = order_rows(rows, 0, Direction::Ascending);
    let positions: Vec<usize> = ordered.iter().map(Row::position).collect();
    assert_eq!(positions, [3, 2, 1]);
}

#[test]
fn full_ties_fall_back_to_position_numerically() {
    let rows: Vec<Row> = (1..=12).rev().map(|p| Row::from_texts(p, &["same"])).collect();
    let ordered = order_rows(rows, 0, Direction::Ascending);
    let positions: Vec<usize> = ordered.iter().map(Row::position).collect();
    assert_eq!(positions, (1..=12).collect::<Vec<_>>());
}

#[test]
fn markup_does_not_affect_order() {
    let rows = vec![
        Row::from_texts(1, &["<b>5</b>", "b"]),
        Row::from_texts(2, &["5", "a"]),
    ];
    let ordered = order_rows(rows, 0, Direction::Ascending);
    assert_eq!(ordered[0].position(), 2, "'5 a' sorts before '5 b'");
}

#[test]
fn comparison_is_code_point_order() {
    let rows = vec![
        Row::from_texts(1, &["banana"]),
        Row::from_texts(2, &["Apple"]),
        Row::from_texts(3, &["10"]),
        Row::from_texts(4, &["9"]),
    ];
    let ordered = order_rows(rows, 0, Direction::Ascending);
    let texts: Vec<String> = ordered.iter().map(|r| r.texts()[0].clone()).collect();
    assert_eq!(texts, ["10", "9", "Apple", "banana"]);
}

#[test]
fn descending_is_reverse_of_ascending() {
    let make = || {
        vec![
            Row::from_texts(1, &["b", "1"]),
            Row::from_texts(2, &["a", "1"]),
            Row::from_texts(3, &["b", "1"]),
        ]
    };
    let mut asc: Vec<usize> = order_rows(make(), 0, Direction::Ascending)
        .iter()
        .map(Row::position)
        .collect();
    let desc: Vec<usize> = order_rows(make(), 0, Direction::Descending)
        .iter()
        .map(Row::position)
        .collect();
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn short_row_is_sorted_without_panicking() {
    let rows = vec![
        Row::from_texts(1, &["b", "2"]),
        Row::from_texts(2, &["a"]),
    ];
    let ordered = order_rows(rows, 1, Direction::Ascending);
    assert_eq!(ordered.len(), 2);
    // Row 2 has no column 1: its key "a 2" sorts after "2 b 1".
    assert_eq!(ordered[0].position(), 1);
}

#[test]
fn rows_are_relocated_not_edited() {
    let mut table = people();
    let original: Vec<Row> = table.data_rows().to_vec();
    let mut controller = SortController::new();
    controller.handle_header_activation(&mut table, Activation::Cell(1));

    for row in table.data_rows() {
        let source = original
            .iter()
            .find(|r| r.position() == row.position())
            .unwrap();
        assert_eq!(row, source);
    }
}
