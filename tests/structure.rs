//! Row/column structure tests and value import/export

mod common;

use common::{at, filled_model, focus, range, select, select_in, test_model, test_runtime, value};
use dyngrid::config::{ColumnOptions, InputKind};
use dyngrid::messages::{CellMsg, Msg, StructureMsg};
use dyngrid::model::{CellLookup, GridValues};
use dyngrid::update::update;
use dyngrid::Cmd;

fn named(header: &str) -> ColumnOptions {
    ColumnOptions {
        header_name: Some(header.to_string()),
        ..Default::default()
    }
}

// ========================================================================
// Add / Remove
// ========================================================================

#[test]
fn test_add_row_resizes_selection_and_clears_it() {
    let mut model = test_model(2, 2);
    select(&mut model, at(0, 0), at(1, 1));

    let cmd = update(&mut model, Msg::Structure(StructureMsg::AddRow));

    assert_eq!(cmd, Some(Cmd::Batch(vec![Cmd::Rebuild, Cmd::Repaint(None)])));
    assert_eq!(model.rows(), 3);
    assert_eq!(model.selection.matrix().rows(), 3);
    assert_eq!(model.selection.current_rectangle(), None);
    assert_eq!(model.selection.pivot(), None);

    // The new row is selectable
    select(&mut model, at(2, 0), at(2, 1));
    assert_eq!(model.selection.current_rectangle(), Some(range(2, 2, 0, 1)));
}

#[test]
fn test_add_column_uses_options() {
    let mut model = test_model(2, 1);
    update(
        &mut model,
        Msg::Structure(StructureMsg::AddColumn(ColumnOptions {
            input: InputKind::Decimal,
            precision: 1,
            ..Default::default()
        })),
    );

    assert_eq!(model.cols(), 2);
    assert_eq!(model.selection.matrix().cols(), 2);
    assert_eq!(value(&model, at(0, 1)), "0.0");
    assert_eq!(value(&model, at(1, 1)), "0.0");
    assert_eq!(model.grid.headers(), vec!["Column 1", "Column 2"]);
}

#[test]
fn test_remove_last_row_and_column() {
    let mut model = filled_model(3, 3);
    update(&mut model, Msg::Structure(StructureMsg::RemoveRow));
    update(&mut model, Msg::Structure(StructureMsg::RemoveColumn));

    assert_eq!((model.rows(), model.cols()), (2, 2));
    assert_eq!(value(&model, at(1, 1)), "r1c1");
    assert!(model.grid.cell(at(2, 0)).is_none());
    assert!(model.grid.cell(at(0, 2)).is_none());
    assert_eq!(model.grid.addresses().lookup("grid_r3c1"), None);
    assert_eq!(model.grid.addresses().lookup("grid_r2c2"), Some(at(1, 1)));
}

#[test]
fn test_remove_from_empty_dimension_is_noop() {
    let mut model = test_model(1, 1);
    update(&mut model, Msg::Structure(StructureMsg::RemoveRow));
    assert_eq!(model.rows(), 0);

    let cmd = update(&mut model, Msg::Structure(StructureMsg::RemoveRow));
    assert_eq!(cmd, None);
    assert_eq!(model.rows(), 0);
}

#[test]
fn test_removing_focused_cell_drops_focus() {
    let mut model = test_model(3, 3);
    focus(&mut model, at(2, 2));
    update(&mut model, Msg::Structure(StructureMsg::RemoveRow));
    assert_eq!(model.focused, None);

    focus(&mut model, at(0, 0));
    update(&mut model, Msg::Structure(StructureMsg::RemoveColumn));
    assert_eq!(model.focused, Some(at(0, 0)));
}

#[test]
fn test_runtime_rebuild_clears_shell_markers() {
    let mut runtime = test_runtime(test_model(2, 2));
    select_in(&mut runtime, at(0, 0), at(1, 1));
    assert!(runtime.shell().is_marked(at(1, 1)));

    runtime.dispatch(Msg::Structure(StructureMsg::AddColumn(
        ColumnOptions::default(),
    )));

    assert_eq!(runtime.shell().extent, (2, 3));
    assert_eq!(runtime.shell().selected, None);
    assert!(!runtime.shell().is_marked(at(1, 1)));
}

// ========================================================================
// Headers and Values
// ========================================================================

#[test]
fn test_duplicate_headers_get_numbered() {
    let mut model = test_model(1, 0);
    for _ in 0..3 {
        update(
            &mut model,
            Msg::Structure(StructureMsg::AddColumn(named("Amount"))),
        );
    }
    assert_eq!(model.grid.headers(), vec!["Amount", "Amount1", "Amount2"]);
}

#[test]
fn test_values_include_every_row() {
    let mut model = test_model(3, 2);
    model.grid.cell_mut(at(0, 1)).unwrap().write("b");

    let values = model.grid.values();
    assert_eq!(values.len(), 3);
    assert_eq!(values[&1].get("Column 2").map(String::as_str), Some("b"));
    assert!(values[&1].get("Column 1").is_none());
    assert!(values[&2].is_empty());
    assert!(values[&3].is_empty());
}

#[test]
fn test_set_values_by_header_refreshes_cells() {
    let mut runtime = test_runtime(test_model(2, 2));
    let mut values = GridValues::new();
    values
        .entry(2)
        .or_default()
        .insert("Column 1".to_string(), "x".to_string());
    values
        .entry(9)
        .or_default()
        .insert("Column 1".to_string(), "ignored".to_string());
    values
        .entry(1)
        .or_default()
        .insert("Nope".to_string(), "ignored".to_string());

    runtime.dispatch(Msg::Cell(CellMsg::SetValues(values)));

    assert_eq!(runtime.model().grid.read(at(1, 0)), Some("x"));
    assert_eq!(runtime.model().grid.read(at(0, 0)), Some(""));
    assert_eq!(runtime.shell().refreshed.len(), 4);
    assert!(runtime
        .shell()
        .refreshed
        .contains(&(at(1, 0), "x".to_string())));
}

#[test]
fn test_values_json_shape() {
    let mut model = test_model(2, 1);
    model.grid.cell_mut(at(1, 0)).unwrap().write("v");
    assert_eq!(
        model.grid.values_json().unwrap(),
        r#"{"1":{},"2":{"Column 1":"v"}}"#
    );
}

#[test]
fn test_cell_by_external_id() {
    let model = filled_model(2, 3);
    let cell = model.grid.cell_by_id("grid_r2c3").unwrap();
    assert_eq!(cell.read(), "r1c2");
    assert!(model.grid.cell_by_id("grid_r3c1").is_none());
    assert!(model.grid.cell_by_id("other_r1c1").is_none());
}
