//! Selection engine tests: rectangles, drag state, navigation

mod common;

use common::{at, focus, range, select, test_model};
use dyngrid::keymap::{KeyCode, Keystroke, Modifiers};
use dyngrid::messages::{Msg, PointerMsg};
use dyngrid::model::{CellRange, SelectionEngine};
use dyngrid::update::update;
use dyngrid::Cmd;

// ========================================================================
// Rectangle Tests
// ========================================================================

#[test]
fn test_rectangle_is_bounding_box_for_every_corner_pair() {
    let (rows, cols) = (4, 3);
    let corners: Vec<_> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| at(r, c)))
        .collect();

    for &pivot in &corners {
        for &other in &corners {
            let mut engine = SelectionEngine::new(rows, cols);
            engine.begin_selection(pivot);
            engine.extend_selection(other);

            let expected = CellRange::spanning(pivot, other);
            assert_eq!(engine.current_rectangle(), Some(expected));
            assert_eq!(engine.matrix().selected_count(), expected.cell_count());
            assert_eq!(engine.pivot(), Some(pivot));
        }
    }
}

#[test]
fn test_rectangle_after_many_extends_reflects_last_only() {
    let mut engine = SelectionEngine::new(6, 6);
    engine.begin_selection(at(2, 2));
    for target in [at(5, 5), at(0, 0), at(0, 5), at(5, 0), at(3, 2)] {
        engine.extend_selection(target);
    }
    assert_eq!(engine.current_rectangle(), Some(range(2, 3, 2, 2)));
    assert_eq!(engine.matrix().selected_count(), 2);
}

#[test]
fn test_no_selection_has_sentinel_bounds() {
    let engine = SelectionEngine::new(3, 3);
    assert_eq!(engine.current_rectangle(), None);
    assert_eq!(
        CellRange::bounds_or_sentinel(engine.current_rectangle()),
        (-1, -1, -1, -1)
    );
}

// ========================================================================
// Pointer Drag Tests
// ========================================================================

#[test]
fn test_drag_selects_and_repaints() {
    let mut model = test_model(5, 5);

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Down(at(1, 1))));
    assert_eq!(cmd, Some(Cmd::Repaint(Some(range(1, 1, 1, 1)))));

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Over(at(3, 0))));
    assert_eq!(cmd, Some(Cmd::Repaint(Some(range(1, 3, 0, 1)))));

    update(&mut model, Msg::Pointer(PointerMsg::Up));
    assert!(!model.selection.is_dragging());
    assert_eq!(model.selection.current_rectangle(), Some(range(1, 3, 0, 1)));
}

#[test]
fn test_hover_without_drag_changes_nothing() {
    let mut model = test_model(3, 3);
    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Over(at(2, 2))));

    assert_eq!(cmd, None);
    assert_eq!(model.selection.current_rectangle(), None);
}

#[test]
fn test_release_outside_grid_ends_drag() {
    let mut model = test_model(4, 4);
    update(&mut model, Msg::Pointer(PointerMsg::Down(at(0, 0))));
    update(&mut model, Msg::Pointer(PointerMsg::Over(at(1, 1))));

    // Document-wide release, not over any cell
    update(&mut model, Msg::Pointer(PointerMsg::Up));

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Over(at(3, 3))));
    assert_eq!(cmd, None);
    assert_eq!(model.selection.current_rectangle(), Some(range(0, 1, 0, 1)));
}

#[test]
fn test_click_outside_resets_selection() {
    let mut model = test_model(3, 3);
    select(&mut model, at(0, 0), at(2, 2));

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::ClickOutside));
    assert_eq!(cmd, Some(Cmd::Repaint(None)));
    assert_eq!(model.selection.current_rectangle(), None);
    assert_eq!(model.selection.pivot(), None);
}

#[test]
fn test_pointer_down_outside_grid_is_ignored() {
    let mut model = test_model(2, 2);
    select(&mut model, at(0, 0), at(1, 1));

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Down(at(5, 5))));
    assert_eq!(cmd, None);
    assert_eq!(model.selection.current_rectangle(), Some(range(0, 1, 0, 1)));
}

// ========================================================================
// Keyboard Selection Tests
// ========================================================================

#[test]
fn test_arrow_down_moves_single_cell_and_focus() {
    let mut model = test_model(3, 3);
    select(&mut model, at(0, 1), at(0, 1));
    focus(&mut model, at(0, 1));

    update(&mut model, Msg::Key(Keystroke::key(KeyCode::Down)));

    assert_eq!(model.focused, Some(at(1, 1)));
    assert_eq!(model.selection.current_rectangle(), Some(range(1, 1, 1, 1)));
    assert_eq!(model.selection.pivot(), Some(at(1, 1)));
}

#[test]
fn test_arrow_up_at_top_row_is_noop() {
    let mut model = test_model(3, 3);
    select(&mut model, at(0, 0), at(1, 2));
    focus(&mut model, at(0, 0));

    let cmd = update(&mut model, Msg::Key(Keystroke::key(KeyCode::Up)));

    assert_eq!(cmd, None);
    assert_eq!(model.focused, Some(at(0, 0)));
    assert_eq!(model.selection.current_rectangle(), Some(range(0, 1, 0, 2)));
}

#[test]
fn test_arrow_without_focus_is_noop() {
    let mut model = test_model(3, 3);
    select(&mut model, at(1, 1), at(1, 1));

    let cmd = update(&mut model, Msg::Key(Keystroke::key(KeyCode::Down)));
    assert_eq!(cmd, None);
    assert_eq!(model.selection.current_rectangle(), Some(range(1, 1, 1, 1)));
}

#[test]
fn test_command_shift_down_extends_to_last_row() {
    let mut model = test_model(8, 4);
    select(&mut model, at(2, 1), at(3, 2));

    let stroke = Keystroke::new(KeyCode::Down, Modifiers::META | Modifiers::SHIFT);
    let cmd = update(&mut model, Msg::Key(stroke));

    assert_eq!(cmd, Some(Cmd::Repaint(Some(range(2, 7, 1, 2)))));
    assert_eq!(model.selection.current_rectangle(), Some(range(2, 7, 1, 2)));
}

#[test]
fn test_ctrl_shift_down_without_selection_does_nothing() {
    let mut model = test_model(4, 4);
    let stroke = Keystroke::new(KeyCode::Down, Modifiers::CTRL | Modifiers::SHIFT);
    update(&mut model, Msg::Key(stroke));
    assert_eq!(model.selection.current_rectangle(), None);
}
