//! Applying a parsed payload to the grid
//!
//! ```text
//! payload 1x1 and selection > 1 cell   → broadcast over pivot..=selection max
//! otherwise                            → block of payload rows x first-row width
//! either way                           → clipped at the grid edge, never grown
//! ```

use super::codec::ClipboardPayload;
use crate::model::{CellAddress, CellLookup, CellRange};

/// What a paste did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasteReport {
    /// The written span anchored at the pivot, after clipping
    pub span: Option<CellRange>,
    /// Cells that received a value
    pub written: usize,
    /// Cells left untouched because they are read-only
    pub skipped_read_only: usize,
}

/// Write `payload` into `grid` starting at `pivot`
///
/// `selection` is the current selection rectangle; it only matters for the
/// broadcast rule. The caller repaints the selection to `report.span`.
pub fn apply(
    grid: &mut impl CellLookup,
    payload: &ClipboardPayload,
    pivot: CellAddress,
    selection: Option<CellRange>,
) -> PasteReport {
    let (grid_rows, grid_cols) = grid.extent();
    let (row_start, col_start) = (pivot.row, pivot.col);

    let broadcast = payload
        .single_value()
        .filter(|_| selection.is_some_and(|sel| sel.cell_count() > 1));

    let (span_rows, span_cols) = match (broadcast, selection) {
        (Some(_), Some(sel)) => (
            (sel.max_row + 1).saturating_sub(row_start),
            (sel.max_col + 1).saturating_sub(col_start),
        ),
        _ => (payload.row_count(), payload.col_count()),
    };

    let rows = grid_rows.saturating_sub(row_start).min(span_rows);
    let cols = grid_cols.saturating_sub(col_start).min(span_cols);

    let mut report = PasteReport {
        span: CellRange::anchored(pivot, rows, cols),
        ..PasteReport::default()
    };
    let Some(span) = report.span else {
        tracing::debug!("paste at {} writes nothing", pivot);
        return report;
    };

    for addr in span.cells() {
        let value = match broadcast {
            Some(value) => value,
            None => match payload.get(addr.row - row_start, addr.col - col_start) {
                Some(value) => value,
                None => continue,
            },
        };
        let Some(cell) = grid.cell_mut(addr) else {
            tracing::warn!("paste: no cell at {}", addr);
            continue;
        };
        if cell.is_read_only() {
            report.skipped_read_only += 1;
            continue;
        }
        cell.write(value);
        report.written += 1;
    }

    tracing::debug!(
        "pasted {} cell(s) over {} ({} read-only skipped)",
        report.written,
        span,
        report.skipped_read_only
    );
    report
}
