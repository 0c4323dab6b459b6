//! Row rendering for the table view.

use std::collections::BTreeSet;

use egui_extras::TableRow;
use tabula_business::{COLUMNS, EditSession, Field, PageAction, VisibleRow};

use super::cells::{
    CellStyle, draw_cell_bottom_border, render_data_cell, render_delete_cell, render_select_cell,
    render_tree_cell,
};

/// What every row of one frame shares.
pub struct RowContext<'a> {
    pub cell: CellStyle<'a>,
    pub selected: &'a BTreeSet<u32>,
    pub row_selection: bool,
    pub bordered: bool,
}

/// Renders one visible row: selection, tree toggle with id, data cells and
/// the delete action.
///
/// Selection and delete apply to top-level rows only. Nested rows get an
/// empty cell in those columns.
#[inline]
pub fn render_row(
    row: &mut TableRow<'_, '_>,
    visible: &VisibleRow<'_>,
    ctx: &RowContext<'_>,
    edit: &mut EditSession,
    actions: &mut Vec<PageAction>,
) {
    let record = visible.record;
    let top_level = visible.is_top_level();
    let is_selected = top_level && ctx.selected.contains(&record.id);
    row.set_selected(is_selected);

    if ctx.row_selection {
        row.col(|ui| {
            if top_level && render_select_cell(ui, is_selected) {
                actions.push(PageAction::ToggleSelected(record.id));
            }
            if ctx.bordered {
                draw_cell_bottom_border(ui);
            }
        });
    }

    for column in &COLUMNS {
        row.col(|ui| {
            if column.field() == Some(Field::Id) {
                if render_tree_cell(ui, visible) {
                    actions.push(PageAction::ToggleExpanded(visible.key));
                }
            } else if let Some(updated) =
                render_data_cell(ui, edit, record, column, ctx.cell)
            {
                actions.push(PageAction::Save(updated));
            }
            if ctx.bordered {
                draw_cell_bottom_border(ui);
            }
        });
    }

    row.col(|ui| {
        if top_level && render_delete_cell(ui) {
            log::info!("Deleting row {}", record.id);
            actions.push(PageAction::Delete(record.id));
        }
        if ctx.bordered {
            draw_cell_bottom_border(ui);
        }
    });
}
