//! Cell rendering shared by the grid and table views.

use egui::{Button, Frame, Margin, RichText, Stroke, Ui, WidgetText};
use tabula_business::{ColumnDef, ColumnSearch, EditSession, Field, Record, VisibleRow};

use crate::utils::colors::{AgeColors, COLOR_RED};
use crate::utils::highlight::highlighted;
use crate::widgets::editable_cell::{editable_cell, render_display};

/// Indentation per tree level.
const INDENT: f32 = 18.0;

/// How the data cells of one view are drawn.
#[derive(Clone, Copy)]
pub struct CellStyle<'a> {
    pub search: Option<&'a ColumnSearch>,
    pub truncate: bool,
    pub age_colors: AgeColors,
}

/// Text of a data cell, highlighted when its column is being searched.
fn cell_text(ui: &Ui, row: &Record, column: &ColumnDef, style: CellStyle<'_>) -> WidgetText {
    let text = column.text(row);
    match style.search {
        Some(search) if column.field() == Some(search.field) => {
            highlighted(ui.style(), &text, &search.text).into()
        }
        _ if column.field() == Some(Field::Age) => match (style.age_colors)(row.age) {
            Some((_, fg)) => RichText::new(text).color(fg).into(),
            None => text.into(),
        },
        _ => text.into(),
    }
}

/// Renders the cell of `column` on `row`.
///
/// Returns an updated row when an edit was committed.
#[inline]
pub fn render_data_cell(
    ui: &mut Ui,
    edit: &mut EditSession,
    row: &Record,
    column: &ColumnDef,
    style: CellStyle<'_>,
) -> Option<Record> {
    let text = cell_text(ui, row, column, style);
    let truncate = style.truncate;

    let Some(field) = column.field() else {
        render_display(ui, text, false, truncate);
        return None;
    };

    if field == Field::Age
        && let Some((bg, _)) = (style.age_colors)(row.age)
    {
        return Frame::NONE
            .fill(bg)
            .inner_margin(Margin::symmetric(6, 2))
            .corner_radius(3.0)
            .show(ui, |ui| editable_cell(ui, edit, row, field, text, truncate))
            .inner;
    }

    editable_cell(ui, edit, row, field, text, truncate)
}

/// Renders the selection checkbox. Returns `true` when it was toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

/// Renders the tree indentation and expand toggle ahead of the id.
///
/// Returns `true` when the toggle was clicked.
#[inline]
pub fn render_tree_cell(ui: &mut Ui, row: &VisibleRow<'_>) -> bool {
    let mut toggled = false;
    ui.horizontal(|ui| {
        ui.add_space(row.depth() as f32 * INDENT);
        if row.record.has_children() {
            let icon = if row.expanded { "➖" } else { "➕" };
            let hover = if row.expanded { "Collapse" } else { "Expand" };
            toggled = ui.small_button(icon).on_hover_text(hover).clicked();
        }
        ui.label(row.record.id.to_string());
    });
    toggled
}

/// Renders the delete button. Returns `true` when it was clicked.
#[inline]
pub fn render_delete_cell(ui: &mut Ui) -> bool {
    ui.add(Button::new(RichText::new("Delete").color(COLOR_RED)))
        .on_hover_text("Delete row")
        .clicked()
}

/// Draws a horizontal line along the bottom of the cell.
#[inline]
pub fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
