//! Editable cell shared by both table renderers.
//!
//! The cell exposes three operations: [`render_display`], [`render_edit`]
//! and [`commit`]. [`editable_cell`] picks between them from the session.

use egui::{Label, Response, Sense, TextEdit, Ui, WidgetText};
use tabula_business::{CellMode, EditSession, Field, Record};

use crate::utils::colors::COLOR_RED;

/// Draws the cell value. The label is clickable only for editable fields.
pub fn render_display(
    ui: &mut Ui,
    text: impl Into<WidgetText>,
    editable: bool,
    truncate: bool,
) -> Response {
    let mut label = Label::new(text);
    if editable {
        label = label.sense(Sense::click());
    }
    if truncate {
        label = label.truncate();
    }

    let response = ui.add(label);
    if editable {
        response.on_hover_cursor(egui::CursorIcon::Text)
    } else {
        response
    }
}

/// Draws the text input of the active edit.
///
/// Input that would be dropped on commit is drawn in red behind a warning
/// mark. Returns `None` when the session has no active edit.
pub fn render_edit(ui: &mut Ui, session: &mut EditSession) -> Option<Response> {
    let wants_focus = session.take_focus_request();
    let edit = session.active_mut()?;
    let error = edit.error();

    let mut input = TextEdit::singleline(&mut edit.input)
        .desired_width(f32::INFINITY)
        .id_salt(("edit_cell", edit.row.id, edit.field.key()));
    if let Some(err) = &error {
        ui.colored_label(COLOR_RED, "⚠").on_hover_text(err.to_string());
        input = input.text_color(COLOR_RED);
    }

    let mut response = ui.add(input);
    if let Some(err) = error {
        response = response.on_hover_text(err.to_string());
    }
    if wants_focus {
        response.request_focus();
    }
    Some(response)
}

/// Leaves edit and returns the updated row for the save callback.
pub fn commit(session: &mut EditSession) -> Option<Record> {
    session.commit()
}

/// Draws one cell of `field` on `row`.
///
/// Returns a row to save when an edit was committed this frame: either this
/// cell lost focus, or clicking it committed the cell edited before.
pub fn editable_cell(
    ui: &mut Ui,
    session: &mut EditSession,
    row: &Record,
    field: Field,
    text: impl Into<WidgetText>,
    truncate: bool,
) -> Option<Record> {
    match session.mode(row, field) {
        CellMode::Display => {
            let response = render_display(ui, text, field.is_editable(), truncate);
            if response.clicked() {
                session.activate(row, field)
            } else {
                None
            }
        }
        CellMode::Edit => {
            let response = render_edit(ui, session)?;
            if response.lost_focus() {
                commit(session)
            } else {
                None
            }
        }
    }
}
