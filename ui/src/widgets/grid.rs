//! `egui::Grid` rendering of a table page.
//!
//! Uses a Typora-like table style with light header cells and padded data
//! cells. The grid lays out every row of the page flat, without tree
//! toggles. Sortable headers cycle the page sort like the table view.

use egui::{Color32, Frame, Grid, InnerResponse, Margin, ScrollArea, Ui};
use tabula_business::{COLUMNS, EditSession, PageAction, PageView};

use super::table::cells::{CellStyle, render_data_cell, render_delete_cell, render_select_cell};
use super::table::header::render_header_cell;
use super::table::{render_placeholder, table_frame};
use crate::utils::colors::age_colors;

/// Header background color (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Helper to create a Typora-style header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a Typora-style data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, add_contents)
}

/// Draws the grid view of `view` and returns the actions of this frame.
pub fn grid_view(ui: &mut Ui, view: &PageView<'_>, edit: &mut EditSession) -> Vec<PageAction> {
    let settings = view.settings;
    let style = CellStyle {
        search: view.query.search(),
        truncate: settings.ellipsis(),
        age_colors,
    };
    let num_columns = COLUMNS.len() + 1 + usize::from(settings.row_selection());

    // Collect actions (avoiding borrow issues)
    let mut actions = Vec::new();

    table_frame(settings.bordered()).show(ui, |ui| {
        ui.add_enabled_ui(!settings.loading(), |ui| {
            let mut scroll = ScrollArea::new([settings.x_scroll().scrolls(), settings.y_scroll()])
                .id_salt("grid_view_scroll");
            if let Some(height) = settings.body_height() {
                scroll = scroll.max_height(height);
            }

            scroll.show(ui, |ui| {
                Grid::new("grid_view")
                    .num_columns(num_columns)
                    .striped(true)
                    .spacing([0.0, 0.0])
                    .min_row_height(settings.size().row_height())
                    .show(ui, |ui| {
                        if settings.show_header() {
                            if settings.row_selection() {
                                header_cell(ui, |ui| {
                                    if render_select_cell(ui, view.page_fully_selected) {
                                        actions
                                            .push(PageAction::SelectPage(!view.page_fully_selected));
                                    }
                                });
                            }
                            for column in &COLUMNS {
                                header_cell(ui, |ui| {
                                    if render_header_cell(ui, column, view.query) {
                                        actions.push(PageAction::ToggleSort(column.key));
                                    }
                                });
                            }
                            header_cell(ui, |ui| {
                                ui.strong("Action");
                            });
                            ui.end_row();
                        }

                        for visible in &view.rows {
                            let record = visible.record;

                            if settings.row_selection() {
                                data_cell(ui, |ui| {
                                    let selected = view.selected.contains(&record.id);
                                    if render_select_cell(ui, selected) {
                                        actions.push(PageAction::ToggleSelected(record.id));
                                    }
                                });
                            }

                            for column in &COLUMNS {
                                data_cell(ui, |ui| {
                                    if style.truncate {
                                        ui.set_max_width(column.width);
                                    }
                                    if let Some(updated) =
                                        render_data_cell(ui, edit, record, column, style)
                                    {
                                        actions.push(PageAction::Save(updated));
                                    }
                                });
                            }

                            data_cell(ui, |ui| {
                                if render_delete_cell(ui) {
                                    log::info!("Deleting row {}", record.id);
                                    actions.push(PageAction::Delete(record.id));
                                }
                            });

                            ui.end_row();
                        }
                    });
            });
        });

        render_placeholder(ui, view);
    });

    actions
}
