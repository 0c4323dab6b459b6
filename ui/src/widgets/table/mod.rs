//! `egui_extras::TableBuilder` rendering of a table page.
//!
//! The table logic is split into smaller components:
//! - `columns`: column layout per scroll mode
//! - `header`: sortable header and select-page checkbox
//! - `row`: one visible row with its cells
//! - `cells`: cell rendering shared with the grid view

pub mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Frame, Layout, Margin, ScrollArea, Stroke, Ui};
use egui_extras::TableBuilder;
use tabula_business::{EditSession, PageAction, PageView};

use crate::utils::colors::{TABLE_BORDER_COLOR, table_age_colors};
use cells::CellStyle;
use columns::{HEADER_HEIGHT, table_columns};
use header::render_table_header;
use row::{RowContext, render_row};

/// Shows the spinner while loading, and "No data" for an empty page.
pub fn render_placeholder(ui: &mut Ui, view: &PageView<'_>) {
    if view.settings.loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
    }
    if view.rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.weak("No data");
            ui.add_space(12.0);
        });
    }
}

/// Frame around a table, stroked when bordered.
pub fn table_frame(bordered: bool) -> Frame {
    let stroke = if bordered {
        Stroke::new(1.0, TABLE_BORDER_COLOR)
    } else {
        Stroke::NONE
    };
    Frame::NONE.stroke(stroke).inner_margin(Margin::same(2))
}

/// Draws the table view of `view` and returns the actions of this frame.
pub fn table_view(ui: &mut Ui, view: &PageView<'_>, edit: &mut EditSession) -> Vec<PageAction> {
    let settings = view.settings;
    let mut actions = Vec::new();
    let mut header_actions = Vec::new();

    let ctx = RowContext {
        cell: CellStyle {
            search: view.query.search(),
            truncate: settings.ellipsis(),
            age_colors: table_age_colors,
        },
        selected: view.selected,
        row_selection: settings.row_selection(),
        bordered: settings.bordered(),
    };
    let row_height = settings.size().row_height();

    table_frame(settings.bordered()).show(ui, |ui| {
        ui.add_enabled_ui(!settings.loading(), |ui| {
            ScrollArea::new([settings.x_scroll().scrolls(), false])
                .id_salt("table_view_x")
                .show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .id_salt("table_view")
                        .striped(true)
                        .cell_layout(Layout::left_to_right(Align::Center))
                        .vscroll(settings.y_scroll())
                        .min_scrolled_height(0.0);
                    if let Some(height) = settings.body_height() {
                        builder = builder.max_scroll_height(height);
                    }
                    for column in
                        table_columns(settings.x_scroll(), settings.row_selection(), ctx.cell.truncate)
                    {
                        builder = builder.column(column);
                    }

                    let body = |body: egui_extras::TableBody<'_>| {
                        body.rows(row_height, view.rows.len(), |mut row| {
                            let visible = &view.rows[row.index()];
                            render_row(&mut row, visible, &ctx, edit, &mut actions);
                        });
                    };

                    if settings.show_header() {
                        builder
                            .header(HEADER_HEIGHT, |mut header| {
                                render_table_header(
                                    &mut header,
                                    view.query,
                                    settings.row_selection(),
                                    view.page_fully_selected,
                                    &mut header_actions,
                                );
                            })
                            .body(body);
                    } else {
                        builder.body(body);
                    }
                });
        });

        render_placeholder(ui, view);
    });

    header_actions.extend(actions);
    header_actions
}
