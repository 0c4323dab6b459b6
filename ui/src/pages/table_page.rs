//! Table view page, with search and first-name filters above the table.

use egui::{Response, Ui};

use super::render_page;
use crate::{state::State, widgets};

/// Displays the dataset of the mounted page with the `TableBuilder` renderer.
pub fn table_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        widgets::search_bar(&mut state.page, ui);
        ui.add_space(4.0);
        render_page(ui, &mut state.page, widgets::table_view);
    })
    .response
}
