//! Grid view page.

use egui::{Response, Ui};

use super::render_page;
use crate::{state::State, widgets};

/// Displays the dataset of the mounted page with the grid renderer.
pub fn grid_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        render_page(ui, &mut state.page, widgets::grid_view);
    })
    .response
}
