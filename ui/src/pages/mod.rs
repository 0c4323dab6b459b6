//! Pages module for the application.
//!
//! One page per route:
//! - `grid_page`: the dataset drawn with `egui::Grid`
//! - `table_page`: the dataset drawn with `egui_extras::TableBuilder`
//!
//! Both pages share the same layout around their renderer, see [`render_page`].

mod grid_page;
mod table_page;

pub use grid_page::grid_page;
pub use table_page::table_page;

use egui::Ui;
use tabula_business::{EditSession, PageAction, PageView, TablePage};

use crate::widgets;

/// Draws the settings panel, title, pagers, footer and the table itself.
///
/// `render` draws the table body and returns the actions it collected.
/// Actions from every part of the page are applied once drawing is done.
pub(crate) fn render_page(
    ui: &mut Ui,
    page: &mut TablePage,
    render: impl FnOnce(&mut Ui, &PageView<'_>, &mut EditSession) -> Vec<PageAction>,
) {
    widgets::settings_panel(&mut page.settings, ui);
    ui.separator();

    let (view, edit) = page.render_parts();
    let settings = view.settings;
    let mut actions = Vec::new();

    if settings.show_title() {
        ui.heading("Title");
    }

    if let Some(align) = settings.pagination_top() {
        actions.extend(widgets::pager(ui, "top", view.pagination, view.total, align));
    }

    actions.extend(render(ui, &view, edit));

    if let Some(align) = settings.pagination_bottom() {
        actions.extend(widgets::pager(ui, "bottom", view.pagination, view.total, align));
    }

    if settings.show_footer() {
        ui.label("Footer");
    }

    page.apply(actions);
}
