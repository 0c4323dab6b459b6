//! Settings panel: switches and radio groups bound to [`TableSettings`].

use egui::{CollapsingHeader, Response, Ui};
use tabula_business::{PagerAlign, TableSettings, TableSize, XScroll};

/// Draws a checkbox and calls `set` with the new value when it flips.
fn switch(ui: &mut Ui, label: &str, value: bool, set: impl FnOnce(bool)) {
    let mut checked = value;
    if ui.checkbox(&mut checked, label).changed() {
        log::debug!("Setting {label:?} -> {checked}");
        set(checked);
    }
}

fn pager_group(ui: &mut Ui, label: &str, value: Option<PagerAlign>) -> Option<Option<PagerAlign>> {
    let mut selected = value;
    let mut changed = false;

    ui.label(format!("{label}:"));
    for align in PagerAlign::ALL {
        changed |= ui
            .selectable_value(&mut selected, Some(align), format!("{label} {align}"))
            .changed();
    }
    changed |= ui
        .selectable_value(&mut selected, None, format!("{label} None"))
        .changed();

    changed.then_some(selected)
}

/// Displays the settings panel for one table page.
pub fn settings_panel(settings: &mut TableSettings, ui: &mut Ui) -> Response {
    CollapsingHeader::new("Settings")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                switch(ui, "Bordered", settings.bordered(), |v| settings.set_bordered(v));
                switch(ui, "Loading", settings.loading(), |v| settings.set_loading(v));
                switch(ui, "Title", settings.show_title(), |v| {
                    settings.set_show_title(v);
                });
                switch(ui, "Column Header", settings.show_header(), |v| {
                    settings.set_show_header(v);
                });
                switch(ui, "Footer", settings.show_footer(), |v| {
                    settings.set_show_footer(v);
                });
                switch(ui, "Checkbox", settings.row_selection(), |v| {
                    settings.set_row_selection(v);
                });
                switch(ui, "Has Data", settings.has_data(), |v| settings.set_has_data(v));
                switch(ui, "Ellipsis", settings.ellipsis(), |v| settings.set_ellipsis(v));
                switch(ui, "Y Scroll", settings.y_scroll(), |v| settings.set_y_scroll(v));
            });

            ui.horizontal_wrapped(|ui| {
                ui.label("Size:");
                let mut size = settings.size();
                for option in TableSize::ALL {
                    ui.selectable_value(&mut size, option, option.label());
                }
                settings.set_size(size);

                ui.separator();

                ui.label("Table Scroll:");
                let mut x_scroll = settings.x_scroll();
                for option in XScroll::ALL {
                    ui.selectable_value(&mut x_scroll, option, option.label());
                }
                settings.set_x_scroll(x_scroll);
            });

            ui.horizontal_wrapped(|ui| {
                if let Some(align) = pager_group(ui, "Top", settings.pagination_top()) {
                    settings.set_pagination_top(align);
                }
                ui.separator();
                if let Some(align) = pager_group(ui, "Bottom", settings.pagination_bottom()) {
                    settings.set_pagination_bottom(align);
                }
            });
        })
        .header_response
}
