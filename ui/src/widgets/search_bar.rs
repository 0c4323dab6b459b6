//! Column search and first-name filter bar for the table view.

use egui::{ComboBox, Key, TextEdit, Ui};
use tabula_business::{COLUMNS, FIRST_NAME_FILTERS, TablePage};

/// Draws the search bar and updates the page query.
pub fn search_bar(page: &mut TablePage, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Search by");

        let draft = &mut page.search_draft;
        ComboBox::from_id_salt("search_field")
            .selected_text(draft.field.title())
            .show_ui(ui, |ui| {
                for field in COLUMNS.iter().filter(|c| c.searchable).filter_map(|c| c.field()) {
                    ui.selectable_value(&mut draft.field, field, field.title());
                }
            });

        let response = ui.add(
            TextEdit::singleline(&mut draft.text)
                .hint_text(format!("Search {}", draft.field.title()))
                .desired_width(160.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Search").clicked() || submitted {
            log::debug!("Search {} for {:?}", page.search_draft.field, page.search_draft.text);
            page.confirm_search();
        }
        if ui.button("Reset").clicked() {
            page.reset_search();
        }
    });

    ui.horizontal(|ui| {
        ui.label("First name:");
        for name in FIRST_NAME_FILTERS {
            let mut checked = page.query.first_name_filters().contains(name);
            if ui.checkbox(&mut checked, name).changed() {
                page.toggle_first_name(name);
            }
        }
    });
}

#[cfg(test)]
mod search_bar_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tabula_business::{DemoConfig, Field, TablePage};

    fn harness() -> Harness<'static, TablePage> {
        Harness::new_ui_state(
            |ui, page: &mut TablePage| super::search_bar(page, ui),
            TablePage::new(DemoConfig::new(40, Some(11)).generate_rows()),
        )
    }

    #[test]
    fn test_search_button_confirms_draft() {
        let mut harness = harness();
        harness.state_mut().search_draft.text = "ross".to_owned();

        harness.get_by_label("Search").click();
        harness.run();

        let page = harness.state();
        assert_eq!(page.query.searched_field(), Some(Field::LastName));
        assert!(
            page.visible_rows().iter().all(|row| row.last_name == "Rossini"),
            "Only Rossini should match 'ross'"
        );
    }

    #[test]
    fn test_reset_clears_search() {
        let mut harness = harness();
        harness.state_mut().search_draft.text = "ross".to_owned();
        harness.get_by_label("Search").click();
        harness.run();

        harness.get_by_label("Reset").click();
        harness.run();

        let page = harness.state();
        assert!(page.query.search().is_none());
        assert!(page.search_draft.text.is_empty());
        assert_eq!(page.visible_count(), 40);
    }

    #[test]
    fn test_first_name_checkbox_filters_rows() {
        let mut harness = harness();

        harness.get_by_label("Jon").click();
        harness.run();

        let page = harness.state();
        assert!(page.query.first_name_filters().contains("Jon"));
        assert!(page.visible_rows().iter().all(|row| row.first_name.starts_with("Jon")));
    }
}
