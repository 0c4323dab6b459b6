//! Header row of the table view.

use egui::{Button, Ui};
use egui_extras::TableRow;
use tabula_business::{COLUMNS, ColumnDef, PageAction, SortOrder, TableQuery};

use super::cells::render_select_cell;

/// Header label, with an arrow on the sorted column.
fn header_label(column: &ColumnDef, query: &TableQuery) -> String {
    match query.sort_order(column.key) {
        Some(SortOrder::Ascending) => format!("{} ⬆", column.title),
        Some(SortOrder::Descending) => format!("{} ⬇", column.title),
        None => column.title.to_owned(),
    }
}

/// Renders a header cell. Sortable columns are buttons that cycle the sort.
#[inline]
pub fn render_header_cell(ui: &mut Ui, column: &ColumnDef, query: &TableQuery) -> bool {
    let label = header_label(column, query);
    if column.sortable {
        ui.add(Button::new(egui::RichText::new(label).strong()).frame(false))
            .on_hover_text("Sort")
            .clicked()
    } else {
        ui.strong(label);
        false
    }
}

/// Renders the table header and collects the actions it triggers.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    query: &TableQuery,
    row_selection: bool,
    page_fully_selected: bool,
    actions: &mut Vec<PageAction>,
) {
    if row_selection {
        header.col(|ui| {
            if render_select_cell(ui, page_fully_selected) {
                actions.push(PageAction::SelectPage(!page_fully_selected));
            }
        });
    }

    for column in &COLUMNS {
        header.col(|ui| {
            if render_header_cell(ui, column, query) {
                actions.push(PageAction::ToggleSort(column.key));
            }
        });
    }

    header.col(|ui| {
        ui.strong("Action");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_business::column;

    #[test]
    fn test_header_label_shows_sort_direction() {
        let age = column("age").unwrap();
        let mut query = TableQuery::new();
        assert_eq!(header_label(age, &query), "Age");

        query.toggle_sort("age");
        assert_eq!(header_label(age, &query), "Age ⬆");

        query.toggle_sort("age");
        assert_eq!(header_label(age, &query), "Age ⬇");
    }
}
