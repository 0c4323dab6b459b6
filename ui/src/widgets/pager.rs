//! Pagination controls drawn above or below a table.

use egui::{Button, ComboBox, Id, Ui};
use tabula_business::{PAGE_SIZE_OPTIONS, PageAction, PagerAlign, Pagination};

/// Offset before the pager so that it lands at `align`.
///
/// egui lays out left to right in one pass, so the pager width is taken
/// from the previous frame.
fn lead_space(ui: &Ui, id: Id, align: PagerAlign) -> f32 {
    let width: f32 = ui.data(|data| data.get_temp(id)).unwrap_or_default();
    let free = (ui.available_width() - width).max(0.0);
    match align {
        PagerAlign::Left => 0.0,
        PagerAlign::Center => free / 2.0,
        PagerAlign::Right => free,
    }
}

/// Displays previous/next buttons, the page position and a page size picker.
///
/// `id_salt` separates pagers drawn on the same page.
pub fn pager(
    ui: &mut Ui,
    id_salt: &str,
    pagination: Pagination,
    total: usize,
    align: PagerAlign,
) -> Option<PageAction> {
    let id = ui.id().with(("pager", id_salt));
    let mut action = None;

    ui.horizontal(|ui| {
        ui.add_space(lead_space(ui, id, align));

        let inner = ui.scope(|ui| {
            if ui
                .add_enabled(pagination.has_previous(), Button::new("Previous"))
                .clicked()
            {
                action = Some(PageAction::GoToPage(pagination.page().saturating_sub(1)));
            }

            ui.label(format!(
                "Page {} of {}",
                pagination.page() + 1,
                pagination.page_count(total)
            ));

            if ui
                .add_enabled(pagination.has_next(total), Button::new("Next"))
                .clicked()
            {
                action = Some(PageAction::GoToPage(pagination.page() + 1));
            }

            let mut page_size = pagination.page_size();
            ComboBox::from_id_salt(id.with("size"))
                .selected_text(format!("{page_size} / page"))
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZE_OPTIONS {
                        ui.selectable_value(&mut page_size, size, format!("{size} / page"));
                    }
                });
            if page_size != pagination.page_size() {
                action = Some(PageAction::SetPageSize(page_size));
            }

            ui.label(format!("{total} rows"));
        });

        let width = inner.response.rect.width();
        ui.data_mut(|data| data.insert_temp(id, width));
    });

    action
}

#[cfg(test)]
mod pager_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tabula_business::{PageAction, PagerAlign, Pagination};

    struct PagerState {
        pagination: Pagination,
        total: usize,
        actions: Vec<PageAction>,
    }

    fn harness(total: usize, align: PagerAlign) -> Harness<'static, PagerState> {
        Harness::new_ui_state(
            move |ui, state: &mut PagerState| {
                if let Some(action) = super::pager(ui, "test", state.pagination, state.total, align)
                {
                    match &action {
                        PageAction::GoToPage(page) => {
                            state.pagination.set_page(*page, state.total);
                        }
                        PageAction::SetPageSize(size) => {
                            state.pagination.set_page_size(*size, state.total);
                        }
                        _ => {}
                    }
                    state.actions.push(action);
                }
            },
            PagerState {
                pagination: Pagination::default(),
                total,
                actions: Vec::new(),
            },
        )
    }

    #[test]
    fn test_pager_shows_position() {
        let harness = harness(35, PagerAlign::Right);
        assert!(harness.query_by_label("Page 1 of 4").is_some());
        assert!(harness.query_by_label("35 rows").is_some());
    }

    #[test]
    fn test_next_and_previous_move_pages() {
        let mut harness = harness(35, PagerAlign::Left);

        harness.get_by_label("Next").click();
        harness.run();
        assert_eq!(harness.state().pagination.page(), 1);
        assert!(harness.query_by_label("Page 2 of 4").is_some());

        harness.get_by_label("Previous").click();
        harness.run();
        assert_eq!(harness.state().pagination.page(), 0);
        assert_eq!(
            harness.state().actions,
            vec![PageAction::GoToPage(1), PageAction::GoToPage(0)]
        );
    }

    #[test]
    fn test_single_page_has_no_next() {
        let mut harness = harness(3, PagerAlign::Center);

        harness.get_by_label("Next").click();
        harness.run();

        assert_eq!(harness.state().pagination.page(), 0);
        assert!(harness.state().actions.is_empty());
    }
}
