use egui::{Button, Ui};
use tabula_business::Route;

/// Draws one button per route, the current one shown as selected.
///
/// Returns the route that was clicked, if any.
pub fn nav(ui: &mut Ui, current: Route) -> Option<Route> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for route in Route::ALL {
            let button = Button::new(route.label()).selected(route == current);
            if ui.add(button).clicked() {
                clicked = Some(route);
            }
        }
    });

    clicked
}

#[cfg(test)]
mod nav_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tabula_business::Route;

    #[test]
    fn test_nav_shows_both_routes() {
        let harness = Harness::new_ui_state(
            |ui, route: &mut Route| {
                super::nav(ui, *route);
            },
            Route::Grid,
        );

        assert!(harness.query_by_label("Grid View").is_some());
        assert!(harness.query_by_label("Table View").is_some());
    }

    #[test]
    fn test_nav_click_reports_route() {
        let mut harness = Harness::new_ui_state(
            |ui, route: &mut Route| {
                if let Some(next) = super::nav(ui, *route) {
                    *route = next;
                }
            },
            Route::Grid,
        );

        harness.get_by_label("Table View").click();
        harness.run();

        assert_eq!(*harness.state(), Route::Table);
    }
}
