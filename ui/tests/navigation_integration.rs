//! Navigation between the grid and table views.

use kittest::Queryable;
use tabula_business::{PageAction, Route};

use crate::common::{TEST_ROWS, TestCtx};

mod common;

#[test]
fn test_app_starts_on_grid_view() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    assert_eq!(harness.state().state().route, Route::Grid);
    assert!(harness.query_by_label("Grid View").is_some());
    assert!(harness.query_by_label("Table View").is_some());
    assert!(
        harness.query_by_label("Search by").is_none(),
        "The search bar belongs to the table view only"
    );
}

#[test]
fn test_switching_route_mounts_fresh_dataset() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    harness
        .state_mut()
        .state_mut()
        .page
        .apply([PageAction::Delete(1), PageAction::Delete(2)]);
    assert_eq!(harness.state().state().page.dataset().len(), TEST_ROWS - 2);

    harness.get_by_label("Table View").click();
    harness.run();

    let state = harness.state().state();
    assert_eq!(state.route, Route::Table);
    assert_eq!(state.page.dataset().len(), TEST_ROWS);
    assert!(harness.query_by_label("Search by").is_some());
}

#[test]
fn test_clicking_current_route_keeps_page() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    harness
        .state_mut()
        .state_mut()
        .page
        .apply([PageAction::Delete(3)]);

    harness.get_by_label("Grid View").click();
    harness.run();

    assert_eq!(harness.state().state().page.dataset().len(), TEST_ROWS - 1);
}
