//! Column layout of the table view.

use egui_extras::Column;
use tabula_business::{COLUMNS, XScroll};

pub const SELECT_WIDTH: f32 = 28.0;
pub const ACTION_WIDTH: f32 = 80.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Smallest width a column shrinks to in the `Unset` mode.
const MIN_WIDTH: f32 = 40.0;

/// Column for a data column of the given preferred width.
fn data_column(width: f32, x_scroll: XScroll, clip: bool) -> Column {
    match x_scroll {
        XScroll::Unset => Column::remainder().at_least(MIN_WIDTH).clip(true),
        XScroll::Scroll => Column::initial(width)
            .at_least(MIN_WIDTH)
            .resizable(true)
            .clip(clip),
        XScroll::Fixed => Column::exact(width).clip(clip),
    }
}

/// Table column configuration, in order:
/// - selection checkbox (when row selection is on)
/// - one column per entry of [`COLUMNS`]
/// - delete action
#[inline]
pub fn table_columns(x_scroll: XScroll, row_selection: bool, clip: bool) -> Vec<Column> {
    let mut columns = Vec::with_capacity(COLUMNS.len() + 2);
    if row_selection {
        columns.push(Column::exact(SELECT_WIDTH));
    }
    columns.extend(
        COLUMNS
            .iter()
            .map(|column| data_column(column.width, x_scroll, clip)),
    );
    columns.push(Column::exact(ACTION_WIDTH));
    columns
}
