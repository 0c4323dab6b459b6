pub mod editable_cell;
mod grid;
mod nav;
mod pager;
mod search_bar;
mod settings_panel;
pub mod table;

pub use editable_cell::editable_cell;
pub use grid::grid_view;
pub use nav::nav;
pub use pager::pager;
pub use search_bar::search_bar;
pub use settings_panel::settings_panel;
pub use table::table_view;
