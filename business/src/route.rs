//! Route state for page navigation.
//!
//! This module defines the route enum that determines which table page to display.

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Rows drawn with `egui::Grid`.
    #[default]
    Grid,
    /// Rows drawn with `egui_extras::TableBuilder`.
    Table,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Grid, Self::Table];

    /// Text of the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid View",
            Self::Table => "Table View",
        }
    }
}
