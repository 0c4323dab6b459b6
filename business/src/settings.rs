//! Display options toggled from the settings panel.
//!
//! None of these touch the dataset. They only change how a renderer draws it.

use std::fmt;

/// Row density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSize {
    #[default]
    Large,
    Middle,
    Small,
}

impl TableSize {
    pub const ALL: [Self; 3] = [Self::Large, Self::Middle, Self::Small];

    pub fn label(self) -> &'static str {
        match self {
            Self::Large => "Large",
            Self::Middle => "Middle",
            Self::Small => "Small",
        }
    }

    /// Height of a body row in points.
    pub fn row_height(self) -> f32 {
        match self {
            Self::Large => 36.0,
            Self::Middle => 28.0,
            Self::Small => 22.0,
        }
    }
}

/// Horizontal scrolling behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XScroll {
    /// Columns shrink to fit the available width.
    Unset,
    /// Columns keep their width and the table scrolls sideways.
    #[default]
    Scroll,
    /// Like `Scroll`, with fixed (non-resizable) column widths.
    Fixed,
}

impl XScroll {
    pub const ALL: [Self; 3] = [Self::Unset, Self::Scroll, Self::Fixed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => "Unset",
            Self::Scroll => "Scroll",
            Self::Fixed => "Fixed Columns",
        }
    }

    pub fn scrolls(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Horizontal placement of a pager bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAlign {
    Left,
    Center,
    Right,
}

impl PagerAlign {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

impl fmt::Display for PagerAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        })
    }
}

/// Body height used when vertical scrolling is on.
pub const Y_SCROLL_HEIGHT: f32 = 600.0;

/// Every option of the settings panel, owned by one page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    bordered: bool,
    loading: bool,
    size: TableSize,
    show_title: bool,
    show_header: bool,
    show_footer: bool,
    row_selection: bool,
    has_data: bool,
    ellipsis: bool,
    y_scroll: bool,
    x_scroll: XScroll,
    pagination_top: Option<PagerAlign>,
    pagination_bottom: Option<PagerAlign>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            bordered: true,
            loading: false,
            size: TableSize::Large,
            show_title: false,
            show_header: true,
            show_footer: true,
            row_selection: true,
            has_data: true,
            ellipsis: false,
            y_scroll: true,
            x_scroll: XScroll::Scroll,
            pagination_top: None,
            pagination_bottom: Some(PagerAlign::Right),
        }
    }
}

impl TableSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bordered(&self) -> bool {
        self.bordered
    }

    pub fn set_bordered(&mut self, enable: bool) {
        self.bordered = enable;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, enable: bool) {
        self.loading = enable;
    }

    pub fn size(&self) -> TableSize {
        self.size
    }

    pub fn set_size(&mut self, size: TableSize) {
        self.size = size;
    }

    pub fn show_title(&self) -> bool {
        self.show_title
    }

    pub fn set_show_title(&mut self, enable: bool) {
        self.show_title = enable;
    }

    pub fn show_header(&self) -> bool {
        self.show_header
    }

    pub fn set_show_header(&mut self, enable: bool) {
        self.show_header = enable;
    }

    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    pub fn set_show_footer(&mut self, enable: bool) {
        self.show_footer = enable;
    }

    pub fn row_selection(&self) -> bool {
        self.row_selection
    }

    pub fn set_row_selection(&mut self, enable: bool) {
        self.row_selection = enable;
    }

    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn set_has_data(&mut self, enable: bool) {
        self.has_data = enable;
    }

    pub fn ellipsis(&self) -> bool {
        self.ellipsis
    }

    pub fn set_ellipsis(&mut self, enable: bool) {
        self.ellipsis = enable;
    }

    pub fn y_scroll(&self) -> bool {
        self.y_scroll
    }

    pub fn set_y_scroll(&mut self, enable: bool) {
        self.y_scroll = enable;
    }

    pub fn x_scroll(&self) -> XScroll {
        self.x_scroll
    }

    pub fn set_x_scroll(&mut self, mode: XScroll) {
        self.x_scroll = mode;
    }

    pub fn pagination_top(&self) -> Option<PagerAlign> {
        self.pagination_top
    }

    pub fn set_pagination_top(&mut self, align: Option<PagerAlign>) {
        self.pagination_top = align;
    }

    pub fn pagination_bottom(&self) -> Option<PagerAlign> {
        self.pagination_bottom
    }

    pub fn set_pagination_bottom(&mut self, align: Option<PagerAlign>) {
        self.pagination_bottom = align;
    }

    /// Maximum body height, `None` when the body grows with its rows.
    pub fn body_height(&self) -> Option<f32> {
        self.y_scroll.then_some(Y_SCROLL_HEIGHT)
    }
}
