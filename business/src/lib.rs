//! Data and table logic for the Tabula demo, free of any UI framework.

mod columns;
mod config;
mod dataset;
mod edit;
mod error;
mod generator;
mod page;
mod pagination;
mod query;
mod record;
mod route;
mod settings;
mod tree;

pub use columns::{COLUMNS, ColumnDef, ColumnKind, FULL_NAME_KEY, column};
pub use config::{DEFAULT_ROWS, DemoConfig};
pub use dataset::{Dataset, SaveRow};
pub use edit::{CellMode, EditSession, EditState};
pub use error::FieldError;
pub use generator::{EMAIL_DOMAINS, NAMES, generate, generate_random_data};
pub use page::{PageAction, PageView, SearchDraft, TablePage};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pagination};
pub use query::{ColumnSearch, FIRST_NAME_FILTERS, SortOrder, SortState, TableQuery};
pub use record::{Field, Record};
pub use route::Route;
pub use settings::{PagerAlign, TableSettings, TableSize, XScroll, Y_SCROLL_HEIGHT};
pub use tree::{Expansion, RowKey, VisibleRow};
