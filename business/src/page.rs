//! State owned by one mounted table page.
//!
//! Renderers read from [`TablePage`] while drawing and report what the user
//! did through [`PageAction`]s, which are applied once the frame's table has
//! been drawn.

use std::collections::BTreeSet;

use crate::{
    Dataset, EditSession, Expansion, Field, Pagination, Record, RowKey, TableQuery, TableSettings,
    VisibleRow,
};

/// A user interaction collected while drawing the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// An editable cell was committed.
    Save(Record),
    Delete(u32),
    ToggleSelected(u32),
    /// Select or clear every row of the current page.
    SelectPage(bool),
    ToggleExpanded(RowKey),
    ToggleSort(&'static str),
    GoToPage(usize),
    SetPageSize(usize),
}

/// Borrowed snapshot of a page for one frame of drawing.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Current page with unfolded children, in render order.
    pub rows: Vec<VisibleRow<'a>>,
    pub settings: &'a TableSettings,
    pub query: &'a TableQuery,
    pub pagination: Pagination,
    /// Visible top-level rows across all pages.
    pub total: usize,
    pub selected: &'a BTreeSet<u32>,
    pub page_fully_selected: bool,
}

/// One table page: its dataset plus everything the settings panel and the
/// table controls change.
#[derive(Debug, Clone)]
pub struct TablePage {
    dataset: Dataset,
    pub settings: TableSettings,
    pub query: TableQuery,
    pub pagination: Pagination,
    pub edit: EditSession,
    pub search_draft: SearchDraft,
    selected: BTreeSet<u32>,
    expansion: Expansion,
}

/// Text typed into the search bar that has not been confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDraft {
    pub field: Field,
    pub text: String,
}

impl Default for SearchDraft {
    fn default() -> Self {
        Self {
            field: Field::LastName,
            text: String::new(),
        }
    }
}

impl TablePage {
    pub fn new(rows: Vec<Record>) -> Self {
        Self {
            dataset: Dataset::new(rows),
            settings: TableSettings::default(),
            query: TableQuery::default(),
            pagination: Pagination::default(),
            edit: EditSession::default(),
            search_draft: SearchDraft::default(),
            selected: BTreeSet::new(),
            expansion: Expansion::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    /// Filtered and sorted top-level rows. Empty when "has data" is off.
    pub fn visible_rows(&self) -> Vec<&Record> {
        if !self.settings.has_data() {
            return Vec::new();
        }
        self.query.apply(self.dataset.rows())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Top-level rows of the current page.
    pub fn page_rows(&self) -> Vec<&Record> {
        let mut rows = self.visible_rows();
        let range = self.pagination.range(rows.len());
        rows.truncate(range.end);
        rows.drain(..range.start);
        rows
    }

    /// Rows of the current page with their unfolded children, in render order.
    pub fn flat_page_rows(&self) -> Vec<VisibleRow<'_>> {
        self.expansion.flatten(&self.page_rows())
    }

    /// Whether every row on the current page is selected.
    pub fn page_fully_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|row| self.selected.contains(&row.id))
    }

    /// Splits the page into what renderers read and the edit session they drive.
    pub fn render_parts(&mut self) -> (PageView<'_>, &mut EditSession) {
        let Self {
            dataset,
            settings,
            query,
            pagination,
            edit,
            selected,
            expansion,
            ..
        } = self;

        let visible = if settings.has_data() {
            query.apply(dataset.rows())
        } else {
            Vec::new()
        };
        let total = visible.len();
        let page_rows = &visible[pagination.range(total)];
        let page_fully_selected =
            !page_rows.is_empty() && page_rows.iter().all(|row| selected.contains(&row.id));

        let view = PageView {
            rows: expansion.flatten(page_rows),
            settings,
            query,
            pagination: *pagination,
            total,
            selected,
            page_fully_selected,
        };
        (view, edit)
    }

    /// Applies actions collected during the frame.
    pub fn apply(&mut self, actions: impl IntoIterator<Item = PageAction>) {
        for action in actions {
            self.apply_one(action);
        }
        self.pagination.clamp(self.visible_count());
    }

    fn apply_one(&mut self, action: PageAction) {
        match action {
            PageAction::Save(row) => {
                self.dataset.save(row);
            }
            PageAction::Delete(id) => self.delete(id),
            PageAction::ToggleSelected(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            PageAction::SelectPage(select) => {
                let ids: Vec<u32> = self.page_rows().iter().map(|row| row.id).collect();
                if select {
                    self.selected.extend(ids);
                } else {
                    for id in ids {
                        self.selected.remove(&id);
                    }
                }
            }
            PageAction::ToggleExpanded(key) => self.expansion.toggle(key),
            PageAction::ToggleSort(key) => self.query.toggle_sort(key),
            PageAction::GoToPage(page) => {
                let total = self.visible_count();
                self.pagination.set_page(page, total);
            }
            PageAction::SetPageSize(size) => {
                let total = self.visible_count();
                self.pagination.set_page_size(size, total);
            }
        }
    }

    /// Removes a top-level row by id, with its selection and expansion.
    pub fn delete(&mut self, id: u32) {
        if self.dataset.delete(id) {
            self.selected.remove(&id);
            self.expansion.forget(id);
        }
    }

    /// Confirms the search bar draft.
    pub fn confirm_search(&mut self) {
        self.query
            .set_search(self.search_draft.field, &self.search_draft.text);
        self.pagination.set_page(0, self.visible_count());
    }

    /// Clears both the draft and the confirmed search.
    pub fn reset_search(&mut self) {
        self.search_draft.text.clear();
        self.query.clear_search();
        self.pagination.clamp(self.visible_count());
    }

    pub fn toggle_first_name(&mut self, name: &'static str) {
        self.query.toggle_first_name(name);
        self.pagination.set_page(0, self.visible_count());
    }
}
