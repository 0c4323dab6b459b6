//! Filtering, searching and sorting of the top-level rows.

use std::collections::BTreeSet;

use crate::columns::{ColumnDef, column};
use crate::{Field, Record};

/// Names offered by the first-name filter.
pub const FIRST_NAME_FILTERS: [&str; 4] = ["Cersei", "Jon", "Arya", "Rossini"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub order: SortOrder,
}

/// A confirmed column search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSearch {
    pub field: Field,
    pub text: String,
}

impl ColumnSearch {
    /// Case-insensitive substring match on the field text.
    pub fn matches(&self, row: &Record) -> bool {
        row.field_text(self.field)
            .to_lowercase()
            .contains(&self.text.to_lowercase())
    }
}

/// Everything that decides which top-level rows are shown and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    sort: Option<SortState>,
    search: Option<ColumnSearch>,
    first_names: BTreeSet<&'static str>,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn search(&self) -> Option<&ColumnSearch> {
        self.search.as_ref()
    }

    /// Field of the active search, used to highlight matches.
    pub fn searched_field(&self) -> Option<Field> {
        self.search.as_ref().map(|search| search.field)
    }

    /// Cycles the sort of `key`: none, ascending, descending, none.
    ///
    /// Switching to another column starts that column at ascending.
    pub fn toggle_sort(&mut self, key: &'static str) {
        if column(key).is_none_or(|col| !col.sortable) {
            return;
        }

        self.sort = match self.sort {
            Some(SortState {
                column,
                order: SortOrder::Ascending,
            }) if column == key => Some(SortState {
                column: key,
                order: SortOrder::Descending,
            }),
            Some(SortState {
                column,
                order: SortOrder::Descending,
            }) if column == key => None,
            _ => Some(SortState {
                column: key,
                order: SortOrder::Ascending,
            }),
        };
    }

    pub fn sort_order(&self, key: &str) -> Option<SortOrder> {
        self.sort
            .filter(|sort| sort.column == key)
            .map(|sort| sort.order)
    }

    /// Confirms a search. Empty text clears it.
    pub fn set_search(&mut self, field: Field, text: &str) {
        let text = text.trim();
        self.search = if text.is_empty() {
            None
        } else {
            log::debug!("Searching {field} for {text:?}");
            Some(ColumnSearch {
                field,
                text: text.to_owned(),
            })
        };
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    pub fn first_name_filters(&self) -> &BTreeSet<&'static str> {
        &self.first_names
    }

    pub fn toggle_first_name(&mut self, name: &'static str) {
        if !self.first_names.remove(name) {
            self.first_names.insert(name);
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.search.is_some() || !self.first_names.is_empty()
    }

    fn keeps(&self, row: &Record) -> bool {
        let name_ok = self.first_names.is_empty()
            || self
                .first_names
                .iter()
                .any(|name| row.first_name.starts_with(name));
        let search_ok = self.search.as_ref().is_none_or(|search| search.matches(row));
        name_ok && search_ok
    }

    /// The rows to show, filtered and sorted.
    pub fn apply<'a>(&self, rows: &'a [Record]) -> Vec<&'a Record> {
        let mut visible: Vec<&Record> = rows.iter().filter(|row| self.keeps(row)).collect();

        if let Some(sort) = self.sort
            && let Some(col) = column(sort.column)
        {
            sort_rows(&mut visible, col, sort.order);
        }
        visible
    }
}

fn sort_rows(rows: &mut [&Record], col: &ColumnDef, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = col.compare(a, b);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u32, first: &str, last: &str, age: u8) -> Record {
        Record {
            id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            age,
            phone_number: "+1-100-200-3000".to_owned(),
            email: "a.b@gmail.com".to_owned(),
            children: None,
        }
    }

    fn rows() -> Vec<Record> {
        vec![
            person(1, "Jon", "Rossini", 40),
            person(2, "Cersei", "Harvey", 12),
            person(3, "Arya", "Ferrara", 77),
            person(4, "Jaime", "Rossini", 12),
            person(5, "Jon", "Arya", 5),
        ]
    }

    fn ids(rows: &[&Record]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let data = rows();
        assert_eq!(ids(&TableQuery::new().apply(&data)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_cycles_through_orders() {
        let data = rows();
        let mut query = TableQuery::new();

        query.toggle_sort("age");
        assert_eq!(query.sort_order("age"), Some(SortOrder::Ascending));
        assert_eq!(ids(&query.apply(&data)), vec![5, 2, 4, 1, 3]);

        query.toggle_sort("age");
        assert_eq!(query.sort_order("age"), Some(SortOrder::Descending));
        assert_eq!(ids(&query.apply(&data)), vec![3, 1, 2, 4, 5]);

        query.toggle_sort("age");
        assert_eq!(query.sort(), None);
        assert_eq!(ids(&query.apply(&data)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_switching_column_restarts_ascending() {
        let mut query = TableQuery::new();
        query.toggle_sort("age");
        query.toggle_sort("age");
        query.toggle_sort("lastName");
        assert_eq!(query.sort_order("lastName"), Some(SortOrder::Ascending));
        assert_eq!(query.sort_order("age"), None);
    }

    #[test]
    fn test_unsortable_columns_are_ignored() {
        let mut query = TableQuery::new();
        query.toggle_sort("email");
        query.toggle_sort("missing");
        assert_eq!(query.sort(), None);
    }

    #[test]
    fn test_sort_by_last_name_is_stable() {
        let data = rows();
        let mut query = TableQuery::new();
        query.toggle_sort("lastName");
        assert_eq!(ids(&query.apply(&data)), vec![5, 3, 2, 1, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let data = rows();
        let mut query = TableQuery::new();
        query.set_search(Field::LastName, "ROSS");
        assert_eq!(ids(&query.apply(&data)), vec![1, 4]);
        assert_eq!(query.searched_field(), Some(Field::LastName));
    }

    #[test]
    fn test_search_on_age_matches_digits() {
        let data = rows();
        let mut query = TableQuery::new();
        query.set_search(Field::Age, "7");
        assert_eq!(ids(&query.apply(&data)), vec![3]);
    }

    #[test]
    fn test_blank_search_clears() {
        let mut query = TableQuery::new();
        query.set_search(Field::LastName, "x");
        query.set_search(Field::LastName, "   ");
        assert!(query.search().is_none());
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_first_name_filter_uses_prefix_of_any_selected() {
        let data = rows();
        let mut query = TableQuery::new();
        query.toggle_first_name("Jon");
        query.toggle_first_name("Arya");
        assert_eq!(ids(&query.apply(&data)), vec![1, 3, 5]);

        query.toggle_first_name("Jon");
        assert_eq!(ids(&query.apply(&data)), vec![3]);
    }

    #[test]
    fn test_filter_search_and_sort_combine() {
        let data = rows();
        let mut query = TableQuery::new();
        query.toggle_first_name("Jon");
        query.set_search(Field::LastName, "a");
        query.toggle_sort("age");
        query.toggle_sort("age");
        assert_eq!(ids(&query.apply(&data)), vec![5]);
    }
}
