//! The in-memory rows owned by a table page.

use crate::Record;

/// Receiver of rows committed by an editable cell.
pub trait SaveRow {
    /// Merges `row` into the stored row with the same id.
    ///
    /// Returns `false` when no top-level row has that id.
    fn save_row(&mut self, row: Record) -> bool;
}

/// Top-level sequence of records.
///
/// Lookups by id only look at the top level, never into children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Record> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Replaces the row with `row.id` in place by a shallow merge.
    pub fn save(&mut self, row: Record) -> bool {
        let Some(existing) = self.rows.iter_mut().find(|item| item.id == row.id) else {
            log::debug!("No top-level row with id {}, edit dropped", row.id);
            return false;
        };

        log::debug!("Saving row {}", row.id);
        existing.merge(row);
        true
    }

    /// Removes the row with `id`, keeping the order of the others.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;

        if removed {
            log::debug!("Deleted row {id}");
        } else {
            log::debug!("No top-level row with id {id}, delete ignored");
        }
        removed
    }
}

impl SaveRow for Dataset {
    fn save_row(&mut self, row: Record) -> bool {
        self.save(row)
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(rows: Vec<Record>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, generate};
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    fn dataset(count: usize) -> Dataset {
        Dataset::new(generate(count, &mut StdRng::seed_from_u64(11)))
    }

    #[test]
    fn test_save_merges_edited_age() {
        let mut data = dataset(6);
        let before = data.get(5).cloned().unwrap();

        let edited = before.with_field(Field::Age, "42").unwrap();
        assert!(data.save(edited));

        let after = data.get(5).unwrap();
        assert_eq!(after.age, 42);
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.last_name, before.last_name);
        assert_eq!(after.phone_number, before.phone_number);
        assert_eq!(after.email, before.email);
        assert_eq!(after.children, before.children);
        assert_eq!(data.rows()[4].id, 5, "position is preserved");
    }

    #[test]
    fn test_save_twice_equals_save_once() {
        let mut once = dataset(4);
        let edited = once.rows()[1].with_field(Field::LastName, "Stark").unwrap();

        once.save(edited.clone());
        let mut twice = once.clone();
        twice.save(edited);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_save_unknown_id_is_noop() {
        let mut data = dataset(3);
        let snapshot = data.clone();

        let mut stranger = data.rows()[0].clone();
        stranger.id = 1_000_000;
        stranger.first_name = "Nobody".to_owned();

        assert!(!data.save_row(stranger));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_save_does_not_search_children() {
        let mut data = dataset(1);
        let snapshot = data.clone();

        let child = data.rows()[0].children.as_ref().unwrap()[0].clone();
        // Child ids may collide with top-level ids, skip that unlucky case.
        if child.id != 1 {
            let edited = child.with_field(Field::FirstName, "Changed").unwrap();
            assert!(!data.save(edited));
            assert_eq!(data, snapshot);
        }
    }

    #[test]
    fn test_delete_removes_one_row_keeping_order() {
        let mut data = dataset(5);

        assert!(data.delete(3));

        let ids: Vec<u32> = data.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut data = dataset(2);
        assert!(!data.delete(99));
        assert_eq!(data.len(), 2);
    }
}
