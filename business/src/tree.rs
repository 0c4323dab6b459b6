//! Flattening of nested rows for renderers that only draw flat lists.

use std::collections::HashSet;

use crate::Record;

/// Position of a row in the tree.
///
/// Top-level ids are unique; child ids are not, so nested rows are
/// addressed by their position under the top-level row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub root: u32,
    pub child: Option<usize>,
    pub grandchild: Option<usize>,
}

impl RowKey {
    pub fn root(id: u32) -> Self {
        Self {
            root: id,
            child: None,
            grandchild: None,
        }
    }

    pub fn depth(&self) -> usize {
        usize::from(self.child.is_some()) + usize::from(self.grandchild.is_some())
    }

    fn nested(&self, position: usize) -> Self {
        match self.child {
            None => Self {
                child: Some(position),
                ..*self
            },
            Some(_) => Self {
                grandchild: Some(position),
                ..*self
            },
        }
    }
}

/// A row placed in render order.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub record: &'a Record,
    pub key: RowKey,
    pub expanded: bool,
}

impl VisibleRow<'_> {
    pub fn depth(&self) -> usize {
        self.key.depth()
    }

    pub fn is_top_level(&self) -> bool {
        self.key.child.is_none()
    }
}

/// Rows with children that are currently unfolded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    open: HashSet<RowKey>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.open.contains(key)
    }

    pub fn toggle(&mut self, key: RowKey) {
        if !self.open.remove(&key) {
            self.open.insert(key);
        }
    }

    /// Forgets every node under the top-level row `root`.
    pub fn forget(&mut self, root: u32) {
        self.open.retain(|key| key.root != root);
    }

    /// Appends `rows` and their unfolded descendants to a flat list.
    pub fn flatten<'a>(&self, rows: &[&'a Record]) -> Vec<VisibleRow<'a>> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            self.push(&mut out, row, RowKey::root(row.id));
        }
        out
    }

    fn push<'a>(&self, out: &mut Vec<VisibleRow<'a>>, record: &'a Record, key: RowKey) {
        let expanded = record.has_children() && self.is_expanded(&key);
        out.push(VisibleRow {
            record,
            key,
            expanded,
        });

        if expanded && let Some(children) = &record.children {
            for (position, child) in children.iter().enumerate() {
                self.push(out, child, key.nested(position));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    fn data() -> Vec<Record> {
        generate(4, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_collapsed_tree_is_top_level_only() {
        let rows = data();
        let refs: Vec<&Record> = rows.iter().collect();
        let flat = Expansion::new().flatten(&refs);

        assert_eq!(flat.len(), 4);
        assert!(flat.iter().all(|row| row.is_top_level() && !row.expanded));
    }

    #[test]
    fn test_expanding_root_shows_children_only() {
        let rows = data();
        let refs: Vec<&Record> = rows.iter().collect();
        let mut expansion = Expansion::new();
        expansion.toggle(RowKey::root(1));

        let flat = expansion.flatten(&refs);
        assert_eq!(flat.len(), 4 + 3);
        assert!(flat[0].expanded);
        let depths: Vec<usize> = flat.iter().map(VisibleRow::depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 1, 0, 0, 0]);
        assert_eq!(flat[2].key.child, Some(1));
    }

    #[test]
    fn test_expanding_child_shows_grandchild() {
        let rows = data();
        let refs: Vec<&Record> = rows.iter().collect();
        let mut expansion = Expansion::new();
        expansion.toggle(RowKey::root(1));
        let child = RowKey::root(1).nested(2);
        expansion.toggle(child);

        let flat = expansion.flatten(&refs);
        assert_eq!(flat.len(), 4 + 3 + 1);
        assert_eq!(flat[4].depth(), 2);
        assert_eq!(flat[4].key.grandchild, Some(0));
    }

    #[test]
    fn test_child_expansion_hidden_when_root_collapsed() {
        let rows = data();
        let refs: Vec<&Record> = rows.iter().collect();
        let mut expansion = Expansion::new();
        expansion.toggle(RowKey::root(1).nested(0));

        assert_eq!(expansion.flatten(&refs).len(), 4);
    }

    #[test]
    fn test_rows_without_children_never_expand() {
        let rows = data();
        let refs: Vec<&Record> = rows.iter().collect();
        let mut expansion = Expansion::new();
        expansion.toggle(RowKey::root(2));

        let flat = expansion.flatten(&refs);
        assert_eq!(flat.len(), 4);
        assert!(!flat[1].expanded);
    }

    #[test]
    fn test_forget_drops_nodes_of_root() {
        let mut expansion = Expansion::new();
        expansion.toggle(RowKey::root(1));
        expansion.toggle(RowKey::root(1).nested(0));
        expansion.toggle(RowKey::root(3));

        expansion.forget(1);
        assert!(!expansion.is_expanded(&RowKey::root(1)));
        assert!(expansion.is_expanded(&RowKey::root(3)));
    }
}
