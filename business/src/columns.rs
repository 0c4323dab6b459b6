//! Column definitions shared by both table views.

use std::cmp::Ordering;

use crate::{Field, Record};

/// What a column shows.
#[derive(Debug, Clone, Copy)]
pub enum ColumnKind {
    /// A stored field of the record.
    Data(Field),
    /// A display-only value derived from the record.
    Computed(fn(&Record) -> String),
}

/// One data column of a table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    /// Whether the column takes part in the column search.
    pub searchable: bool,
    /// Preferred width in points.
    pub width: f32,
}

impl ColumnDef {
    const fn data(field: Field, width: f32, sortable: bool, searchable: bool) -> Self {
        Self {
            key: field.key(),
            title: field.title(),
            kind: ColumnKind::Data(field),
            sortable,
            searchable,
            width,
        }
    }

    /// The backing field, `None` for computed columns.
    pub fn field(&self) -> Option<Field> {
        match self.kind {
            ColumnKind::Data(field) => Some(field),
            ColumnKind::Computed(_) => None,
        }
    }

    /// Computed columns are never editable.
    pub fn editable(&self) -> bool {
        self.field().is_some_and(Field::is_editable)
    }

    pub fn text(&self, row: &Record) -> String {
        match self.kind {
            ColumnKind::Data(field) => row.field_text(field),
            ColumnKind::Computed(derive) => derive(row),
        }
    }

    /// Ascending order of two rows by this column.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self.kind {
            ColumnKind::Data(Field::Id) => a.id.cmp(&b.id),
            ColumnKind::Data(Field::Age) => a.age.cmp(&b.age),
            ColumnKind::Data(field) => a.field_text(field).cmp(&b.field_text(field)),
            ColumnKind::Computed(derive) => derive(a).cmp(&derive(b)),
        }
    }
}

fn full_name(row: &Record) -> String {
    row.full_name()
}

pub const FULL_NAME_KEY: &str = "fullName";

/// Columns in display order. The delete action column is added by the
/// renderer and is not part of this list.
pub const COLUMNS: [ColumnDef; 7] = [
    ColumnDef::data(Field::Id, 70.0, true, false),
    ColumnDef::data(Field::FirstName, 120.0, true, false),
    ColumnDef::data(Field::LastName, 120.0, true, true),
    ColumnDef::data(Field::Age, 80.0, true, true),
    ColumnDef {
        key: FULL_NAME_KEY,
        title: "Full name",
        kind: ColumnKind::Computed(full_name),
        sortable: true,
        searchable: false,
        width: 170.0,
    },
    ColumnDef::data(Field::PhoneNumber, 150.0, false, false),
    ColumnDef::data(Field::Email, 240.0, false, false),
];

/// Looks a column up by key.
pub fn column(key: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|col| col.key == key)
}
