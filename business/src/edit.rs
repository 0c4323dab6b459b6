//! Inline cell editing.
//!
//! A cell is either displayed or edited. At most one cell per table is in
//! edit at a time; the session tracks which one and the text typed so far.
//! There is no cancel: leaving the input commits it.

use crate::{Field, FieldError, Record, SaveRow};

/// Presentation state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    Display,
    Edit,
}

/// Pending edit of a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Snapshot of the row taken when the edit started.
    pub row: Record,
    pub field: Field,
    pub input: String,
    /// Set until the input widget has asked for keyboard focus once.
    pub wants_focus: bool,
}

impl EditState {
    fn new(row: &Record, field: Field) -> Self {
        Self {
            row: row.clone(),
            field,
            input: row.field_text(field),
            wants_focus: true,
        }
    }

    /// Why the pending input would be dropped on commit, if it would.
    pub fn error(&self) -> Option<FieldError> {
        self.row.with_field(self.field, &self.input).err()
    }

    /// The snapshot row with the pending input merged in.
    ///
    /// Returns `None` when the input cannot be stored in the field.
    pub fn updated_row(&self) -> Option<Record> {
        match self.row.with_field(self.field, &self.input) {
            Ok(row) => Some(row),
            Err(err) => {
                log::warn!("Dropping edit of {} on row {}: {err}", self.field, self.row.id);
                None
            }
        }
    }
}

/// Edit state machine shared by every cell of one table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditSession {
    active: Option<EditState>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&EditState> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut EditState> {
        self.active.as_mut()
    }

    /// Mode of the cell showing `field` of `row`.
    ///
    /// Cells are matched by row id and field, so rows sharing an id are
    /// edited together. Generated child ids can collide.
    pub fn mode(&self, row: &Record, field: Field) -> CellMode {
        match &self.active {
            Some(edit) if edit.row.id == row.id && edit.field == field => CellMode::Edit,
            _ => CellMode::Display,
        }
    }

    /// Switches the cell to edit.
    ///
    /// If another cell was being edited it is committed first and its
    /// updated row is returned. Non-editable fields are ignored.
    pub fn activate(&mut self, row: &Record, field: Field) -> Option<Record> {
        if !field.is_editable() {
            return None;
        }
        if self.mode(row, field) == CellMode::Edit {
            return None;
        }

        let previous = self.commit();
        log::debug!("Editing {field} on row {}", row.id);
        self.active = Some(EditState::new(row, field));
        previous
    }

    /// Leaves edit, returning the updated row to hand to the save callback.
    pub fn commit(&mut self) -> Option<Record> {
        self.active.take().and_then(|edit| edit.updated_row())
    }

    /// Commits and passes the row straight to `target`.
    pub fn commit_into<S: SaveRow + ?Sized>(&mut self, target: &mut S) -> bool {
        match self.commit() {
            Some(row) => target.save_row(row),
            None => false,
        }
    }

    /// Returns `true` once per activation, the first time it is asked.
    pub fn take_focus_request(&mut self) -> bool {
        match &mut self.active {
            Some(edit) => std::mem::take(&mut edit.wants_focus),
            None => false,
        }
    }
}
