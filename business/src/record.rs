//! Person records shown by both table views.

use std::fmt;

use crate::FieldError;

/// One synthetic "person" row.
///
/// `children` is `None` for rows that never had children. An empty vector
/// would render differently (an expand toggle with nothing under it), so the
/// generator never produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub phone_number: String,
    pub email: String,
    pub children: Option<Vec<Record>>,
}

/// The data fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Age,
    PhoneNumber,
    Email,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Age,
        Self::PhoneNumber,
        Self::Email,
    ];

    /// Stable key, used for widget ids and logs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Age => "age",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
        }
    }

    /// Column header text.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Age => "Age",
            Self::PhoneNumber => "Phone number",
            Self::Email => "Email",
        }
    }

    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Record {
    /// Display text of a single field.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::Age => self.age.to_string(),
            Field::PhoneNumber => self.phone_number.clone(),
            Field::Email => self.email.clone(),
        }
    }

    /// `first_name` and `last_name` joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Returns a copy of this row with `field` replaced by `text`.
    ///
    /// String fields take the text as-is. `Age` must parse as an integer.
    pub fn with_field(&self, field: Field, text: &str) -> Result<Self, FieldError> {
        let mut row = self.clone();
        match field {
            Field::Id => return Err(FieldError::NotEditable(field)),
            Field::FirstName => row.first_name = text.to_owned(),
            Field::LastName => row.last_name = text.to_owned(),
            Field::Age => {
                row.age = text
                    .trim()
                    .parse()
                    .map_err(|_parse_err| FieldError::InvalidAge(text.to_owned()))?;
            }
            Field::PhoneNumber => row.phone_number = text.to_owned(),
            Field::Email => row.email = text.to_owned(),
        }
        Ok(row)
    }

    /// Shallow merge of `update` into `self`.
    ///
    /// Every scalar field comes from `update`. `children` is only replaced
    /// when `update` carries some, otherwise the existing ones are kept.
    pub fn merge(&mut self, update: Self) {
        let Self {
            id,
            first_name,
            last_name,
            age,
            phone_number,
            email,
            children,
        } = update;

        self.id = id;
        self.first_name = first_name;
        self.last_name = last_name;
        self.age = age;
        self.phone_number = phone_number;
        self.email = email;
        if children.is_some() {
            self.children = children;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: 5,
            first_name: "Arya".to_owned(),
            last_name: "Harvey".to_owned(),
            age: 17,
            phone_number: "+1-555-123-4567".to_owned(),
            email: "jon.cersei@gmail.com".to_owned(),
            children: None,
        }
    }

    #[test]
    fn test_full_name_joins_with_space() {
        assert_eq!(sample().full_name(), "Arya Harvey");
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let row = sample();
        let edited = row.with_field(Field::Email, "anything at all").unwrap();

        assert_eq!(edited.email, "anything at all");
        assert_eq!(edited.first_name, row.first_name);
        assert_eq!(edited.age, row.age);
        assert_eq!(row.email, "jon.cersei@gmail.com");
    }

    #[test]
    fn test_with_field_coerces_age() {
        let edited = sample().with_field(Field::Age, " 42 ").unwrap();
        assert_eq!(edited.age, 42);
    }

    #[test]
    fn test_with_field_rejects_non_numeric_age() {
        let err = sample().with_field(Field::Age, "old").unwrap_err();
        assert_eq!(err, FieldError::InvalidAge("old".to_owned()));
    }

    #[test]
    fn test_with_field_rejects_id() {
        let err = sample().with_field(Field::Id, "7").unwrap_err();
        assert_eq!(err, FieldError::NotEditable(Field::Id));
        assert_eq!(err.to_string(), "Field is not editable: id");
    }

    #[test]
    fn test_merge_keeps_children_when_update_has_none() {
        let child = Record {
            id: 900_001,
            ..sample()
        };
        let mut row = Record {
            children: Some(vec![child]),
            ..sample()
        };

        row.merge(Record {
            last_name: "Rossini".to_owned(),
            ..sample()
        });

        assert_eq!(row.last_name, "Rossini");
        assert_eq!(row.children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let update = Record {
            age: 99,
            ..sample()
        };

        let mut once = sample();
        once.merge(update.clone());
        let mut twice = once.clone();
        twice.merge(update);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_field_keys_are_unique() {
        let mut keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }
}
