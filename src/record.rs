use std::fmt;
use std::str::FromStr;

use crate::error::AddrBookError;

/// Selects one attribute of a [`Record`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Surname,
    Email,
    Phone,
}

impl Field {
    /// All fields, in CSV column order
    pub const ALL: [Field; 4] = [Field::Name, Field::Surname, Field::Email, Field::Phone];

    /// Maximum stored width in characters
    pub fn max_len(self) -> usize {
        match self {
            Field::Name => 31,
            Field::Surname => 31,
            Field::Email => 63,
            Field::Phone => 14,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AddrBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "surname" => Ok(Field::Surname),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            _ => Err(AddrBookError::UnknownField(s.to_string())),
        }
    }
}

/// A single contact entry
///
/// Every value is truncated to its field's width when stored, so a `Record`
/// never holds more than [`Field::max_len`] characters per attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    name: String,
    surname: String,
    email: String,
    phone: String,
}

impl Record {
    pub fn new(name: &str, surname: &str, email: &str, phone: &str) -> Self {
        Self {
            name: truncate(name, Field::Name),
            surname: truncate(surname, Field::Surname),
            email: truncate(email, Field::Email),
            phone: truncate(phone, Field::Phone),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Get the value of the selected attribute
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Replace the selected attribute, truncating to its width
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = truncate(value, field);
    }

    /// Iterate over attribute values in CSV column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        Field::ALL.into_iter().map(move |field| self.get(field))
    }
}

/// Cut `value` down to the field's width without splitting a character
fn truncate(value: &str, field: Field) -> String {
    match value.char_indices().nth(field.max_len()) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}
