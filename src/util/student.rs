use std::fmt;

use chrono::NaiveDate;

/// Format accepted for enrollment dates, e.g. `2023-09-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

/// A student that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    pub fn new(name: &str, email: &str, enrollment_date: NaiveDate) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            enrollment_date,
        }
    }

    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            enrollment_date: Some(self.enrollment_date),
        }
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | ", self.id, self.name, self.email)?;
        match self.enrollment_date {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => Ok(()),
        }
    }
}
