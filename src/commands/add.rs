use std::io::{BufRead, Write};

use crate::util::{student::parse_date, Console, NewStudent, StudentStore};

use super::{CommandError, Flow};

pub struct Add<'a> {
    store: &'a StudentStore,
}

impl<'a> Add<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    pub fn handle<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CommandError> {
        let name = prompt!(console, "Name:");
        let email = prompt!(console, "Email:");
        let date = prompt!(console, "Enrollment date (YYYY-MM-DD):");

        let enrollment_date = match parse_date(&date) {
            Ok(date) => date,
            Err(_) => {
                console.error("Invalid date format. Use YYYY-MM-DD (e.g., 2023-09-01).")?;
                return Ok(Flow::Continue);
            }
        };

        let id = self
            .store
            .create(&NewStudent::new(&name, &email, enrollment_date))?;
        console.notice(&format!("Student added with ID {}.", id))?;

        Ok(Flow::Continue)
    }
}
