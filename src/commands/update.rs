use std::io::{BufRead, Write};

use crate::util::{Console, StudentStore};

use super::{CommandError, Flow, INVALID_ID, NOT_FOUND};

pub struct UpdateEmail<'a> {
    store: &'a StudentStore,
}

impl<'a> UpdateEmail<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    pub fn handle<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CommandError> {
        let id = prompt!(console, "Student ID:");
        let email = prompt!(console, "New email:");

        let id = match id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                console.error(INVALID_ID)?;
                return Ok(Flow::Continue);
            }
        };

        if self.store.update_email(id, &email)? == 0 {
            console.notice(NOT_FOUND)?;
            return Ok(Flow::Continue);
        }

        console.line("\nEmail updated successfully.")?;
        if let Some(student) = self.store.get(id)? {
            console.line(&student.to_string())?;
        }
        console.line("")?;

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;
    use crate::util::NewStudent;

    fn seeded() -> StudentStore {
        let store = StudentStore::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store.create(&NewStudent::new("Alice", "a@x.com", date)).unwrap();
        store
    }

    fn run(store: &StudentStore, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.to_owned()), Vec::new());
        let flow = UpdateEmail::new(store).handle(&mut console).unwrap();
        assert_eq!(flow, Flow::Continue);

        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn updates_existing_student() {
        let store = seeded();

        let output = run(&store, "1\nalice2@x.com\n");

        assert!(output.contains("Email updated successfully."));
        assert!(output.contains("\n1 | Alice | alice2@x.com | 2024-01-01\n"));
        assert_eq!(store.get(1).unwrap().unwrap().email, "alice2@x.com");
    }

    #[test]
    fn missing_student_is_reported_not_raised() {
        let store = seeded();

        let output = run(&store, "99999\nnobody@x.com\n");

        assert!(output.contains(NOT_FOUND));
        assert_eq!(store.get(1).unwrap().unwrap().email, "a@x.com");
    }

    #[test]
    fn non_numeric_id() {
        let store = seeded();

        let output = run(&store, "one\nalice2@x.com\n");

        assert!(output.contains(INVALID_ID));
        assert_eq!(store.get(1).unwrap().unwrap().email, "a@x.com");
    }
}
