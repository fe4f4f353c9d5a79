use std::io::{BufRead, Write};

use crate::util::{Console, StudentStore};

use super::{CommandError, Flow};

pub struct List<'a> {
    store: &'a StudentStore,
}

impl<'a> List<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    pub fn handle<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CommandError> {
        let students = self.store.list()?;

        if students.is_empty() {
            console.notice("No students found.")?;
            return Ok(Flow::Continue);
        }

        console.line("\nAll Students:")?;
        console.line("ID | Name | Email | Enrollment Date")?;
        console.line(&"-".repeat(70))?;
        for student in &students {
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

    fn run(store: &StudentStore) -> String {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let flow = List::new(store).handle(&mut console).unwrap();
        assert_eq!(flow, Flow::Continue);

        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn empty_table() {
        let store = StudentStore::open_in_memory().unwrap();

        assert_eq!(run(&store), "\nNo students found.\n\n");
    }

    #[test]
    fn prints_every_row() {
        let store = StudentStore::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store.create(&NewStudent::new("Alice", "a@x.com", date)).unwrap();
        store.create(&NewStudent::new("Bob", "b@x.com", date)).unwrap();

        let output = run(&store);
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "All Students:");
        assert_eq!(lines[2], "ID | Name | Email | Enrollment Date");
        assert_eq!(lines[3].len(), 70);
        assert_eq!(lines[4], "1 | Alice | a@x.com | 2024-01-01");
        assert_eq!(lines[5], "2 | Bob | b@x.com | 2024-01-01");
    }
}
