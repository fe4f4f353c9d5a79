use std::io::{BufRead, Write};

use crate::util::{Console, StudentStore};

use super::{CommandError, Flow, INVALID_ID, NOT_FOUND};

pub struct Delete<'a> {
    store: &'a StudentStore,
}

impl<'a> Delete<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    pub fn handle<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CommandError> {
        let id = prompt!(console, "Student ID to delete:");

        let id = match id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                console.error(INVALID_ID)?;
                return Ok(Flow::Continue);
            }
        };

        match self.store.delete(id)? {
            0 => console.notice(NOT_FOUND)?,
            _ => console.notice("Student deleted successfully.")?,
        }

        Ok(Flow::Continue)
    }
}
