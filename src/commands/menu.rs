use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::util::{Console, StoreError, StudentStore};

use super::{Add, CommandError, Delete, Flow, List, UpdateEmail};

const MENU: [&str; 6] = [
    "--- Students CRUD Menu ---",
    "1. View all students",
    "2. Add a student",
    "3. Update student email",
    "4. Delete a student",
    "0. Exit",
];

/// A menu entry that runs one store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    UpdateEmail,
    Delete,
}

impl Operation {
    /// Used in "Failed to ..." messages.
    pub fn action(self) -> &'static str {
        match self {
            Self::List => "fetch students",
            Self::Add => "add student",
            Self::UpdateEmail => "update email",
            Self::Delete => "delete student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Run(Operation::List)),
            "2" => Some(Self::Run(Operation::Add)),
            "3" => Some(Self::Run(Operation::UpdateEmail)),
            "4" => Some(Self::Run(Operation::Delete)),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a> {
    store: &'a StudentStore,
}

impl<'a> Menu<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        Self { store }
    }

    /// Runs until the user picks exit or input ends. Store failures are
    /// printed and the loop goes on; only console I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            for line in MENU {
                console.line(line)?;
            }

            let choice = match console.prompt("Choose an option:")? {
                Some(input) => match MenuChoice::from_input(&input) {
                    Some(choice) => choice,
                    None => {
                        console.notice("Invalid option. Please try again.")?;
                        continue;
                    }
                },
                None => MenuChoice::Exit,
            };

            let operation = match choice {
                MenuChoice::Run(operation) => operation,
                MenuChoice::Exit => break,
            };

            match self.dispatch(operation, console) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::Store(e)) => {
                    warn!(action = operation.action(), error = %e, "operation failed");
                    match e {
                        StoreError::DuplicateEmail => console.error(&e.to_string())?,
                        _ => console.error(&format!("Failed to {}: {}", operation.action(), e))?,
                    }
                }
                Err(CommandError::Io(e)) => return Err(e),
            }
        }

        console.line("\nGoodbye.")
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        operation: Operation,
        console: &mut Console<R, W>,
    ) -> Result<Flow, CommandError> {
        match operation {
            Operation::List => List::new(self.store).handle(console),
            Operation::Add => Add::new(self.store).handle(console),
            Operation::UpdateEmail => UpdateEmail::new(self.store).handle(console),
            Operation::Delete => Delete::new(self.store).handle(console),
        }
    }
}
