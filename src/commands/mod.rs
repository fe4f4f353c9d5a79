use std::io;

use thiserror::Error;

use crate::util::StoreError;

/// Reads one answer from the console, ending the command (and the menu) when
/// input runs out.
macro_rules! prompt {
    ($console: expr, $label: expr) => {
        match $console.prompt($label)? {
            Some(answer) => answer,
            None => return Ok($crate::commands::Flow::Exit),
        }
    };
}

pub mod add;
pub mod delete;
pub mod list;
pub mod menu;
pub mod update;

pub use add::Add;
pub use delete::Delete;
pub use list::List;
pub use menu::{Menu, MenuChoice, Operation};
pub use update::UpdateEmail;

pub const INVALID_ID: &str = "Invalid student ID. Please enter a number.";
pub const NOT_FOUND: &str = "No student found with that ID.";

/// What the menu should do after a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
