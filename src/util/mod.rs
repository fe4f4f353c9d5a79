pub mod console;
pub mod db;
pub mod error;
pub mod student;

pub use console::Console;
pub use db::StudentStore;
pub use error::{Result, StoreError};
pub use student::{NewStudent, Student};
