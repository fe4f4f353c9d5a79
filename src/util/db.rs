use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::{
    error::{Result, StoreError},
    student::{NewStudent, Student},
};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
                        id              INTEGER PRIMARY KEY AUTOINCREMENT,
                        name            TEXT NOT NULL CHECK (name <> ''),
                        email           TEXT NOT NULL UNIQUE CHECK (email <> ''),
                        enrollment_date TEXT)";

/// Owns the single database connection and runs one statement per operation.
///
/// The connection lives as long as the store and is closed on drop, so every
/// exit path of the menu releases it.
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Opens the database file at `path`, creating the `students` table if it
    /// does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let db_path = path.display().to_string();

        let conn = Connection::open(path).map_err(|e| StoreError::connect(&db_path, e))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError::connect(&db_path, e))?;

        info!(path = %db_path, "opened student database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::connect(":memory:", e))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError::connect(":memory:", e))?;

        Ok(Self { conn })
    }

    /// Every student, oldest id first.
    pub fn list(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, enrollment_date
                FROM students
                ORDER BY id",
        )?;
        let students = stmt
            .query_map([], student_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(rows = students.len(), "listed students");
        Ok(students)
    }

    pub fn get(&self, id: i64) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(
                "SELECT id, name, email, enrollment_date FROM students WHERE id = ?1",
                [id],
                student_from_row,
            )
            .optional()?;

        Ok(student)
    }

    /// Inserts `student` and returns the id the database assigned to it.
    pub fn create(&self, student: &NewStudent) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO students (name, email, enrollment_date) VALUES (?1, ?2, ?3)",
            params![student.name, student.email, student.enrollment_date],
        )?;
        let id = self.conn.last_insert_rowid();

        debug!(id, email = %student.email, "inserted student");
        Ok(id)
    }

    /// Replaces the email of student `id`. Returns the number of rows
    /// changed; zero means no student has that id.
    pub fn update_email(&self, id: i64, email: &str) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE students SET email = ?1 WHERE id = ?2",
            params![email, id],
        )?;

        debug!(id, affected, "updated student email");
        Ok(affected)
    }

    /// Removes student `id`. Returns the number of rows removed; zero means
    /// no student has that id.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", [id])?;

        debug!(id, affected, "deleted student");
        Ok(affected)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| StoreError::from(e))?;

        info!("closed student database");
        Ok(())
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        enrollment_date: row.get(3)?,
    })
}
