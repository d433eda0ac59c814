//! The `students` table and its four query primitives.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use roster_types::{StudentFields, StudentId, StudentRecord};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::{StoreError, StoreResult};

/// Persistent store of student records backed by SQLite.
///
/// Cloning is cheap; every clone shares the same connection.
#[derive(Clone)]
pub struct StudentStore {
    conn: Arc<Mutex<Connection>>,
}

impl StudentStore {
    /// Opens (or creates) a store at the given path.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        info!("Opened student store at {}", path.display());
        Self::init(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Inserts a new student and returns its assigned id.
    ///
    /// Fails with [`StoreError::Constraint`] if the email is already taken.
    pub fn insert(&self, fields: &StudentFields) -> StoreResult<StudentId> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO students (name, surname, email) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.surname, fields.email],
        )?;
        let id = StudentId::new(conn.last_insert_rowid());
        debug!("Inserted student {}", id);
        Ok(id)
    }

    /// Returns every student in ascending id order.
    pub fn select_all(&self) -> StoreResult<Vec<StudentRecord>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, surname, email FROM students ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(StudentRecord {
                id: StudentId::new(row.get(0)?),
                name: row.get(1)?,
                surname: row.get(2)?,
                email: row.get(3)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        debug!("Selected {} students", out.len());
        Ok(out)
    }

    /// Replaces all editable fields of the student with `id`.
    ///
    /// Returns the number of rows changed (0 if no such id). Fails with
    /// [`StoreError::Constraint`] if the new email belongs to another student.
    pub fn update(&self, id: StudentId, fields: &StudentFields) -> StoreResult<usize> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE students SET name = ?1, surname = ?2, email = ?3 WHERE id = ?4",
            params![fields.name, fields.surname, fields.email, id.get()],
        )?;
        debug!("Updated student {} ({} rows)", id, changed);
        Ok(changed)
    }

    /// Removes the student with `id`, returning the number of rows removed.
    pub fn delete(&self, id: StudentId) -> StoreResult<usize> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM students WHERE id = ?1", params![id.get()])?;
        debug!("Deleted student {} ({} rows)", id, removed);
        Ok(removed)
    }

    /// Number of stored students.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Inserts two sample students if the table is empty.
    ///
    /// Returns how many rows were inserted.
    pub fn seed_sample_data(&self) -> StoreResult<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let count: i64 = tx.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let samples = [
            ("John", "Doe", "john.doe@example.com"),
            ("Jane", "Smith", "jane.smith@example.com"),
        ];
        for (name, surname, email) in samples {
            tx.execute(
                "INSERT INTO students (name, surname, email) VALUES (?1, ?2, ?3)",
                params![name, surname, email],
            )?;
        }
        tx.commit()?;
        info!("Inserted {} sample students", samples.len());
        Ok(samples.len())
    }

    /// Closes the underlying connection.
    ///
    /// If other clones of this handle are still alive, the connection stays
    /// open until the last one is dropped.
    pub fn close(self) -> StoreResult<()> {
        match Arc::try_unwrap(self.conn) {
            Ok(mutex) => {
                let conn = mutex.into_inner().map_err(|_| StoreError::LockPoisoned)?;
                conn.close().map_err(|(_, e)| StoreError::from(e))?;
                info!("Closed student store");
                Ok(())
            }
            Err(_) => {
                debug!("Student store still shared; deferring close to last handle");
                Ok(())
            }
        }
    }
}
