//! Dog repository
//!
//! Translates record-level operations into statements against the dogs
//! table. Every operation is a single parameterized statement executed
//! synchronously on the owned connection; writes commit before returning.

use crate::db;
use crate::errors::{from_rusqlite, missing_id, Result};
use crate::repo::hydration::dog_from_row;
use kennel_core::model::Dog;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-backed repository for Dog records
///
/// Owns its connection for the whole lifetime of the value, so in-process
/// operations serialize by call order. Dropping the repo releases the
/// database handle; `close` does the same with the error surfaced.
pub struct DogRepo {
    conn: Connection,
}

impl DogRepo {
    /// Open the repository on a database file, creating the file if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open the repository on an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Close the repository, releasing the database handle
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite("close", e))
    }

    /// Ensure the dogs table exists
    ///
    /// Idempotent: no error when the table is already present, and
    /// existing rows are left untouched.
    pub fn create_table(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS dogs
                    (id INTEGER PRIMARY KEY,
                    name TEXT,
                    breed TEXT)",
                [],
            )
            .map_err(|e| from_rusqlite("create_table", e))?;

        Ok(())
    }

    /// Remove the dogs table
    ///
    /// Idempotent: no error when the table is already absent.
    pub fn drop_table(&self) -> Result<()> {
        self.conn
            .execute("DROP TABLE IF EXISTS dogs", [])
            .map_err(|e| from_rusqlite("drop_table", e))?;

        Ok(())
    }

    /// Save a record to the dogs table
    ///
    /// A record without an id is inserted and receives the store-assigned
    /// key; a record with an id overwrites its row's name and breed by
    /// primary key. The write is durable when this returns.
    pub fn save(&self, dog: &mut Dog) -> Result<()> {
        match dog.id {
            None => {
                self.conn
                    .execute(
                        "INSERT INTO dogs (name, breed) VALUES (?1, ?2)",
                        params![dog.name, dog.breed],
                    )
                    .map_err(|e| from_rusqlite("save", e))?;

                let id = self.conn.last_insert_rowid();
                dog.id = Some(id);

                tracing::debug!(id, name = %dog.name, "Inserted dog");
            }
            Some(id) => {
                self.conn
                    .execute(
                        "UPDATE dogs SET name = ?1, breed = ?2 WHERE id = ?3",
                        params![dog.name, dog.breed, id],
                    )
                    .map_err(|e| from_rusqlite("save", e))?;

                tracing::debug!(id, name = %dog.name, "Updated dog");
            }
        }

        Ok(())
    }

    /// Construct and save a new record, returning it with its assigned id
    pub fn create(&self, name: &str, breed: &str) -> Result<Dog> {
        let mut dog = Dog::new(name.to_string(), breed.to_string());
        self.save(&mut dog)?;

        Ok(dog)
    }

    /// Get all records in the store's native row order
    ///
    /// Commonly insertion order, but the store does not guarantee it.
    pub fn get_all(&self) -> Result<Vec<Dog>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, breed FROM dogs")
            .map_err(|e| from_rusqlite("get_all", e))?;

        let dogs = stmt
            .query_map([], dog_from_row)
            .map_err(|e| from_rusqlite("get_all", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("get_all", e))?;

        Ok(dogs)
    }

    /// Find the first record matching an exact, case-sensitive name
    pub fn find_by_name(&self, name: &str) -> Result<Option<Dog>> {
        self.conn
            .query_row(
                "SELECT id, name, breed FROM dogs WHERE name = ?1 LIMIT 1",
                [name],
                dog_from_row,
            )
            .optional()
            .map_err(|e| from_rusqlite("find_by_name", e))
    }

    /// Find the record whose primary key equals the given id
    pub fn find_by_id(&self, id: i64) -> Result<Option<Dog>> {
        self.conn
            .query_row(
                "SELECT id, name, breed FROM dogs WHERE id = ?1 LIMIT 1",
                [id],
                dog_from_row,
            )
            .optional()
            .map_err(|e| from_rusqlite("find_by_id", e))
    }

    /// Find the first record matching both name and breed, creating one
    /// if none exists
    ///
    /// Lookup and insert are two separate statements: a caller on another
    /// connection can race between them and produce a duplicate row.
    pub fn find_or_create_by(&self, name: &str, breed: &str) -> Result<Dog> {
        let existing = self
            .conn
            .query_row(
                "SELECT id, name, breed FROM dogs WHERE name = ?1 AND breed = ?2 LIMIT 1",
                params![name, breed],
                dog_from_row,
            )
            .optional()
            .map_err(|e| from_rusqlite("find_or_create_by", e))?;

        match existing {
            Some(dog) => Ok(dog),
            None => self.create(name, breed),
        }
    }

    /// Overwrite an existing row's name and breed by primary key
    ///
    /// The record must already carry its store-assigned id; calling this
    /// on an unsaved record reports `MissingId` rather than silently
    /// matching zero rows.
    pub fn update(&self, dog: &Dog) -> Result<()> {
        let id = dog.id.ok_or_else(missing_id)?;

        self.conn
            .execute(
                "UPDATE dogs SET name = ?1, breed = ?2 WHERE id = ?3",
                params![dog.name, dog.breed, id],
            )
            .map_err(|e| from_rusqlite("update", e))?;

        tracing::debug!(id, name = %dog.name, "Updated dog");

        Ok(())
    }
}
