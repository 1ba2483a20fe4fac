//! Hydration layer - converts dogs-table rows back into Dog values

use kennel_core::model::Dog;
use rusqlite::Row;

/// Build a Dog from a `SELECT id, name, breed` row
pub fn dog_from_row(row: &Row<'_>) -> rusqlite::Result<Dog> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let breed: String = row.get(2)?;

    Ok(Dog::with_id(id, name, breed))
}
