//! Purse table access
//!
//! Point reads and writes over the purses table. Reads that feed a
//! read-modify-write cycle go through [`PurseStore::get_for_update`], which
//! requires an active transaction scope; the scope (opened IMMEDIATE by the
//! transfer engine) holds the database write lock, so the value read cannot
//! be overwritten by a concurrent transfer before the matching
//! [`PurseStore::write`] lands.

use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row, Transaction};

use crate::error::{PurseError, PurseResult};
use crate::models::{Money, NewPurse, Purse, PurseId, PurseKind};

const PURSE_COLUMNS: &str =
    "id, name, type, allocated_amount, spent_amount, is_locked, buffer_allowance";

/// Accessors for the purses table
pub struct PurseStore;

impl PurseStore {
    /// All purses ordered by id; no transaction required
    pub fn list_all(conn: &Connection) -> PurseResult<Vec<Purse>> {
        let mut stmt =
            conn.prepare(&format!("SELECT {} FROM purses ORDER BY id", PURSE_COLUMNS))?;
        let purses = stmt
            .query_map([], row_to_purse)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(purses)
    }

    /// Point read by id; `None` when absent
    pub fn get(conn: &Connection, id: PurseId) -> PurseResult<Option<Purse>> {
        let purse = conn
            .query_row(
                &format!("SELECT {} FROM purses WHERE id = ?1", PURSE_COLUMNS),
                [id.raw()],
                row_to_purse,
            )
            .optional()?;
        Ok(purse)
    }

    /// Case-insensitive lookup by name; `None` when absent
    pub fn find_by_name(conn: &Connection, name: &str) -> PurseResult<Option<Purse>> {
        let purse = conn
            .query_row(
                &format!(
                    "SELECT {} FROM purses WHERE name = ?1 COLLATE NOCASE",
                    PURSE_COLUMNS
                ),
                [name],
                row_to_purse,
            )
            .optional()?;
        Ok(purse)
    }

    /// Read a purse for a read-modify-write cycle
    ///
    /// Must be called inside an active transaction scope; fails with
    /// [`PurseError::PurseNotFound`] when the id is absent.
    pub fn get_for_update(scope: &Transaction<'_>, id: PurseId) -> PurseResult<Purse> {
        Self::get(scope, id)?.ok_or_else(|| PurseError::purse_not_found(id.to_string()))
    }

    /// Persist the full row inside the same scope as the read that produced it
    pub fn write(scope: &Transaction<'_>, purse: &Purse) -> PurseResult<()> {
        let changed = scope.execute(
            "UPDATE purses
             SET name = ?2, type = ?3, allocated_amount = ?4, spent_amount = ?5,
                 is_locked = ?6, buffer_allowance = ?7
             WHERE id = ?1",
            params![
                purse.id.raw(),
                purse.name,
                purse.kind.as_str(),
                purse.allocated.cents(),
                purse.spent.cents(),
                purse.locked,
                purse.buffer_allowance.cents(),
            ],
        )?;

        if changed == 0 {
            return Err(PurseError::purse_not_found(purse.id.to_string()));
        }
        Ok(())
    }

    /// Create a purse; the store assigns the id
    pub fn insert(scope: &Transaction<'_>, new: &NewPurse) -> PurseResult<Purse> {
        let result = scope.execute(
            "INSERT INTO purses (name, type, allocated_amount, spent_amount, is_locked, buffer_allowance)
             VALUES (?1, ?2, ?3, 0, ?4, ?5)",
            params![
                new.name,
                new.kind.as_str(),
                new.allocated.cents(),
                new.locked,
                new.buffer_allowance.cents(),
            ],
        );

        match result {
            Ok(_) => Ok(Purse {
                id: PurseId::new(scope.last_insert_rowid()),
                name: new.name.clone(),
                kind: new.kind,
                allocated: new.allocated,
                spent: Money::zero(),
                locked: new.locked,
                buffer_allowance: new.buffer_allowance,
            }),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(PurseError::Validation(format!(
                    "A purse named '{}' already exists",
                    new.name
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Toggle the lock flag on a purse
    pub fn set_locked(scope: &Transaction<'_>, id: PurseId, locked: bool) -> PurseResult<()> {
        let changed = scope.execute(
            "UPDATE purses SET is_locked = ?2 WHERE id = ?1",
            params![id.raw(), locked],
        )?;
        if changed == 0 {
            return Err(PurseError::purse_not_found(id.to_string()));
        }
        Ok(())
    }
}

fn row_to_purse(row: &Row<'_>) -> rusqlite::Result<Purse> {
    let kind_str: String = row.get(2)?;
    let kind = PurseKind::parse(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown purse type: {}", kind_str).into(),
        )
    })?;

    Ok(Purse {
        id: PurseId::new(row.get(0)?),
        name: row.get(1)?,
        kind,
        allocated: Money::from_cents(row.get(3)?),
        spent: Money::from_cents(row.get(4)?),
        locked: row.get(5)?,
        buffer_allowance: Money::from_cents(row.get(6)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::Storage;

    fn insert_purse(storage: &Storage, new: &NewPurse) -> Purse {
        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();
        let purse = PurseStore::insert(&scope, new).unwrap();
        scope.commit().unwrap();
        purse
    }

    #[test]
    fn test_insert_and_get() {
        let storage = Storage::open_in_memory().unwrap();
        let created = insert_purse(
            &storage,
            &NewPurse::new("Groceries", PurseKind::Flexible, Money::from_cents(45000))
                .with_buffer(Money::from_cents(5000)),
        );

        let conn = storage.lock_conn().unwrap();
        let fetched = PurseStore::get(&conn, created.id).unwrap().unwrap();

        assert_eq!(fetched.name, "Groceries");
        assert_eq!(fetched.kind, PurseKind::Flexible);
        assert_eq!(fetched.allocated, Money::from_cents(45000));
        assert!(fetched.spent.is_zero());
        assert!(!fetched.locked);
        assert_eq!(fetched.buffer_allowance, Money::from_cents(5000));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let storage = Storage::open_in_memory().unwrap();
        insert_purse(
            &storage,
            &NewPurse::new("Rent", PurseKind::Locked, Money::from_cents(1000)),
        );

        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();
        let result = PurseStore::insert(
            &scope,
            &NewPurse::new("Rent", PurseKind::Flexible, Money::zero()),
        );

        assert!(matches!(result, Err(PurseError::Validation(_))));
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let storage = Storage::open_in_memory().unwrap();
        let created = insert_purse(
            &storage,
            &NewPurse::new("Fun Money", PurseKind::Flexible, Money::from_cents(100)),
        );

        let conn = storage.lock_conn().unwrap();
        let found = PurseStore::find_by_name(&conn, "fun money").unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(PurseStore::find_by_name(&conn, "Vacation")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_get_for_update_missing_purse() {
        let storage = Storage::open_in_memory().unwrap();
        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();

        let result = PurseStore::get_for_update(&scope, PurseId::new(42));
        assert!(matches!(result, Err(PurseError::PurseNotFound(_))));
    }

    #[test]
    fn test_write_roundtrip() {
        let storage = Storage::open_in_memory().unwrap();
        let mut purse = insert_purse(
            &storage,
            &NewPurse::new("Groceries", PurseKind::Flexible, Money::from_cents(1000)),
        );

        purse.allocated = Money::from_cents(750);
        purse.locked = true;

        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();
        PurseStore::write(&scope, &purse).unwrap();
        scope.commit().unwrap();

        let fetched = PurseStore::get(&conn, purse.id).unwrap().unwrap();
        assert_eq!(fetched.allocated, Money::from_cents(750));
        assert!(fetched.locked);
    }

    #[test]
    fn test_write_missing_purse() {
        let storage = Storage::open_in_memory().unwrap();
        let mut purse = insert_purse(
            &storage,
            &NewPurse::new("Groceries", PurseKind::Flexible, Money::from_cents(1000)),
        );
        purse.id = PurseId::new(99);

        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();
        let result = PurseStore::write(&scope, &purse);
        assert!(matches!(result, Err(PurseError::PurseNotFound(_))));
    }

    #[test]
    fn test_list_all_ordered_by_id() {
        let storage = Storage::open_in_memory().unwrap();
        for name in ["Alpha", "Beta", "Gamma"] {
            insert_purse(
                &storage,
                &NewPurse::new(name, PurseKind::Flexible, Money::zero()),
            );
        }

        let conn = storage.lock_conn().unwrap();
        let purses = PurseStore::list_all(&conn).unwrap();
        let names: Vec<_> = purses.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert!(purses.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_set_locked() {
        let storage = Storage::open_in_memory().unwrap();
        let purse = insert_purse(
            &storage,
            &NewPurse::new("Emergency Fund", PurseKind::Emergency, Money::zero()),
        );

        let mut conn = storage.lock_conn().unwrap();
        let scope = conn.transaction().unwrap();
        PurseStore::set_locked(&scope, purse.id, true).unwrap();
        scope.commit().unwrap();

        let fetched = PurseStore::get(&conn, purse.id).unwrap().unwrap();
        assert!(fetched.locked);
    }
}
