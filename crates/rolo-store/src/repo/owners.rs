use crate::error::{Result, StoreError};
use rolo_core::domain::{Owner, OwnerId};
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

pub struct OwnersRepo<'a> {
    conn: &'a Connection,
}

impl<'a> OwnersRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Look up an owner by handle, creating the row on first use.
    pub fn ensure(&self, now_utc: i64, handle: &str) -> Result<Owner> {
        let trimmed = handle.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidOwnerHandle(handle.to_string()));
        }

        if let Some(owner) = self.get_by_handle(trimmed)? {
            return Ok(owner);
        }

        let id = OwnerId::new();
        self.conn.execute(
            "INSERT INTO owners (id, handle, created_at) VALUES (?1, ?2, ?3);",
            params![id.to_string(), trimmed, now_utc],
        )?;

        Ok(Owner {
            id,
            handle: trimmed.to_string(),
            created_at: now_utc,
        })
    }

    pub fn get_by_handle(&self, handle: &str) -> Result<Option<Owner>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, handle, created_at FROM owners WHERE handle = ?1;",
                [handle],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((id_raw, handle, created_at)) => {
                let id = OwnerId::from_str(&id_raw).map_err(|_| StoreError::InvalidId(id_raw))?;
                Ok(Some(Owner {
                    id,
                    handle,
                    created_at,
                }))
            }
            None => Ok(None),
        }
    }
}
