use crate::error::{Result, StoreError};
use rolo_core::domain::{
    ContactId, Interaction, InteractionId, InteractionKind, InteractionStatus, OwnerId,
};
use rusqlite::{params, Connection};
use std::str::FromStr;

const INTERACTION_COLUMNS: &str = "id, owner_id, contact_id, kind, occurred_at, duration_minutes, \
     summary, notes, follow_up_at, follow_up_notes, status, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct InteractionNew {
    pub contact_id: ContactId,
    pub kind: InteractionKind,
    pub occurred_at: i64,
    pub duration_minutes: Option<i32>,
    pub summary: String,
    pub notes: Option<String>,
    pub follow_up_at: Option<i64>,
    pub follow_up_notes: Option<String>,
    pub status: InteractionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionUpdate {
    pub kind: Option<InteractionKind>,
    pub occurred_at: Option<i64>,
    pub duration_minutes: Option<Option<i32>>,
    pub summary: Option<String>,
    pub notes: Option<Option<String>>,
    pub follow_up_at: Option<Option<i64>>,
    pub follow_up_notes: Option<Option<String>>,
    pub status: Option<InteractionStatus>,
}

pub struct InteractionsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> InteractionsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, owner: OwnerId, input: InteractionNew) -> Result<Interaction> {
        let interaction = Interaction {
            id: InteractionId::new(),
            owner_id: owner,
            contact_id: input.contact_id,
            kind: input.kind,
            occurred_at: input.occurred_at,
            duration_minutes: input.duration_minutes,
            summary: input.summary,
            notes: input.notes,
            follow_up_at: input.follow_up_at,
            follow_up_notes: input.follow_up_notes,
            status: input.status,
            created_at: now_utc,
            updated_at: now_utc,
        };
        interaction.validate()?;

        self.conn.execute(
            "INSERT INTO interactions (id, owner_id, contact_id, kind, occurred_at, duration_minutes, summary, notes, follow_up_at, follow_up_notes, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            params![
                interaction.id.to_string(),
                interaction.owner_id.to_string(),
                interaction.contact_id.to_string(),
                serialize_kind(interaction.kind),
                interaction.occurred_at,
                interaction.duration_minutes,
                interaction.summary,
                interaction.notes,
                interaction.follow_up_at,
                interaction.follow_up_notes,
                serialize_status(interaction.status),
                interaction.created_at,
                interaction.updated_at,
            ],
        )?;

        Ok(interaction)
    }

    pub fn get(&self, owner: OwnerId, id: InteractionId) -> Result<Option<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {INTERACTION_COLUMNS} FROM interactions WHERE id = ?1 AND owner_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![id.to_string(), owner.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(interaction_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn list_for_owner(&self, owner: OwnerId) -> Result<Vec<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {INTERACTION_COLUMNS} FROM interactions
             WHERE owner_id = ?1
             ORDER BY occurred_at DESC, id ASC;"
        ))?;
        let mut rows = stmt.query([owner.to_string()])?;
        let mut interactions = Vec::new();
        while let Some(row) = rows.next()? {
            interactions.push(interaction_from_row(row)?);
        }
        Ok(interactions)
    }

    pub fn list_for_contact(&self, owner: OwnerId, contact_id: ContactId) -> Result<Vec<Interaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {INTERACTION_COLUMNS} FROM interactions
             WHERE owner_id = ?1 AND contact_id = ?2
             ORDER BY occurred_at DESC, id ASC;"
        ))?;
        let mut rows = stmt.query(params![owner.to_string(), contact_id.to_string()])?;
        let mut interactions = Vec::new();
        while let Some(row) = rows.next()? {
            interactions.push(interaction_from_row(row)?);
        }
        Ok(interactions)
    }

    pub fn update(
        &self,
        now_utc: i64,
        owner: OwnerId,
        id: InteractionId,
        update: InteractionUpdate,
    ) -> Result<Interaction> {
        let mut interaction = self
            .get(owner, id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(kind) = update.kind {
            interaction.kind = kind;
        }
        if let Some(occurred_at) = update.occurred_at {
            interaction.occurred_at = occurred_at;
        }
        if let Some(duration) = update.duration_minutes {
            interaction.duration_minutes = duration;
        }
        if let Some(summary) = update.summary {
            interaction.summary = summary;
        }
        if let Some(notes) = update.notes {
            interaction.notes = notes;
        }
        if let Some(follow_up_at) = update.follow_up_at {
            interaction.follow_up_at = follow_up_at;
        }
        if let Some(follow_up_notes) = update.follow_up_notes {
            interaction.follow_up_notes = follow_up_notes;
        }
        if let Some(status) = update.status {
            interaction.status = status;
        }
        interaction.updated_at = now_utc;
        interaction.validate()?;

        let updated = self.conn.execute(
            "UPDATE interactions
             SET kind = ?3, occurred_at = ?4, duration_minutes = ?5, summary = ?6, notes = ?7,
                 follow_up_at = ?8, follow_up_notes = ?9, status = ?10, updated_at = ?11
             WHERE id = ?1 AND owner_id = ?2;",
            params![
                interaction.id.to_string(),
                interaction.owner_id.to_string(),
                serialize_kind(interaction.kind),
                interaction.occurred_at,
                interaction.duration_minutes,
                interaction.summary,
                interaction.notes,
                interaction.follow_up_at,
                interaction.follow_up_notes,
                serialize_status(interaction.status),
                interaction.updated_at,
            ],
        )?;
        if updated != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(interaction)
    }

    pub fn delete(&self, owner: OwnerId, id: InteractionId) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM interactions WHERE id = ?1 AND owner_id = ?2;",
            params![id.to_string(), owner.to_string()],
        )?;
        if deleted != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn serialize_kind(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Meeting => "meeting",
        InteractionKind::Call => "call",
        InteractionKind::Email => "email",
    }
}

fn parse_kind(raw: &str) -> Result<InteractionKind> {
    match raw {
        "meeting" => Ok(InteractionKind::Meeting),
        "call" => Ok(InteractionKind::Call),
        "email" => Ok(InteractionKind::Email),
        _ => Err(StoreError::InvalidInteractionKind(raw.to_string())),
    }
}

fn serialize_status(status: InteractionStatus) -> &'static str {
    match status {
        InteractionStatus::Completed => "completed",
        InteractionStatus::NeedsFollowUp => "needs_follow_up",
    }
}

fn parse_interaction_status(raw: &str) -> Result<InteractionStatus> {
    match raw {
        "completed" => Ok(InteractionStatus::Completed),
        "needs_follow_up" => Ok(InteractionStatus::NeedsFollowUp),
        _ => Err(StoreError::InvalidInteractionStatus(raw.to_string())),
    }
}

fn interaction_from_row(row: &rusqlite::Row<'_>) -> Result<Interaction> {
    let id_raw: String = row.get(0)?;
    let id = InteractionId::from_str(&id_raw).map_err(|_| StoreError::InvalidId(id_raw))?;
    let owner_raw: String = row.get(1)?;
    let owner_id = OwnerId::from_str(&owner_raw).map_err(|_| StoreError::InvalidId(owner_raw))?;
    let contact_raw: String = row.get(2)?;
    let contact_id =
        ContactId::from_str(&contact_raw).map_err(|_| StoreError::InvalidId(contact_raw))?;
    let kind_raw: String = row.get(3)?;
    let status_raw: String = row.get(10)?;
    Ok(Interaction {
        id,
        owner_id,
        contact_id,
        kind: parse_kind(&kind_raw)?,
        occurred_at: row.get(4)?,
        duration_minutes: row.get(5)?,
        summary: row.get(6)?,
        notes: row.get(7)?,
        follow_up_at: row.get(8)?,
        follow_up_notes: row.get(9)?,
        status: parse_interaction_status(&status_raw)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
