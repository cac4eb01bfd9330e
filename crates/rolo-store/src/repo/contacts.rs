use crate::error::{Result, StoreError};
use rolo_core::domain::{Contact, ContactId, OwnerId};
use rusqlite::{params, Connection};
use std::str::FromStr;

const CONTACT_COLUMNS: &str = "id, owner_id, name, email, phone, company, title, address, notes, \
     country_code, country_name, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct ContactNew {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub country_code: Option<Option<String>>,
    pub country_name: Option<Option<String>>,
}

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, owner: OwnerId, input: ContactNew) -> Result<Contact> {
        let contact = Contact {
            id: ContactId::new(),
            owner_id: owner,
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            title: input.title,
            address: input.address,
            notes: input.notes,
            country_code: input.country_code,
            country_name: input.country_name,
            created_at: now_utc,
            updated_at: now_utc,
        };
        contact.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (id, owner_id, name, email, phone, company, title, address, notes, country_code, country_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            params![
                contact.id.to_string(),
                contact.owner_id.to_string(),
                contact.name,
                contact.email,
                contact.phone,
                contact.company,
                contact.title,
                contact.address,
                contact.notes,
                contact.country_code,
                contact.country_name,
                contact.created_at,
                contact.updated_at,
            ],
        )?;

        Ok(contact)
    }

    pub fn get(&self, owner: OwnerId, id: ContactId) -> Result<Option<Contact>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1 AND owner_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![id.to_string(), owner.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(contact_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Newest-first listing of everything the owner holds.
    pub fn list_for_owner(&self, owner: OwnerId) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts
             WHERE owner_id = ?1
             ORDER BY created_at DESC, id ASC;"
        ))?;
        let mut rows = stmt.query([owner.to_string()])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(contact_from_row(row)?);
        }
        Ok(contacts)
    }

    pub fn update(
        &self,
        now_utc: i64,
        owner: OwnerId,
        id: ContactId,
        update: ContactUpdate,
    ) -> Result<Contact> {
        let mut contact = self
            .get(owner, id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            contact.name = name;
        }
        if let Some(email) = update.email {
            contact.email = email;
        }
        if let Some(phone) = update.phone {
            contact.phone = phone;
        }
        if let Some(company) = update.company {
            contact.company = company;
        }
        if let Some(title) = update.title {
            contact.title = title;
        }
        if let Some(address) = update.address {
            contact.address = address;
        }
        if let Some(notes) = update.notes {
            contact.notes = notes;
        }
        if let Some(country_code) = update.country_code {
            contact.country_code = country_code;
        }
        if let Some(country_name) = update.country_name {
            contact.country_name = country_name;
        }
        contact.updated_at = now_utc;
        contact.validate()?;

        let updated = self.conn.execute(
            "UPDATE contacts
             SET name = ?3, email = ?4, phone = ?5, company = ?6, title = ?7, address = ?8,
                 notes = ?9, country_code = ?10, country_name = ?11, updated_at = ?12
             WHERE id = ?1 AND owner_id = ?2;",
            params![
                contact.id.to_string(),
                contact.owner_id.to_string(),
                contact.name,
                contact.email,
                contact.phone,
                contact.company,
                contact.title,
                contact.address,
                contact.notes,
                contact.country_code,
                contact.country_name,
                contact.updated_at,
            ],
        )?;
        if updated != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(contact)
    }

    pub fn delete(&self, owner: OwnerId, id: ContactId) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM contacts WHERE id = ?1 AND owner_id = ?2;",
            params![id.to_string(), owner.to_string()],
        )?;
        if deleted != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    let id_raw: String = row.get(0)?;
    let id = ContactId::from_str(&id_raw).map_err(|_| StoreError::InvalidId(id_raw))?;
    let owner_raw: String = row.get(1)?;
    let owner_id = OwnerId::from_str(&owner_raw).map_err(|_| StoreError::InvalidId(owner_raw))?;
    Ok(Contact {
        id,
        owner_id,
        name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        company: row.get(5)?,
        title: row.get(6)?,
        address: row.get(7)?,
        notes: row.get(8)?,
        country_code: row.get(9)?,
        country_name: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
