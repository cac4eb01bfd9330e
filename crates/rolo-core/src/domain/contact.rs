use crate::domain::ids::{ContactId, OwnerId};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: OwnerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Contact {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::EmptyEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(CoreError::EmptyPhone);
        }
        Ok(())
    }
}
