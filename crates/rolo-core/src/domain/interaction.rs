use crate::domain::ids::{ContactId, InteractionId, OwnerId};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Meeting,
    Call,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStatus {
    Completed,
    NeedsFollowUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub owner_id: OwnerId,
    pub contact_id: ContactId,
    pub kind: InteractionKind,
    pub occurred_at: i64,
    pub duration_minutes: Option<i32>,
    pub summary: String,
    pub notes: Option<String>,
    pub follow_up_at: Option<i64>,
    pub follow_up_notes: Option<String>,
    pub status: InteractionStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Interaction {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.summary.trim().is_empty() {
            return Err(CoreError::EmptySummary);
        }
        Ok(())
    }
}
