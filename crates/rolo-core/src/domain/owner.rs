use crate::domain::ids::OwnerId;
use serde::{Deserialize, Serialize};

/// The principal that owns every contact, task, and interaction it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub handle: String,
    pub created_at: i64,
}
