use crate::error::{Result, StoreError};
use rolo_core::domain::{ContactId, OwnerId, Task, TaskId, TaskPriority, TaskStatus};
use rusqlite::{params, Connection};
use std::str::FromStr;

const TASK_COLUMNS: &str = "id, owner_id, title, description, due_date, priority, status, \
     contact_id, contact_name, notes, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct TaskNew {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub contact_id: Option<ContactId>,
    pub contact_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<i64>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub contact_id: Option<Option<ContactId>>,
    pub contact_name: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

pub struct TasksRepo<'a> {
    conn: &'a Connection,
}

impl<'a> TasksRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, owner: OwnerId, input: TaskNew) -> Result<Task> {
        let task = Task {
            id: TaskId::new(),
            owner_id: owner,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            status: input.status,
            contact_id: input.contact_id,
            contact_name: input.contact_name,
            notes: input.notes,
            created_at: now_utc,
            updated_at: now_utc,
        };
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (id, owner_id, title, description, due_date, priority, status, contact_id, contact_name, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);",
            params![
                task.id.to_string(),
                task.owner_id.to_string(),
                task.title,
                task.description,
                task.due_date,
                serialize_priority(task.priority),
                serialize_status(task.status),
                task.contact_id.map(|id| id.to_string()),
                task.contact_name,
                task.notes,
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(task)
    }

    pub fn get(&self, owner: OwnerId, id: TaskId) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1 AND owner_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![id.to_string(), owner.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(task_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn list_for_owner(&self, owner: OwnerId) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE owner_id = ?1
             ORDER BY created_at DESC, id ASC;"
        ))?;
        let mut rows = stmt.query([owner.to_string()])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(task_from_row(row)?);
        }
        Ok(tasks)
    }

    pub fn update(
        &self,
        now_utc: i64,
        owner: OwnerId,
        id: TaskId,
        update: TaskUpdate,
    ) -> Result<Task> {
        let mut task = self
            .get(owner, id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(contact_id) = update.contact_id {
            task.contact_id = contact_id;
        }
        if let Some(contact_name) = update.contact_name {
            task.contact_name = contact_name;
        }
        if let Some(notes) = update.notes {
            task.notes = notes;
        }
        task.updated_at = now_utc;
        task.validate()?;

        let updated = self.conn.execute(
            "UPDATE tasks
             SET title = ?3, description = ?4, due_date = ?5, priority = ?6, status = ?7,
                 contact_id = ?8, contact_name = ?9, notes = ?10, updated_at = ?11
             WHERE id = ?1 AND owner_id = ?2;",
            params![
                task.id.to_string(),
                task.owner_id.to_string(),
                task.title,
                task.description,
                task.due_date,
                serialize_priority(task.priority),
                serialize_status(task.status),
                task.contact_id.map(|id| id.to_string()),
                task.contact_name,
                task.notes,
                task.updated_at,
            ],
        )?;
        if updated != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(task)
    }

    pub fn delete(&self, owner: OwnerId, id: TaskId) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM tasks WHERE id = ?1 AND owner_id = ?2;",
            params![id.to_string(), owner.to_string()],
        )?;
        if deleted != 1 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn serialize_priority(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "low",
        TaskPriority::Medium => "medium",
        TaskPriority::High => "high",
    }
}

fn parse_priority(raw: &str) -> Result<TaskPriority> {
    match raw {
        "low" => Ok(TaskPriority::Low),
        "medium" => Ok(TaskPriority::Medium),
        "high" => Ok(TaskPriority::High),
        _ => Err(StoreError::InvalidTaskPriority(raw.to_string())),
    }
}

fn serialize_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
    }
}

fn parse_status(raw: &str) -> Result<TaskStatus> {
    match raw {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        _ => Err(StoreError::InvalidTaskStatus(raw.to_string())),
    }
}

fn task_from_row(row: &rusqlite::Row<'_>) -> Result<Task> {
    let id_raw: String = row.get(0)?;
    let id = TaskId::from_str(&id_raw).map_err(|_| StoreError::InvalidId(id_raw))?;
    let owner_raw: String = row.get(1)?;
    let owner_id = OwnerId::from_str(&owner_raw).map_err(|_| StoreError::InvalidId(owner_raw))?;
    let priority_raw: String = row.get(5)?;
    let status_raw: String = row.get(6)?;
    let contact_raw: Option<String> = row.get(7)?;
    let contact_id = match contact_raw {
        Some(raw) => Some(ContactId::from_str(&raw).map_err(|_| StoreError::InvalidId(raw))?),
        None => None,
    };
    Ok(Task {
        id,
        owner_id,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: row.get(4)?,
        priority: parse_priority(&priority_raw)?,
        status: parse_status(&status_raw)?,
        contact_id,
        contact_name: row.get(8)?,
        notes: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}
