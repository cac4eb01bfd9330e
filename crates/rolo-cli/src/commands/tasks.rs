use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    format_task_priority, format_task_status, format_timestamp_date, now_utc, parse_contact_id,
    parse_local_date, parse_task_id, parse_task_priority, parse_task_status,
};
use anyhow::Result;
use clap::Args;
use rolo_core::domain::{TaskPriority, TaskStatus};
use rolo_store::repo::{TaskNew, TaskUpdate};

#[derive(Debug, Args)]
pub struct AddTaskArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date as YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long, default_value = "pending")]
    pub status: String,
    /// Contact the task relates to.
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditTaskArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListTasksArgs {
    /// Only tasks in this status.
    #[arg(long)]
    pub status: Option<String>,
    /// Only tasks with this priority.
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteTaskArgs {
    pub id: String,
}

pub fn add_task(ctx: &Context<'_>, args: AddTaskArgs) -> Result<()> {
    let now = now_utc();
    let due_date = match args.due {
        Some(value) => Some(parse_local_date(&value)?),
        None => None,
    };
    let priority = parse_task_priority(&args.priority)?;
    let status = parse_task_status(&args.status)?;

    let (contact_id, contact_name) = match args.contact {
        Some(raw) => {
            let id = parse_contact_id(&raw)?;
            let contact = ctx
                .store
                .contacts()
                .get(ctx.owner, id)?
                .ok_or_else(|| not_found("contact not found"))?;
            (Some(contact.id), Some(contact.name))
        }
        None => (None, None),
    };

    let task = ctx.store.tasks().create(
        now,
        ctx.owner,
        TaskNew {
            title: args.title,
            description: args.description,
            due_date,
            priority,
            status,
            contact_id,
            contact_name,
            notes: args.notes,
        },
    )?;

    if ctx.json {
        print_json(&task)?;
    } else {
        println!("created {} {}", task.id, task.title);
    }
    Ok(())
}

pub fn edit_task(ctx: &Context<'_>, args: EditTaskArgs) -> Result<()> {
    let now = now_utc();
    let id = parse_task_id(&args.id)?;

    let mut update = TaskUpdate::default();
    if let Some(title) = args.title {
        update.title = Some(title);
    }
    if let Some(description) = args.description {
        update.description = Some(normalize_optional_value(description));
    }
    if let Some(due) = args.due {
        update.due_date = Some(Some(parse_local_date(&due)?));
    }
    if let Some(priority) = args.priority {
        update.priority = Some(parse_task_priority(&priority)?);
    }
    if let Some(status) = args.status {
        update.status = Some(parse_task_status(&status)?);
    }
    if let Some(notes) = args.notes {
        update.notes = Some(normalize_optional_value(notes));
    }

    if update_is_empty(&update) {
        return Err(invalid_input("no updates provided"));
    }

    let task = ctx.store.tasks().update(now, ctx.owner, id, update)?;
    if ctx.json {
        print_json(&task)?;
    } else {
        println!("updated {} {}", task.id, task.title);
    }
    Ok(())
}

pub fn list_tasks(ctx: &Context<'_>, args: ListTasksArgs) -> Result<()> {
    let status_filter: Option<TaskStatus> = match args.status {
        Some(raw) => Some(parse_task_status(&raw)?),
        None => None,
    };
    let priority_filter: Option<TaskPriority> = match args.priority {
        Some(raw) => Some(parse_task_priority(&raw)?),
        None => None,
    };

    let tasks = ctx.store.tasks().list_for_owner(ctx.owner)?;
    let filtered: Vec<_> = tasks
        .into_iter()
        .filter(|task| status_filter.map_or(true, |status| task.status == status))
        .filter(|task| priority_filter.map_or(true, |priority| task.priority == priority))
        .collect();

    if ctx.json {
        print_json(&filtered)?;
        return Ok(());
    }

    if filtered.is_empty() {
        println!("no tasks");
        return Ok(());
    }

    for task in filtered {
        let due = task
            .due_date
            .map(format_timestamp_date)
            .unwrap_or_else(|| "-".to_string());
        let contact_suffix = task
            .contact_name
            .as_deref()
            .map(|name| format!("  ({name})"))
            .unwrap_or_default();
        println!(
            "{}  {}  [{}/{}]  due {}{}",
            task.id,
            task.title,
            format_task_priority(task.priority),
            format_task_status(task.status),
            due,
            contact_suffix
        );
    }

    Ok(())
}

pub fn delete_task(ctx: &Context<'_>, args: DeleteTaskArgs) -> Result<()> {
    let id = parse_task_id(&args.id)?;
    ctx.store.tasks().delete(ctx.owner, id)?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": id }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

fn normalize_optional_value(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn update_is_empty(update: &TaskUpdate) -> bool {
    update.title.is_none()
        && update.description.is_none()
        && update.due_date.is_none()
        && update.priority.is_none()
        && update.status.is_none()
        && update.contact_id.is_none()
        && update.contact_name.is_none()
        && update.notes.is_none()
}
