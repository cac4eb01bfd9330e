use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rolo_core::domain::{
    find_country, ContactId, InteractionId, InteractionKind, InteractionStatus, TaskId,
    TaskPriority, TaskStatus,
};
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn parse_local_date(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date format: expected YYYY-MM-DD"))?;
    let time = NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| anyhow!("invalid time"))?;
    local_to_utc_timestamp(date.and_time(time))
}

pub fn format_timestamp_date(ts: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap())
        .with_timezone(&Local);
    dt.format("%Y-%m-%d").to_string()
}

pub fn parse_contact_id(raw: &str) -> Result<ContactId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("contact id cannot be empty"));
    }
    ContactId::from_str(trimmed).map_err(|_| anyhow!("invalid contact id"))
}

pub fn parse_task_id(raw: &str) -> Result<TaskId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("task id cannot be empty"));
    }
    TaskId::from_str(trimmed).map_err(|_| anyhow!("invalid task id"))
}

pub fn parse_interaction_id(raw: &str) -> Result<InteractionId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("interaction id cannot be empty"));
    }
    InteractionId::from_str(trimmed).map_err(|_| anyhow!("invalid interaction id"))
}

pub fn parse_country_code(raw: &str) -> Result<&'static rolo_core::domain::Country> {
    let trimmed = raw.trim();
    find_country(trimmed).ok_or_else(|| anyhow!("unknown country code: {trimmed}"))
}

pub fn parse_task_priority(raw: &str) -> Result<TaskPriority> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(TaskPriority::Low),
        "medium" => Ok(TaskPriority::Medium),
        "high" => Ok(TaskPriority::High),
        _ => Err(anyhow!("invalid priority: expected low|medium|high")),
    }
}

pub fn parse_task_status(raw: &str) -> Result<TaskStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        _ => Err(anyhow!(
            "invalid status: expected pending|in_progress|completed"
        )),
    }
}

pub fn parse_interaction_kind(raw: &str) -> Result<InteractionKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "meeting" => Ok(InteractionKind::Meeting),
        "call" => Ok(InteractionKind::Call),
        "email" => Ok(InteractionKind::Email),
        _ => Err(anyhow!("invalid kind: expected meeting|call|email")),
    }
}

pub fn parse_interaction_status(raw: &str) -> Result<InteractionStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "completed" => Ok(InteractionStatus::Completed),
        "needs_follow_up" => Ok(InteractionStatus::NeedsFollowUp),
        _ => Err(anyhow!(
            "invalid status: expected completed|needs_follow_up"
        )),
    }
}

pub fn format_task_priority(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "low",
        TaskPriority::Medium => "medium",
        TaskPriority::High => "high",
    }
}

pub fn format_task_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
    }
}

pub fn format_interaction_kind(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Meeting => "meeting",
        InteractionKind::Call => "call",
        InteractionKind::Email => "email",
    }
}

pub fn format_interaction_status(status: InteractionStatus) -> &'static str {
    match status {
        InteractionStatus::Completed => "completed",
        InteractionStatus::NeedsFollowUp => "needs_follow_up",
    }
}

fn local_to_utc_timestamp(naive: NaiveDateTime) -> Result<i64> {
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| anyhow!("ambiguous local time: {}", naive))?;
    Ok(local.with_timezone(&Utc).timestamp())
}
