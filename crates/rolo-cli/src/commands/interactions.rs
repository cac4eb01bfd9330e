use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    format_interaction_kind, format_interaction_status, format_timestamp_date, now_utc,
    parse_contact_id, parse_interaction_id, parse_interaction_kind, parse_interaction_status,
    parse_local_date,
};
use anyhow::Result;
use clap::Args;
use rolo_core::domain::InteractionStatus;
use rolo_store::repo::{InteractionNew, InteractionUpdate};

#[derive(Debug, Args)]
pub struct LogInteractionArgs {
    /// Contact the interaction was with.
    #[arg(long)]
    pub contact: String,
    #[arg(long, default_value = "meeting")]
    pub kind: String,
    /// Date as YYYY-MM-DD; defaults to now.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub duration: Option<i32>,
    #[arg(long)]
    pub summary: String,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub follow_up: Option<String>,
    #[arg(long)]
    pub follow_up_notes: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditInteractionArgs {
    pub id: String,
    #[arg(long)]
    pub kind: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub duration: Option<i32>,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub follow_up: Option<String>,
    #[arg(long)]
    pub follow_up_notes: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListInteractionsArgs {
    /// Only interactions with this contact.
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteInteractionArgs {
    pub id: String,
}

pub fn log_interaction(ctx: &Context<'_>, args: LogInteractionArgs) -> Result<()> {
    let now = now_utc();
    let contact_id = parse_contact_id(&args.contact)?;
    ctx.store
        .contacts()
        .get(ctx.owner, contact_id)?
        .ok_or_else(|| not_found("contact not found"))?;

    let kind = parse_interaction_kind(&args.kind)?;
    let occurred_at = match args.date {
        Some(value) => parse_local_date(&value)?,
        None => now,
    };
    let follow_up_at = match args.follow_up {
        Some(value) => Some(parse_local_date(&value)?),
        None => None,
    };
    let status = match args.status {
        Some(raw) => parse_interaction_status(&raw)?,
        None if follow_up_at.is_some() => InteractionStatus::NeedsFollowUp,
        None => InteractionStatus::Completed,
    };

    let interaction = ctx.store.interactions().create(
        now,
        ctx.owner,
        InteractionNew {
            contact_id,
            kind,
            occurred_at,
            duration_minutes: args.duration,
            summary: args.summary,
            notes: args.notes,
            follow_up_at,
            follow_up_notes: args.follow_up_notes,
            status,
        },
    )?;

    if ctx.json {
        print_json(&interaction)?;
    } else {
        println!("logged {} {}", interaction.id, interaction.summary);
    }
    Ok(())
}

pub fn edit_interaction(ctx: &Context<'_>, args: EditInteractionArgs) -> Result<()> {
    let now = now_utc();
    let id = parse_interaction_id(&args.id)?;

    let mut update = InteractionUpdate::default();
    if let Some(kind) = args.kind {
        update.kind = Some(parse_interaction_kind(&kind)?);
    }
    if let Some(date) = args.date {
        update.occurred_at = Some(parse_local_date(&date)?);
    }
    if let Some(duration) = args.duration {
        update.duration_minutes = Some(Some(duration));
    }
    if let Some(summary) = args.summary {
        update.summary = Some(summary);
    }
    if let Some(notes) = args.notes {
        update.notes = Some(normalize_optional_value(notes));
    }
    if let Some(follow_up) = args.follow_up {
        update.follow_up_at = Some(Some(parse_local_date(&follow_up)?));
    }
    if let Some(follow_up_notes) = args.follow_up_notes {
        update.follow_up_notes = Some(normalize_optional_value(follow_up_notes));
    }
    if let Some(status) = args.status {
        update.status = Some(parse_interaction_status(&status)?);
    }

    if update_is_empty(&update) {
        return Err(invalid_input("no updates provided"));
    }

    let interaction = ctx.store.interactions().update(now, ctx.owner, id, update)?;
    if ctx.json {
        print_json(&interaction)?;
    } else {
        println!("updated {} {}", interaction.id, interaction.summary);
    }
    Ok(())
}

pub fn list_interactions(ctx: &Context<'_>, args: ListInteractionsArgs) -> Result<()> {
    let interactions = match args.contact {
        Some(raw) => {
            let contact_id = parse_contact_id(&raw)?;
            ctx.store
                .interactions()
                .list_for_contact(ctx.owner, contact_id)?
        }
        None => ctx.store.interactions().list_for_owner(ctx.owner)?,
    };

    if ctx.json {
        print_json(&interactions)?;
        return Ok(());
    }

    if interactions.is_empty() {
        println!("no interactions");
        return Ok(());
    }

    for interaction in interactions {
        let duration = interaction
            .duration_minutes
            .map(|minutes| format!(" {minutes}m"))
            .unwrap_or_default();
        println!(
            "{}  {}  [{}]{}  {}  ({})",
            interaction.id,
            format_timestamp_date(interaction.occurred_at),
            format_interaction_kind(interaction.kind),
            duration,
            interaction.summary,
            format_interaction_status(interaction.status)
        );
    }

    Ok(())
}

pub fn delete_interaction(ctx: &Context<'_>, args: DeleteInteractionArgs) -> Result<()> {
    let id = parse_interaction_id(&args.id)?;
    ctx.store.interactions().delete(ctx.owner, id)?;
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

fn update_is_empty(update: &InteractionUpdate) -> bool {
    update.kind.is_none()
        && update.occurred_at.is_none()
        && update.duration_minutes.is_none()
        && update.summary.is_none()
        && update.notes.is_none()
        && update.follow_up_at.is_none()
        && update.follow_up_notes.is_none()
        && update.status.is_none()
}
