use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use rolo_core::report::summarize;

#[derive(Debug, Args)]
pub struct ReportArgs {}

pub fn report(ctx: &Context<'_>, _args: ReportArgs) -> Result<()> {
    let contacts = ctx.store.contacts().list_for_owner(ctx.owner)?;
    let tasks = ctx.store.tasks().list_for_owner(ctx.owner)?;
    let interactions = ctx.store.interactions().list_for_owner(ctx.owner)?;

    let summary = summarize(&contacts, &tasks, &interactions);

    if ctx.json {
        print_json(&summary)?;
        return Ok(());
    }

    println!("contacts: {}", summary.contact_count);
    for (country, count) in &summary.contacts_by_country {
        println!("  {}: {}", country, count);
    }
    println!(
        "tasks: pending {}, in progress {}, completed {}",
        summary.tasks.pending, summary.tasks.in_progress, summary.tasks.completed
    );
    println!(
        "interactions: meetings {}, calls {}, emails {}",
        summary.interactions.meeting, summary.interactions.call, summary.interactions.email
    );

    Ok(())
}
