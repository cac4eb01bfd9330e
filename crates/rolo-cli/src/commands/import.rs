use crate::commands::{print_json, Context};
use crate::util::now_utc;
use anyhow::{Context as _, Result};
use clap::Args;
use rolo_core::domain::OwnerId;
use rolo_import::{run_import, ContactSink, ImportRow, SinkError, TEMPLATE};
use rolo_store::repo::ContactNew;
use rolo_store::Store;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a header line; name, email, and phone are required.
    pub file: PathBuf,
    /// Parse and validate without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Write the template here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Storage adapter for the pipeline: every validated row becomes one
/// owner-scoped contact. Imported contacts carry no country fields.
struct StoreSink<'a> {
    store: &'a Store,
    owner: OwnerId,
    now_utc: i64,
}

impl ContactSink for StoreSink<'_> {
    fn insert_contact(&mut self, row: &ImportRow) -> std::result::Result<(), SinkError> {
        self.store
            .contacts()
            .create(
                self.now_utc,
                self.owner,
                ContactNew {
                    name: row.name.clone(),
                    email: row.email.clone(),
                    phone: row.phone.clone(),
                    company: row.company.clone(),
                    title: row.title.clone(),
                    address: row.address.clone(),
                    notes: row.notes.clone(),
                    country_code: None,
                    country_name: None,
                },
            )
            .map(|_| ())
            .map_err(|err| Box::new(err) as SinkError)
    }
}

struct NullSink;

impl ContactSink for NullSink {
    fn insert_contact(&mut self, _row: &ImportRow) -> std::result::Result<(), SinkError> {
        Ok(())
    }
}

pub fn import_csv(ctx: &Context<'_>, args: ImportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.file)
        .with_context(|| format!("read csv file {}", args.file.display()))?;

    let on_progress = |progress: rolo_import::ImportProgress| {
        if !ctx.json {
            println!(
                "imported {}/{} ({}%)",
                progress.imported, progress.total, progress.percent
            );
        }
        debug!(
            imported = progress.imported,
            total = progress.total,
            percent = progress.percent,
            "import progress"
        );
    };

    let summary = if args.dry_run {
        run_import(&data, &mut NullSink, on_progress)?
    } else {
        let mut sink = StoreSink {
            store: ctx.store,
            owner: ctx.owner,
            now_utc: now_utc(),
        };
        run_import(&data, &mut sink, on_progress)?
    };

    for warning in &summary.warnings {
        warn!("{warning}");
    }

    if ctx.json {
        print_json(&summary)?;
        return Ok(());
    }

    let suffix = if args.dry_run { " (dry run)" } else { "" };
    println!(
        "Imported {} contact(s), skipped {}{}",
        summary.imported, summary.skipped, suffix
    );
    if !summary.warnings.is_empty() {
        println!("Warnings:");
        for warning in &summary.warnings {
            println!("- {}", warning);
        }
    }

    if !args.dry_run {
        // Storage is the source of truth; re-fetch instead of trusting the
        // batch's own view of what landed.
        let contacts = ctx.store.contacts().list_for_owner(ctx.owner)?;
        println!("{} contact(s) total", contacts.len());
    }

    Ok(())
}

pub fn emit_template(ctx: &Context<'_>, args: TemplateArgs) -> Result<()> {
    match args.out {
        Some(path) => {
            fs::write(&path, TEMPLATE)
                .with_context(|| format!("write template {}", path.display()))?;
            if ctx.json {
                print_json(&serde_json::json!({ "output": path.display().to_string() }))?;
            } else {
                println!("wrote template to {}", path.display());
            }
        }
        None => {
            print!("{TEMPLATE}");
        }
    }
    Ok(())
}
