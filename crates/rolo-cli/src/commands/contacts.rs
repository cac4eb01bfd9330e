use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{now_utc, parse_contact_id, parse_country_code};
use anyhow::Result;
use clap::Args;
use rolo_core::domain::{dial_code_mismatch, sanitize_local_digits, to_canonical, to_local};
use rolo_core::filter::{filter_contacts, sort_contacts, ContactFilter, ContactSortKey, SortOrder};
use rolo_store::repo::{ContactNew, ContactUpdate};
use tracing::warn;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Local phone number; formatting characters are dropped.
    #[arg(long)]
    pub phone: String,
    /// ISO country code; defaults to the configured country.
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// New local phone number for the contact's country.
    #[arg(long)]
    pub phone: Option<String>,
    /// Move the contact to another country, re-deriving the stored phone
    /// from the current local digits.
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Match against name, email, phone, and company.
    #[arg(long)]
    pub search: Option<String>,
    /// Only contacts stored with this ISO country code.
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, default_value = "name")]
    pub sort: String,
    #[arg(long, default_value = "asc")]
    pub order: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn add_contact(ctx: &Context<'_>, args: AddContactArgs) -> Result<()> {
    let now = now_utc();
    let country_code = args
        .country
        .unwrap_or_else(|| ctx.config.default_country.clone());
    let country = parse_country_code(&country_code)?;

    let local = sanitize_local_digits(&args.phone);
    let phone = to_canonical(country.code, &local);
    if phone.is_empty() {
        return Err(invalid_input("phone number is required"));
    }

    let contact = ctx.store.contacts().create(
        now,
        ctx.owner,
        ContactNew {
            name: args.name,
            email: args.email,
            phone,
            company: args.company,
            title: args.title,
            address: args.address,
            notes: args.notes,
            country_code: Some(country.code.to_string()),
            country_name: Some(country.name.to_string()),
        },
    )?;

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("created {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn edit_contact(ctx: &Context<'_>, args: EditContactArgs) -> Result<()> {
    let now = now_utc();
    let id = parse_contact_id(&args.id)?;
    let existing = ctx
        .store
        .contacts()
        .get(ctx.owner, id)?
        .ok_or_else(|| not_found("contact not found"))?;

    let mut update = ContactUpdate::default();
    if let Some(name) = args.name {
        update.name = Some(name);
    }
    if let Some(email) = args.email {
        update.email = Some(email);
    }
    if let Some(company) = args.company {
        update.company = Some(normalize_optional_value(company));
    }
    if let Some(title) = args.title {
        update.title = Some(normalize_optional_value(title));
    }
    if let Some(address) = args.address {
        update.address = Some(normalize_optional_value(address));
    }
    if let Some(notes) = args.notes {
        update.notes = Some(normalize_optional_value(notes));
    }

    // Phone and country edits rebuild the canonical value from local digits
    // and the effective country; the old canonical phone is never re-parsed.
    let stored_country = existing.country_code.as_deref().unwrap_or("");
    if let Some(code) = existing.country_code.as_deref() {
        if dial_code_mismatch(code, &existing.phone) {
            warn!(
                contact = %existing.id,
                country = code,
                "stored phone does not start with the country's dial code"
            );
        }
    }

    match (&args.country, &args.phone) {
        (Some(code), Some(raw)) => {
            let country = parse_country_code(code)?;
            let local = sanitize_local_digits(raw);
            apply_phone(&mut update, country, &local)?;
        }
        (Some(code), None) => {
            let country = parse_country_code(code)?;
            let local = to_local(stored_country, &existing.phone);
            apply_phone(&mut update, country, &local)?;
        }
        (None, Some(raw)) => {
            let country = parse_country_code(
                existing
                    .country_code
                    .as_deref()
                    .unwrap_or(&ctx.config.default_country),
            )?;
            let local = sanitize_local_digits(raw);
            apply_phone(&mut update, country, &local)?;
        }
        (None, None) => {}
    }

    if update_is_empty(&update) {
        return Err(invalid_input("no updates provided"));
    }

    let contact = ctx.store.contacts().update(now, ctx.owner, id, update)?;
    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("updated {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .store
        .contacts()
        .get(ctx.owner, id)?
        .ok_or_else(|| not_found("contact not found"))?;

    if ctx.json {
        print_json(&contact)?;
        return Ok(());
    }

    println!("id: {}", contact.id);
    println!("name: {}", contact.name);
    println!("email: {}", contact.email);
    println!("phone: {}", contact.phone);
    if let (Some(code), Some(name)) = (
        contact.country_code.as_deref(),
        contact.country_name.as_deref(),
    ) {
        println!("country: {} ({})", name, code);
    }
    if let Some(company) = contact.company.as_deref() {
        println!("company: {}", company);
    }
    if let Some(title) = contact.title.as_deref() {
        println!("title: {}", title);
    }
    if let Some(address) = contact.address.as_deref() {
        println!("address: {}", address);
    }
    if let Some(notes) = contact.notes.as_deref() {
        println!("notes: {}", notes);
    }

    let interactions = ctx.store.interactions().list_for_contact(ctx.owner, id)?;
    if interactions.is_empty() {
        println!("interactions: none");
    } else {
        println!("interactions:");
        for interaction in interactions {
            println!(
                "  {} [{}] {}",
                crate::util::format_timestamp_date(interaction.occurred_at),
                crate::util::format_interaction_kind(interaction.kind),
                interaction.summary
            );
        }
    }

    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let sort = match args.sort.as_str() {
        "name" => ContactSortKey::Name,
        "email" => ContactSortKey::Email,
        "country" => ContactSortKey::Country,
        other => return Err(invalid_input(format!("invalid sort key: {other}"))),
    };
    let order = match args.order.as_str() {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        other => return Err(invalid_input(format!("invalid sort order: {other}"))),
    };

    let contacts = ctx.store.contacts().list_for_owner(ctx.owner)?;
    let filter = ContactFilter {
        search: args.search,
        country: args.country,
    };
    let mut filtered = filter_contacts(&contacts, &filter);
    sort_contacts(&mut filtered, sort, order);

    if ctx.json {
        print_json(&filtered)?;
        return Ok(());
    }

    if filtered.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for contact in filtered {
        let country = contact.country_name.as_deref().unwrap_or("-");
        println!(
            "{}  {}  {}  {}  {}",
            contact.id, contact.name, contact.email, contact.phone, country
        );
    }

    Ok(())
}

pub fn delete_contact(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    ctx.store.contacts().delete(ctx.owner, id)?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": id }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

fn apply_phone(
    update: &mut ContactUpdate,
    country: &'static rolo_core::domain::Country,
    local: &str,
) -> Result<()> {
    let phone = to_canonical(country.code, local);
    if phone.is_empty() {
        return Err(invalid_input("phone number is required"));
    }
    update.phone = Some(phone);
    update.country_code = Some(Some(country.code.to_string()));
    update.country_name = Some(Some(country.name.to_string()));
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

fn update_is_empty(update: &ContactUpdate) -> bool {
    update.name.is_none()
        && update.email.is_none()
        && update.phone.is_none()
        && update.company.is_none()
        && update.title.is_none()
        && update.address.is_none()
        && update.notes.is_none()
        && update.country_code.is_none()
        && update.country_name.is_none()
}
