use anyhow::Result;
use rolo_config::AppConfig;
use rolo_core::domain::OwnerId;
use rolo_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod contacts;
pub mod import;
pub mod interactions;
pub mod report;
pub mod tasks;

pub struct Context<'a> {
    pub store: &'a Store,
    pub owner: OwnerId,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
