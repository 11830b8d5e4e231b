use std::num::NonZeroUsize;

use anyhow::{Result, anyhow};
use logbook_client::{LogsClient, LogsView, ViewError};
use logbook_core::LogInput;

use crate::render::{render_page, render_record};

pub(crate) fn client_for(api_url: &str) -> Result<LogsClient> {
    LogsClient::new(api_url).map_err(|e| anyhow!(e.user_message("Failed to create client")))
}

fn view_for(api_url: &str, items_per_page: NonZeroUsize) -> Result<LogsView> {
    Ok(LogsView::new(client_for(api_url)?, items_per_page))
}

fn user_error(err: &ViewError) -> anyhow::Error {
    anyhow!(err.user_message())
}

pub(crate) async fn run_list(
    api_url: &str,
    page: usize,
    items_per_page: NonZeroUsize,
    json: bool,
) -> Result<()> {
    let mut view = view_for(api_url, items_per_page)?;
    view.load().await.map_err(|e| user_error(&e))?;
    view.go_to_page(page);
    if json {
        println!("{}", serde_json::to_string_pretty(view.page_items())?);
    } else {
        print!("{}", render_page(view.pagination()));
    }
    Ok(())
}

pub(crate) async fn run_get(api_url: &str, id: i64, json: bool) -> Result<()> {
    let record = client_for(api_url)?
        .get_log(id)
        .await
        .map_err(|e| anyhow!(e.user_message("Failed to load log data")))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_record(&record));
    }
    Ok(())
}

pub(crate) async fn run_add(api_url: &str, owner: &str, text: &str) -> Result<()> {
    let mut view = view_for(api_url, NonZeroUsize::MIN)?;
    let record = view.create(&LogInput::new(owner, text)).await.map_err(|e| user_error(&e))?;
    println!("Log created successfully (id {})", record.id);
    Ok(())
}

/// Fields left out keep the value the server currently holds.
pub(crate) async fn run_edit(
    api_url: &str,
    id: i64,
    owner: Option<String>,
    text: Option<String>,
) -> Result<()> {
    let mut view = view_for(api_url, NonZeroUsize::MIN)?;
    let input = match (owner, text) {
        (Some(owner), Some(text)) => LogInput::new(&owner, &text),
        (owner, text) => {
            let current = view.edit_form(id).await.map_err(|e| user_error(&e))?;
            LogInput::new(
                owner.as_deref().unwrap_or(&current.owner),
                text.as_deref().unwrap_or(&current.log_text),
            )
        },
    };
    view.update(id, &input).await.map_err(|e| user_error(&e))?;
    println!("Log updated successfully");
    Ok(())
}

pub(crate) async fn run_delete(api_url: &str, id: i64) -> Result<()> {
    let mut view = view_for(api_url, NonZeroUsize::MIN)?;
    view.delete(id).await.map_err(|e| user_error(&e))?;
    println!("Log deleted successfully");
    Ok(())
}
