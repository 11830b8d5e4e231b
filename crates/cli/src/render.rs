//! Plain-text rendering of log pages for the terminal.

use std::fmt::Write as _;

use logbook_core::{LogRecord, Pagination};

const ID_WIDTH: usize = 6;
const TEXT_WIDTH: usize = 40;
const OWNER_WIDTH: usize = 16;
const DATE_FORMAT: &str = "%d/%m/%Y";

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_owned();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn row(out: &mut String, id: &str, text: &str, owner: &str, created: &str, updated: &str) {
    let _ = writeln!(
        out,
        "{id:>ID_WIDTH$}  {text:<TEXT_WIDTH$}  {owner:<OWNER_WIDTH$}  {created:<10}  {updated:<10}",
        text = truncate(text, TEXT_WIDTH),
        owner = truncate(owner, OWNER_WIDTH),
    );
}

/// Table of the current page plus a position footer.
pub(crate) fn render_page(pagination: &Pagination<LogRecord>) -> String {
    let mut out = String::new();
    row(&mut out, "ID", "Log Text", "Owner", "Created At", "Updated At");
    let records = pagination.page_items();
    if records.is_empty() {
        out.push_str("No logs available.\n");
        return out;
    }
    for record in records {
        row(
            &mut out,
            &record.id.to_string(),
            &record.log_text,
            &record.owner,
            &record.created_at.format(DATE_FORMAT).to_string(),
            &record.updated_at.format(DATE_FORMAT).to_string(),
        );
    }
    if let Some((first, last)) = pagination.page_range() {
        let _ = writeln!(
            out,
            "Page {} of {} (logs {first}-{last} of {})",
            pagination.current_page(),
            pagination.total_pages(),
            pagination.len(),
        );
    }
    out
}

pub(crate) fn render_record(record: &LogRecord) -> String {
    format!(
        "ID:         {}\nOwner:      {}\nLog Text:   {}\nCreated At: {}\nUpdated At: {}\n",
        record.id,
        record.owner,
        record.log_text,
        record.created_at.to_rfc3339(),
        record.updated_at.to_rfc3339(),
    )
}
