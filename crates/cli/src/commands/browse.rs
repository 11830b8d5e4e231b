//! Interactive pager over the logs list.

use std::io::Write as _;
use std::num::NonZeroUsize;

use anyhow::Result;
use logbook_client::{LoadState, LogsView};
use logbook_core::LogInput;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::logs::client_for;
use crate::render::render_page;

const HELP: &str = "Commands: n next, p previous, g N go to page, a add, e ID edit, d ID delete, \
                    r reload, h help, q quit";

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Prev,
    Goto(usize),
    Add,
    Edit(i64),
    Delete(i64),
    Reload,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_owned());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments for '{head}'"));
    }
    let id = |arg: Option<&str>| -> Result<i64, String> {
        arg.ok_or_else(|| format!("'{head}' needs a log id"))?
            .parse::<i64>()
            .map_err(|_| format!("Invalid log id for '{head}'"))
    };
    match (head, arg) {
        ("n", None) => Ok(BrowseCommand::Next),
        ("p", None) => Ok(BrowseCommand::Prev),
        ("g", Some(page)) => page
            .parse()
            .map(BrowseCommand::Goto)
            .map_err(|_| format!("Invalid page number '{page}'")),
        ("g", None) => Err("'g' needs a page number".to_owned()),
        ("a", None) => Ok(BrowseCommand::Add),
        ("e", arg) => id(arg).map(BrowseCommand::Edit),
        ("d", arg) => id(arg).map(BrowseCommand::Delete),
        ("r", None) => Ok(BrowseCommand::Reload),
        ("h" | "?", None) => Ok(BrowseCommand::Help),
        ("q", None) => Ok(BrowseCommand::Quit),
        _ => Err(format!("Unknown command '{line}'")),
    }
}

struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self { lines: BufReader::new(tokio::io::stdin()).lines() }
    }

    /// `None` once stdin is closed.
    async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }

    /// Empty answers keep `current`.
    async fn ask_with_default(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let answer = self.ask(&format!("{label} [{current}]: ")).await?;
        Ok(answer.map(|a| if a.trim().is_empty() { current.to_owned() } else { a }))
    }
}

fn show(view: &LogsView) {
    match view.load_state() {
        LoadState::Failed(message) => {
            println!("Error: {message}");
            println!("Type r to retry.");
        },
        LoadState::Idle | LoadState::Loading => println!("Loading..."),
        LoadState::Ready => print!("{}", render_page(view.pagination())),
    }
}

async fn add(view: &mut LogsView, prompt: &mut Prompt) -> Result<()> {
    let Some(owner) = prompt.ask("Owner: ").await? else { return Ok(()) };
    let Some(text) = prompt.ask("Log text: ").await? else { return Ok(()) };
    match view.create(&LogInput::new(&owner, &text)).await {
        Ok(_) => println!("Log created successfully"),
        Err(e) => println!("Error: {}", e.user_message()),
    }
    Ok(())
}

async fn edit(view: &mut LogsView, prompt: &mut Prompt, id: i64) -> Result<()> {
    let current = match view.edit_form(id).await {
        Ok(form) => form,
        Err(e) => {
            println!("Error: {}", e.user_message());
            return Ok(());
        },
    };
    let Some(owner) = prompt.ask_with_default("Owner", &current.owner).await? else {
        return Ok(());
    };
    let Some(text) = prompt.ask_with_default("Log text", &current.log_text).await? else {
        return Ok(());
    };
    match view.update(id, &LogInput::new(&owner, &text)).await {
        Ok(_) => println!("Log updated successfully"),
        Err(e) => println!("Error: {}", e.user_message()),
    }
    Ok(())
}

async fn delete(view: &mut LogsView, prompt: &mut Prompt, id: i64) -> Result<()> {
    let Some(answer) = prompt.ask(&format!("Delete log {id}? [y/N]: ")).await? else {
        return Ok(());
    };
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }
    match view.delete(id).await {
        Ok(()) => println!("Log deleted successfully"),
        Err(e) => println!("Error: {}", e.user_message()),
    }
    Ok(())
}

pub(crate) async fn run(api_url: &str, items_per_page: NonZeroUsize) -> Result<()> {
    let mut view = LogsView::new(client_for(api_url)?, items_per_page);
    let mut prompt = Prompt::new();

    if let Err(e) = view.load().await {
        tracing::debug!(error = %e, "initial load failed");
    }
    show(&view);
    println!("{HELP}");

    while let Some(line) = prompt.ask("> ").await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            },
        };
        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            },
            BrowseCommand::Next => {
                view.next_page();
            },
            BrowseCommand::Prev => {
                view.prev_page();
            },
            BrowseCommand::Goto(page) => {
                view.go_to_page(page);
            },
            BrowseCommand::Reload => {
                if let Err(e) = view.retry().await {
                    tracing::debug!(error = %e, "reload failed");
                }
            },
            BrowseCommand::Add => add(&mut view, &mut prompt).await?,
            BrowseCommand::Edit(id) => edit(&mut view, &mut prompt, id).await?,
            BrowseCommand::Delete(id) => delete(&mut view, &mut prompt, id).await?,
        }
        show(&view);
    }
    Ok(())
}
