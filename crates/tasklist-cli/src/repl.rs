use std::io::{BufRead, Write};

use anyhow::{Context, anyhow, bail};
use tasklist_core::{PostRenderEffect, TaskFilter, TaskIntent, TaskSession, ViewState};
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  add <name>          append a new task
  toggle <id>         flip a task between active and completed
  edit <id> <name>    rename a task
  delete <id>         remove a task
  filter <name>       show All, Active or Completed tasks
  show                print the current view
  dump                print every task as JSON
  help                this text
  quit                leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(TaskIntent),
    Show,
    Dump,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Command::Intent(TaskIntent::Add(rest.to_string())),
            "toggle" => Command::Intent(TaskIntent::ToggleCompleted(required_id(rest)?)),
            "delete" | "rm" => Command::Intent(TaskIntent::Delete(required_id(rest)?)),
            "edit" => {
                let (id, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("usage: edit <id> <name>"))?;
                Command::Intent(TaskIntent::Edit {
                    id: id.to_string(),
                    name: name.trim().to_string(),
                })
            }
            "filter" => Command::Intent(TaskIntent::SetFilter(TaskFilter::parse_loose(rest)?)),
            "show" | "ls" => Command::Show,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command {other:?}; try `help`"),
        };
        Ok(command)
    }
}

fn required_id(rest: &str) -> anyhow::Result<String> {
    match rest.split_whitespace().next() {
        Some(id) => Ok(id.to_string()),
        None => Err(anyhow!("missing task id")),
    }
}

pub fn write_view(out: &mut impl Write, view: &ViewState) -> anyhow::Result<()> {
    writeln!(out, "{}", view.heading)?;
    for task in &view.visible {
        let mark = if task.completed { "x" } else { " " };
        writeln!(out, "  [{mark}] {}  {}", task.id, task.name)?;
    }

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|option| {
            if option.pressed {
                format!("[{}]", option.filter)
            } else {
                option.filter.to_string()
            }
        })
        .collect();
    writeln!(out, "filters: {}", filters.join(" "))?;
    writeln!(
        out,
        "({} total, {} active, {} completed)",
        view.total, view.active, view.completed
    )?;
    Ok(())
}

/// Render, then run the post-render phase of the cycle.
fn render_cycle(session: &mut TaskSession, out: &mut impl Write) -> anyhow::Result<()> {
    write_view(out, &session.view())?;
    for effect in session.after_render() {
        match effect {
            PostRenderEffect::FocusHeading => writeln!(out, "(focus -> heading)")?,
        }
    }
    Ok(())
}

/// Reads one command per line until `quit` or end of input.
#[tracing::instrument(skip_all)]
pub fn run_session<R, W, E>(
    session: &mut TaskSession,
    input: R,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    render_cycle(session, out)?;

    for line in input.lines() {
        let line = line.context("failed reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(error) => {
                warn!(%error, "rejected command");
                writeln!(err, "error: {error}")?;
                continue;
            }
        };
        debug!(?command, "parsed command");

        match command {
            Command::Intent(intent) => {
                let cycle = session.dispatch(intent);
                if cycle.changed {
                    render_cycle(session, out)?;
                } else {
                    writeln!(out, "(no change)")?;
                }
            }
            Command::Show => render_cycle(session, out)?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(session.tasks().as_slice())
                    .context("failed to serialize tasks")?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
