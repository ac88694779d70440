//! Line-oriented board host.
//!
//! # Responsibility
//! - Print smoke lines proving `projboard_core` linkage.
//! - Drive one in-memory board from stdin commands and print its lists.
//!
//! Commands:
//! - `add <title>|<description>|<people>`
//! - `move <id> <active|finished>`
//! - `drag <id> <active|finished>`
//! - `show`
//! - `quit`

use log::{info, warn};
use projboard_core::{parse_project_id, Board, BoardConfig, ListView, ProjectStatus};
use std::io::{self, BufRead, Write};

fn main() {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let config = BoardConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = projboard_core::init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let board = Board::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("stdin read failed: {err}");
                break;
            }
        };
        let reply = match run_command(&board, line.trim()) {
            Step::Continue(reply) => reply,
            Step::Quit => break,
        };
        if let Err(err) = writeln!(out, "{reply}") {
            eprintln!("stdout write failed: {err}");
            break;
        }
    }
    info!("event=cli_exit module=cli status=ok projects={}", board.projects().len());
}

enum Step {
    Continue(String),
    Quit,
}

fn run_command(board: &Board, line: &str) -> Step {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let reply = match command {
        "" => return Step::Continue(String::new()),
        "quit" | "exit" => return Step::Quit,
        "show" => render_board(&board.render()),
        "add" => add(board, rest),
        "move" | "drag" => match parse_target(rest) {
            Ok((id, status)) if command == "move" => {
                if board.move_project(id, status) {
                    format!("moved {id} to {status}")
                } else {
                    format!("nothing to move for {id}")
                }
            }
            Ok((id, status)) => match board.drag_project(id, status) {
                Some(outcome) if outcome.moved => format!("dropped {id} on {status}"),
                Some(_) => format!("drop on {status} changed nothing"),
                None => format!("no card for {id}"),
            },
            Err(message) => message,
        },
        other => {
            warn!("event=cli_command module=cli status=error command={other}");
            format!("unknown command `{other}`; expected add|move|drag|show|quit")
        }
    };
    Step::Continue(reply)
}

fn add(board: &Board, rest: &str) -> String {
    let fields = rest.splitn(3, '|').collect::<Vec<_>>();
    let [title, description, people] = fields.as_slice() else {
        return "usage: add <title>|<description>|<people>".to_string();
    };
    match board.submit(*title, *description, *people) {
        Ok(id) => format!("added {id}"),
        Err(err) => err.to_string(),
    }
}

fn parse_target(rest: &str) -> Result<(projboard_core::ProjectId, ProjectStatus), String> {
    let mut parts = rest.split_whitespace();
    let (Some(raw_id), Some(raw_status), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("usage: move|drag <id> <active|finished>".to_string());
    };
    let id = parse_project_id(raw_id).ok_or_else(|| format!("not a project id: `{raw_id}`"))?;
    let status = ProjectStatus::parse(raw_status).map_err(|err| err.to_string())?;
    Ok((id, status))
}

fn render_board(lists: &[ListView]) -> String {
    let mut text = String::new();
    for list in lists {
        text.push_str(&format!("== {} ==\n", list.heading));
        if list.items.is_empty() {
            text.push_str("  (empty)\n");
        }
        for item in &list.items {
            text.push_str(&format!(
                "  [{}] {} ({})\n      {}\n",
                item.element_id, item.title, item.participants, item.description
            ));
        }
    }
    text.trim_end().to_string()
}
