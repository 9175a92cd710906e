use super::print::print_messages;
use super::styles::TASKZ_STYLES;
use crate::controller::CmdMessage;
use crate::error::{Result, TaskzError};
use crate::model::{Filter, Task};
use crate::surface::{Event, Surface};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "No tasks!";
const PROMPT: &str = "taskz> ";
const SESSION_HELP: &str =
    "commands: add <text> | done <id> | rm <id> | clear | all | pending | completed | quit";

/// Terminal implementation of [`Surface`]: one card line per task, a filter
/// bar below the list, and a line-based prompt for session mode.
pub struct TermSurface {
    line_width: usize,
}

impl TermSurface {
    pub fn new(line_width: usize) -> Self {
        Self { line_width }
    }
}

impl Surface for TermSurface {
    fn render_tasks(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            println!("{}", TASKZ_STYLES.placeholder.apply_to(PLACEHOLDER));
            return;
        }
        for task in tasks {
            println!("{}", format_card(task, self.line_width));
        }
    }

    fn update_filter_indicator(&mut self, filter: Filter) {
        println!("{}", filter_bar(filter));
    }

    fn show_messages(&mut self, messages: &[CmdMessage]) {
        print_messages(messages);
    }

    fn next_event(&mut self) -> Result<Option<Event>> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush().map_err(TaskzError::Io)?;

            line.clear();
            let read = stdin.lock().read_line(&mut line).map_err(TaskzError::Io)?;
            if read == 0 {
                return Ok(None);
            }

            match parse_event(&line) {
                Ok(event) => return Ok(event),
                Err(hint) => {
                    println!("{}", TASKZ_STYLES.placeholder.apply_to(hint));
                    println!("{}", TASKZ_STYLES.placeholder.apply_to(SESSION_HELP));
                }
            }
        }
    }
}

fn format_card(task: &Task, line_width: usize) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let id_str = format!("{}. ", task.id);

    // indent + checkbox + space + id column
    let fixed_width = 2 + 4 + id_str.width();
    let available = line_width.saturating_sub(fixed_width);
    let text = truncate_to_width(&task.text, available);

    let text_styled = if task.completed {
        TASKZ_STYLES.completed_text.apply_to(text)
    } else {
        TASKZ_STYLES.pending_text.apply_to(text)
    };

    format!(
        "  {} {}{}",
        checkbox,
        TASKZ_STYLES.id.apply_to(id_str),
        text_styled
    )
}

fn filter_bar(current: Filter) -> String {
    let parts: Vec<String> = Filter::ALL
        .iter()
        .map(|f| {
            if *f == current {
                TASKZ_STYLES
                    .filter_active
                    .apply_to(format!("[{}]", f))
                    .to_string()
            } else {
                TASKZ_STYLES.filter_inactive.apply_to(f.to_string()).to_string()
            }
        })
        .collect();
    format!("  {}", parts.join("  "))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Parse one session line. `Ok(None)` ends the session; `Err` carries a hint
/// for the user and keeps the prompt alive.
fn parse_event(line: &str) -> std::result::Result<Option<Event>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Err("Nothing entered.".to_string()),
        "quit" | "exit" | "q" => Ok(None),
        "add" | "a" => Ok(Some(Event::Add(rest.to_string()))),
        "done" | "d" => parse_id(rest).map(|id| Some(Event::Toggle(id))),
        "rm" | "del" => parse_id(rest).map(|id| Some(Event::Delete(id))),
        "clear" => Ok(Some(Event::Clear)),
        "all" | "pending" | "completed" => {
            let filter = Filter::from_str(word).map_err(|e| e.to_string())?;
            Ok(Some(Event::SetFilter(filter)))
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_id(arg: &str) -> std::result::Result<u64, String> {
    arg.parse().map_err(|_| format!("Not a task id: {}", arg))
}
