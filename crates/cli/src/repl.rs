//! REPL loop with rustyline.
//!
//! Interactive mode: `>> ` prompt, history, TAB completion of command
//! names. Pipe mode: read lines from stdin, execute each.

use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use switchboard_executor::{dispatch_shared, parse_line, CommandRegistry, Error, Reply};

/// What executing one line means for the loop around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading lines.
    Ok,
    /// Keep reading lines; the line itself failed.
    Failed,
    /// The exit command ran; stop reading.
    Terminated,
}

/// Run the interactive REPL until the exit command or Ctrl-D.
pub fn run_repl(registry: &Rc<RefCell<CommandRegistry>>) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let names = registry.borrow().list().into_iter().map(|(n, _)| n).collect();
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::with_config(config).unwrap();
    rl.set_helper(Some(ShellHelper::new(names)));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if execute_line(registry, trimmed) == LineOutcome::Terminated {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(registry: &Rc<RefCell<CommandRegistry>>) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match execute_line(registry, trimmed) {
            LineOutcome::Ok => {}
            LineOutcome::Failed => exit_code = 1,
            LineOutcome::Terminated => break,
        }
    }

    exit_code
}

/// Parse and dispatch one input line, printing diagnostics, the command's
/// report (followed by a blank line), or the error text.
pub fn execute_line(registry: &Rc<RefCell<CommandRegistry>>, line: &str) -> LineOutcome {
    let parsed = parse_line(line);
    for diagnostic in &parsed.diagnostics {
        println!("{diagnostic}");
    }
    let Some(invocation) = parsed.invocation else {
        return LineOutcome::Ok;
    };

    match dispatch_shared(registry, &invocation) {
        Ok(Reply::Message(text)) => {
            println!("{text}\n");
            LineOutcome::Ok
        }
        Ok(Reply::Terminate(text)) => {
            println!("{text}");
            LineOutcome::Terminated
        }
        Err(Error::UnknownCommand { name }) => {
            println!("{name} is not a defined command");
            LineOutcome::Failed
        }
        Err(err) => {
            println!("{err}\n");
            LineOutcome::Failed
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.switchboard_history", h))
}

// =========================================================================
// TAB Completion
// =========================================================================

struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }
}

impl Helper for ShellHelper {}
impl Validator for ShellHelper {}
impl Highlighter for ShellHelper {}
impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];

        // Only the command word completes; arguments are free-form.
        if line_to_pos.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|name| name.starts_with(line_to_pos))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}
