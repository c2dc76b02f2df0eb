//! Interactive operator loop.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use concierge_application::ConsoleState;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::command::{self, COMMAND_NAMES, Command};
use crate::render;

/// Completion, highlighting and hints for command names.
#[derive(Clone)]
struct ConsoleHelper {
    commands: Vec<String>,
}

impl ConsoleHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    fn is_command_word(line: &str) -> bool {
        !line.is_empty() && !line.contains(' ')
    }
}

impl Helper for ConsoleHelper {}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if Self::is_command_word(line) {
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ConsoleHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((name, rest)) if self.commands.iter().any(|cmd| cmd == name) => {
                Owned(format!("{} {}", name.bright_cyan(), rest))
            }
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if Self::is_command_word(line) {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ConsoleHelper {}

enum Flow {
    Continue,
    Quit,
}

async fn print_view(state: &ConsoleState) {
    print!("{}", render::view(&state.view_model().await));
}

async fn execute(state: &ConsoleState, command: Command) -> Result<Flow> {
    match command {
        Command::Login { email, password } => {
            if state.sign_in(&email, &password).await {
                if let Some(operator) = state.operator().await {
                    println!("{}", format!("Welcome, {}.", operator.display_name).bright_green());
                }
                if let Err(e) = state.load().await {
                    eprintln!("{}", e.to_string().red());
                }
                print_view(state).await;
            } else if let Some(message) = state.last_auth_error().await {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{}", "Email and password are required.".red());
            }
        }
        Command::Logout => {
            state.sign_out().await;
            println!("{}", "Signed out.".bright_green());
        }
        Command::Load => match state.load().await {
            Ok(()) => print_view(state).await,
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        Command::View(view) => {
            state.set_active_view(view).await;
            print_view(state).await;
        }
        Command::Sidebar(open) => {
            match open {
                Some(open) => state.set_sidebar_open(open).await,
                None => {
                    state.toggle_sidebar().await;
                }
            }
            print_view(state).await;
        }
        Command::Search(text) => {
            state.set_search(text).await;
            print_view(state).await;
        }
        Command::Destination(filter) => {
            state.set_destination_filter(filter).await;
            print_view(state).await;
        }
        Command::Select(id) => {
            let was_selected = state.is_selected(&id).await;
            let selected = state.toggle_selection(&id).await;
            match (was_selected, selected) {
                (false, false) => eprintln!("{}", format!("Unknown traveler '{}'.", id).red()),
                (_, true) => println!("{}", format!("Selected {}.", id).green()),
                (true, false) => println!("{}", format!("Deselected {}.", id).yellow()),
            }
        }
        Command::ClearSelection => {
            state.clear_selection().await;
            println!("{}", "Selection cleared.".bright_black());
        }
        Command::Mode(mode) => {
            state.set_message_mode(mode).await;
            print_view(state).await;
        }
        Command::To(recipient) => {
            state.set_recipient(recipient).await;
            print_view(state).await;
        }
        Command::Body(body) => {
            state.set_body(body).await;
            print_view(state).await;
        }
        Command::Quick(action) => {
            let draft = state.apply_quick_action(action).await;
            println!(
                "{}",
                format!("{} ({}): {}", action.label(), draft.mode, action.description())
                    .bright_black()
            );
            print_view(state).await;
        }
        Command::Send(mode) => {
            let result = match mode {
                Some(mode) => state.dispatch(mode).await,
                None => state.send_draft().await,
            };
            match result {
                Ok(receipt) => println!(
                    "{}",
                    format!("Sent to {} traveler(s).", receipt.recipient_count).bright_green()
                ),
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }
        Command::Status => println!("{}", render::status(&state.view_model().await)),
        Command::Json => {
            println!("{}", serde_json::to_string_pretty(&state.view_model().await)?);
        }
        Command::Help => println!("{}", render::help()),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Runs the loop until `quit` or end of input.
pub async fn run(state: ConsoleState, demo: bool) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ConsoleHelper::new()));

    println!("{}", "=== Concierge Console ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, 'quit' to exit.".bright_black());
    if demo {
        println!(
            "{}",
            "Demo credentials: login admin@example.com password".bright_black()
        );
    }
    println!();

    loop {
        let prompt = if state.is_signed_in().await {
            "concierge> "
        } else {
            "(signed out)> "
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Passwords stay out of history.
                if !trimmed.starts_with("login ") {
                    let _ = rl.add_history_entry(trimmed);
                }

                let command = match command::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };

                if !command.allowed_signed_out() && !state.is_signed_in().await {
                    eprintln!("{}", "Sign in first: login <email> <password>".yellow());
                    continue;
                }

                match execute(&state, command).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Err(e) => eprintln!("{}", format!("Error: {:#}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    if state.is_signed_in().await {
        state.sign_out().await;
    }
    Ok(())
}
