//! REPL (Read-Eval-Print Loop) for pattern expressions

use crate::commands::pattern::{evaluate_lines, render};
use crate::commands::{create_registry, CommandContext, CommandResult};
use crate::repl::watcher::FileWatcher;
use anyhow::Result;
use colored::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::{Event, EventKind};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use std::path::Path;
use std::thread;
use tracing::{debug, warn};

pub mod watcher;

/// Types of events the REPL loop handles
enum ReplEvent {
    Input(Result<String, ReadlineError>),
}

/// Interactive REPL for pattern expressions
pub struct Repl {
    editor: Option<DefaultEditor>,
    ctx: CommandContext,

    // Event channels
    tx_input: Sender<ReplEvent>,
    rx_input: Receiver<ReplEvent>,
    tx_watcher: Sender<notify::Result<Event>>,
    rx_watcher: Receiver<notify::Result<Event>>,

    // File watcher
    watcher: Option<FileWatcher>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        let (tx_input, rx_input) = unbounded();
        let (tx_watcher, rx_watcher) = unbounded();

        Ok(Repl {
            editor: Some(editor),
            ctx: CommandContext::new(),
            tx_input,
            rx_input,
            tx_watcher,
            rx_watcher,
            watcher: None,
        })
    }

    /// Evaluate one line typed at the prompt
    fn eval_line(&self, line: &str) {
        match self.ctx.eval(line) {
            Ok(pattern) => println!("{}", render(&pattern)),
            Err(e) => println!("{} {}", "Error:".bright_red().bold(), e.to_string().red()),
        }
    }

    /// Evaluate every expression in a pattern file
    fn eval_file(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                for (number, result) in evaluate_lines(&contents, &self.ctx) {
                    match result {
                        Ok(pattern) => println!("{:>4} {}", number, render(&pattern)),
                        Err(e) => println!(
                            "{:>4} {} {}",
                            number,
                            "Error:".red(),
                            e.to_string().red()
                        ),
                    }
                }
            }
            Err(e) => println!("{} Failed to read file: {}", "Error:".red(), e),
        }
    }

    fn start_watching(&mut self, path: &str) {
        // Initialize watcher if needed
        if self.watcher.is_none() {
            match FileWatcher::new(self.tx_watcher.clone()) {
                Ok(w) => self.watcher = Some(w),
                Err(e) => {
                    println!("{} Failed to create watcher: {}", "Error:".red(), e);
                    return;
                }
            }
        }

        if let Some(w) = &mut self.watcher {
            match w.watch(path) {
                Ok(()) => {
                    println!("{} Watching {} for changes...", "👀".bright_cyan(), path.bright_green());
                    self.eval_file(Path::new(path));
                }
                Err(e) => println!("{} Failed to watch {}: {}", "Error:".red(), path, e),
            }
        }
    }

    fn stop_watching(&mut self, path: &str) {
        let Some(w) = self.watcher.as_mut().filter(|w| w.is_watching(Path::new(path))) else {
            println!("{} Not watching {}", "Error:".red(), path);
            return;
        };
        match w.unwatch(path) {
            Ok(()) => println!("Stopped watching {}", path.bright_green()),
            Err(e) => println!("{} Failed to unwatch {}: {}", "Error:".red(), path, e),
        }
    }

    fn list_watched(&self) {
        let watched = self.watcher.as_ref().map(|w| w.watched()).unwrap_or(&[]);
        if watched.is_empty() {
            println!("Not watching any files");
        }
        for path in watched {
            println!("  {}", path.display().to_string().bright_green());
        }
    }

    fn handle_watch_event(&self, event: Event) {
        // Editors save in several ways; any modify or create is worth a reload
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            debug!(kind = ?event.kind, "ignoring watch event");
            return;
        }
        for path in event.paths {
            println!("{} File changed: {}", "⚡".bright_yellow(), path.display());
            self.eval_file(&path);
        }
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🥁".bright_yellow(),
            "euc Euclidean Pattern Shell".bright_cyan().bold()
        );
        println!(
            "Type expressions like: {}, {}, {}",
            "3-8".cyan(),
            "3-8-r2-m".cyan(),
            "4-16 - 1-16-r8".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        // Move editor to thread
        let mut editor = self
            .editor
            .take()
            .ok_or_else(|| anyhow::anyhow!("REPL is already running"))?;
        let tx_input = self.tx_input.clone();

        thread::spawn(move || loop {
            let prompt = format!("{} ", "euc>".bright_magenta().bold());
            match editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    if tx_input.send(ReplEvent::Input(Ok(line))).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx_input.send(ReplEvent::Input(Err(err)));
                    break;
                }
            }
        });

        let registry = create_registry();
        let rx_input = self.rx_input.clone();
        let rx_watcher = self.rx_watcher.clone();

        loop {
            crossbeam_channel::select! {
                recv(rx_input) -> msg => match msg {
                    Ok(ReplEvent::Input(Ok(line))) => {
                        if line.is_empty() {
                            continue;
                        }

                        match registry.execute(&line, &mut self.ctx) {
                            CommandResult::Success => {}
                            CommandResult::Message(msg) => println!("{}", msg),
                            CommandResult::Exit => {
                                println!("{} 🥁", "Goodbye!".bright_cyan());
                                break;
                            }
                            CommandResult::Error(e) => {
                                println!("{} {}", "Error:".bright_red().bold(), e.red());
                            }
                            CommandResult::Watch(path) => self.start_watching(&path),
                            CommandResult::Unwatch(path) => self.stop_watching(&path),
                            CommandResult::ListWatched => self.list_watched(),
                            CommandResult::NotACommand => self.eval_line(&line),
                        }
                    }
                    Ok(ReplEvent::Input(Err(ReadlineError::Interrupted)))
                    | Ok(ReplEvent::Input(Err(ReadlineError::Eof))) => {
                        println!("{} 🥁", "Goodbye!".bright_cyan());
                        break;
                    }
                    Ok(ReplEvent::Input(Err(err))) => {
                        println!(
                            "{} {}",
                            "Error reading input:".bright_red().bold(),
                            err.to_string().red()
                        );
                        break;
                    }
                    Err(_) => break, // Channel closed
                },

                recv(rx_watcher) -> msg => match msg {
                    Ok(Ok(event)) => self.handle_watch_event(event),
                    Ok(Err(e)) => warn!(error = %e, "file watch error"),
                    Err(_) => break, // Channel closed
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
