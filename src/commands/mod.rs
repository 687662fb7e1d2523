//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod pattern;

use euc_core::{EucError, EvalConfig, Evaluator, Pattern};

/// Length cap the shell starts with, so a stray `n99999` cannot exhaust memory
pub const DEFAULT_MAX_LEN: usize = 4096;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a command, try evaluating as a pattern expression
    NotACommand,
    /// Error occurred
    Error(String),
    /// Watch a file for changes
    Watch(String),
    /// Stop watching a file
    Unwatch(String),
    /// List the files being watched
    ListWatched,
}

/// Context passed to command handlers
pub struct CommandContext {
    pub evaluator: Evaluator,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::capped(DEFAULT_MAX_LEN))
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            evaluator: Evaluator::with_config(config),
        }
    }

    /// Evaluate a pattern expression with the current limits
    pub fn eval(&self, input: &str) -> Result<Pattern, EucError> {
        self.evaluator.evaluate(input)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., ":onsets")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = input[prefix.len()..].trim();
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Pattern views
    registry.register(":onsets", pattern::cmd_onsets);
    registry.register(":norm", pattern::cmd_norm);
    registry.register(":arcs", pattern::cmd_arcs);
    registry.register(":hex", pattern::cmd_hex);
    registry.register(":ast", pattern::cmd_ast);
    registry.register(":stack", pattern::cmd_stack);

    // General commands
    registry.register(":limit", general::cmd_limit);
    registry.register(":watch", general::cmd_watch);
    registry.register(":unwatch", general::cmd_unwatch);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        fn short(_: &str, _: &mut CommandContext) -> CommandResult {
            CommandResult::Message("short".to_string())
        }
        fn long(args: &str, _: &mut CommandContext) -> CommandResult {
            CommandResult::Message(format!("long:{}", args))
        }

        let mut registry = CommandRegistry::new();
        registry.register(":on", short);
        registry.register(":on set", long);
        let mut ctx = CommandContext::new();

        match registry.execute(":on set 3-8", &mut ctx) {
            CommandResult::Message(m) => assert_eq!(m, "long:3-8"),
            other => panic!("Expected message, got {:?}", other),
        }
        match registry.execute(":on", &mut ctx) {
            CommandResult::Message(m) => assert_eq!(m, "short"),
            other => panic!("Expected message, got {:?}", other),
        }
        // A prefix glued to other text is not a match
        assert!(matches!(
            registry.execute(":onx", &mut ctx),
            CommandResult::NotACommand
        ));
    }

    #[test]
    fn test_patterns_are_not_commands() {
        let registry = create_registry();
        let mut ctx = CommandContext::new();
        assert!(matches!(
            registry.execute("3-8 + 1-8", &mut ctx),
            CommandResult::NotACommand
        ));
        assert_eq!(registry.list_commands().len(), 12);
    }

    #[test]
    fn test_context_uses_default_cap() {
        let ctx = CommandContext::new();
        assert_eq!(ctx.evaluator.config().max_len, Some(DEFAULT_MAX_LEN));
        assert!(ctx.eval("1-8-n512").is_ok());
        assert!(ctx.eval("1-8-n513").is_err());
    }
}
