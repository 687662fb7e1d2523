//! General REPL commands (help, quit, limit, watch, unwatch)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use euc_core::{EvalConfig, Evaluator};

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `:limit [steps|off]` command
pub fn cmd_limit(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(match ctx.evaluator.config().max_len {
            Some(max) => format!("Pattern length limit: {} steps", max),
            None => "Pattern length limit: off".to_string(),
        });
    }

    let config = if args == "off" {
        EvalConfig::unbounded()
    } else {
        match args.parse::<usize>() {
            Ok(max) if max > 0 => EvalConfig::capped(max),
            _ => {
                return CommandResult::Error(
                    "Invalid limit. Use a positive step count or 'off'".to_string(),
                )
            }
        }
    };
    ctx.evaluator = Evaluator::with_config(config);

    CommandResult::Message(
        match config.max_len {
            Some(max) => format!("Limit set to {} steps", max),
            None => "Limit removed".to_string(),
        }
        .bright_green()
        .to_string(),
    )
}

/// Handle `:watch [file]` command. Without a file, lists what is watched.
pub fn cmd_watch(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::ListWatched;
    }
    CommandResult::Watch(args.to_string())
}

/// Handle `:unwatch <file>` command
pub fn cmd_unwatch(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: :unwatch <file>".to_string());
    }
    CommandResult::Unwatch(args.to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "euc Pattern Help".bold());
    println!("{}", "================".bold());
    println!();
    println!("{}", "Segments:".green());
    println!("  {}            - 3 onsets spread over 8 steps", "3-8".cyan());
    println!("  {}       - ... with modifiers applied left to right", "3-8-r1-m".cyan());
    println!();
    println!("{}", "Modifiers:".green());
    println!("  {} / {}   - Force positions off / on", ">(1,2)".cyan(), "<(1,2)".cyan());
    println!("  {} {} {}      - Take, drop, repeat N", "tN".cyan(), "dN".cyan(), "nN".cyan());
    println!("  {} {}         - Rotate left, stretch each step N times", "rN".cyan(), "sN".cyan());
    println!("  {} {} {}       - Mirror, reverse, negate", "m".cyan(), "R".cyan(), "!".cyan());
    println!();
    println!("{}", "Composition:".green());
    println!("  {}        - Concatenate", "3-8 1-4".cyan());
    println!(
        "  {} {} {} {} - Or, and-not, xor, and (keeps the left length)",
        "+".cyan(),
        "-".cyan(),
        "^".cyan(),
        "&".cyan()
    );
    println!();
    println!("{}", "Commands:".green());
    println!("  {}  - Onset positions", ":onsets <expr>".cyan());
    println!("  {}    - Onset times within one cycle", ":norm <expr>".cyan());
    println!("  {}    - Onset spans within one cycle", ":arcs <expr>".cyan());
    println!("  {}   - Pattern from hex digits", ":hex <digits>".cyan());
    println!("  {} - Running sum of intervals", ":stack <i,...> [N]".cyan());
    println!("  {}     - Show the parsed expression", ":ast <expr>".cyan());
    println!("  {} - Cap pattern length", ":limit [N|off]".cyan());
    println!("  {} - Re-evaluate a file on change", ":watch [file]".cyan());
    println!("  {} - Stop watching a file", ":unwatch <file>".cyan());
    println!("  {}          - Exit", "quit".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_roundtrip() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_limit("32", &mut ctx), CommandResult::Message(_)));
        assert_eq!(ctx.evaluator.config().max_len, Some(32));
        assert!(ctx.eval("1-8-n5").is_err());

        assert!(matches!(cmd_limit("off", &mut ctx), CommandResult::Message(_)));
        assert_eq!(ctx.evaluator.config().max_len, None);
        assert!(ctx.eval("1-8-n5").is_ok());
    }

    #[test]
    fn test_limit_rejects_garbage() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_limit("0", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_limit("lots", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_watch_and_unwatch() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_watch("", &mut ctx), CommandResult::ListWatched));
        match cmd_watch("beats.euc", &mut ctx) {
            CommandResult::Watch(path) => assert_eq!(path, "beats.euc"),
            other => panic!("Expected watch, got {:?}", other),
        }
        assert!(matches!(cmd_unwatch("", &mut ctx), CommandResult::Error(_)));
        match cmd_unwatch("beats.euc", &mut ctx) {
            CommandResult::Unwatch(path) => assert_eq!(path, "beats.euc"),
            other => panic!("Expected unwatch, got {:?}", other),
        }
    }
}
