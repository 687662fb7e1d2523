//! Pattern inspection commands (onsets, norm, arcs, hex, ast, stack)

use crate::commands::{CommandContext, CommandResult};
use colored::*;
use euc_core::parser::parse;
use euc_core::types::{stack, to_f64, Time};
use euc_core::{EucError, Pattern};

/// One-line rendering used for every evaluated pattern
pub fn render(pattern: &Pattern) -> String {
    format!(
        "{}  {}",
        pattern,
        format!("({} steps, {} onsets)", pattern.len(), pattern.onset_count()).bright_black()
    )
}

/// Evaluate every expression line of a pattern file.
///
/// Blank lines and lines starting with `#` are skipped. Each result carries
/// its 1-based line number.
pub fn evaluate_lines(
    contents: &str,
    ctx: &CommandContext,
) -> Vec<(usize, Result<Pattern, EucError>)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, ctx.eval(line)))
        .collect()
}

fn with_pattern<F>(args: &str, ctx: &CommandContext, f: F) -> CommandResult
where
    F: FnOnce(Pattern) -> String,
{
    if args.is_empty() {
        return CommandResult::Error("Expected a pattern expression".to_string());
    }
    match ctx.eval(args) {
        Ok(pattern) => CommandResult::Message(f(pattern)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn format_time(t: Time) -> String {
    if t.is_integer() {
        t.to_integer().to_string()
    } else {
        format!("{} ({:.3})", t, to_f64(t))
    }
}

/// Handle `:onsets <expr>` command
pub fn cmd_onsets(args: &str, ctx: &mut CommandContext) -> CommandResult {
    with_pattern(args, ctx, |p| {
        let onsets: Vec<String> = p.onsets().iter().map(|i| i.to_string()).collect();
        format!("[{}]", onsets.join(", "))
    })
}

/// Handle `:norm <expr>` command
pub fn cmd_norm(args: &str, ctx: &mut CommandContext) -> CommandResult {
    with_pattern(args, ctx, |p| {
        let times: Vec<String> = p.norm().into_iter().map(format_time).collect();
        format!("[{}]", times.join(", "))
    })
}

/// Handle `:arcs <expr>` command
pub fn cmd_arcs(args: &str, ctx: &mut CommandContext) -> CommandResult {
    with_pattern(args, ctx, |p| {
        p.onset_arcs()
            .into_iter()
            .map(|arc| format!("[{}, {}) +{}", arc.start, arc.end, arc.duration()))
            .collect::<Vec<_>>()
            .join("  ")
    })
}

/// Handle `:hex <digits>` command
pub fn cmd_hex(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Error("Usage: :hex <digits>".to_string());
    }
    CommandResult::Message(render(&Pattern::from_hex(args)))
}

/// Handle `:stack <interval,...> [length]` command
pub fn cmd_stack(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    let mut parts = args.split_whitespace();
    let Some(gaps) = parts.next() else {
        return CommandResult::Error("Usage: :stack <interval,...> [length]".to_string());
    };

    let intervals: Result<Vec<Time>, _> =
        gaps.split(',').map(|g| g.trim().parse::<Time>()).collect();
    let intervals = match intervals {
        Ok(intervals) => intervals,
        Err(_) => {
            return CommandResult::Error(format!(
                "Invalid intervals '{}'. Use numbers or fractions like 3/4",
                gaps
            ))
        }
    };

    let length = match parts.next().map(str::parse::<usize>) {
        None => None,
        Some(Ok(length)) => Some(length),
        Some(Err(_)) => return CommandResult::Error("Invalid length".to_string()),
    };

    let times: Vec<String> = stack(&intervals, length).into_iter().map(format_time).collect();
    CommandResult::Message(format!("[{}]", times.join(", ")))
}

/// Handle `:ast <expr>` command
pub fn cmd_ast(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    match parse(args) {
        Ok(program) => {
            let lines: Vec<String> = program
                .terms
                .iter()
                .map(|term| format!("{:?} {}", term.op, term.segment.to_string().cyan()))
                .collect();
            CommandResult::Message(lines.join("\n"))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: CommandResult) -> String {
        match result {
            CommandResult::Message(m) => m,
            other => panic!("Expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_onsets_and_norm() {
        let mut ctx = CommandContext::new();
        assert_eq!(message(cmd_onsets("3-8", &mut ctx)), "[0, 3, 6]");
        assert_eq!(
            message(cmd_norm("1-4 + 1-4-r2", &mut ctx)),
            "[0, 1/2 (0.500)]"
        );
        assert_eq!(
            message(cmd_arcs("2-4", &mut ctx)),
            "[0, 1/2) +1/2  [1/2, 1) +1/2"
        );
    }

    #[test]
    fn test_errors_are_reported() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_onsets("", &mut ctx), CommandResult::Error(_)));
        match cmd_onsets("3", &mut ctx) {
            CommandResult::Error(e) => assert!(e.contains("Syntax error")),
            other => panic!("Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_renders_counts() {
        let mut ctx = CommandContext::new();
        let rendered = message(cmd_hex("8892", &mut ctx));
        assert!(rendered.contains("16 steps, 5 onsets"));
    }

    #[test]
    fn test_stack_times() {
        let mut ctx = CommandContext::new();
        assert_eq!(
            message(cmd_stack("3/4 4", &mut ctx)),
            "[0, 3/4 (0.750), 3/2 (1.500), 9/4 (2.250)]"
        );
        assert_eq!(message(cmd_stack("4,3 4", &mut ctx)), "[0, 4, 7, 11]");
        assert_eq!(message(cmd_stack("1,2", &mut ctx)), "[0, 1, 3]");
        assert!(matches!(cmd_stack("", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_stack("x", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_stack("1 many", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_evaluate_lines_skips_comments() {
        let ctx = CommandContext::new();
        let contents = "# kick\n3-8\n\n  1-4 + 1-4-r2  \n4\n";
        let results = evaluate_lines(contents, &ctx);
        let numbers: Vec<usize> = results.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![2, 4, 5]);
        assert_eq!(results[0].1.as_ref().unwrap().dash(), "x--x--x-");
        assert_eq!(results[1].1.as_ref().unwrap().dash(), "x-x-");
        assert!(results[2].1.is_err());
    }
}
