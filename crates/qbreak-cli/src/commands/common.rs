//! Shared helpers for CLI commands.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::{debug, warn};

use qbreak_editor::{Command, CommandParser, EditError, Editor};
use qbreak_grid::{GateOp, Grid, basis_label};

use crate::SessionArgs;
use crate::config::QbreakConfig;

/// Outcomes listed before the rest are summarized.
const MAX_LISTED: usize = 16;

/// Probabilities below this are not listed.
const PROBABILITY_EPSILON: f64 = 1e-12;

/// A replayed edit script.
#[derive(Debug)]
pub struct Session {
    /// Editor holding the final grid.
    pub editor: Editor,
    /// Number of commands replayed.
    pub commands: usize,
    /// Rejected commands, by position in the script.
    pub diagnostics: Vec<(usize, EditError)>,
}

/// Load configuration and apply the command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    args: &SessionArgs,
    shots: Option<u32>,
) -> Result<QbreakConfig> {
    QbreakConfig::load(config_path)?.with_overrides(args, shots)
}

/// Read the edit script from `--script` or `--input`.
pub fn load_script(args: &SessionArgs) -> Result<String> {
    match (&args.script, &args.input) {
        (Some(script), _) => Ok(script.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display())),
        (None, None) => anyhow::bail!("No edit script given (use --script or --input)"),
    }
}

/// Replay `script` against a fresh grid sized by `config`.
///
/// Rejected commands are collected as diagnostics and the replay continues.
pub fn replay(config: &QbreakConfig, script: &str) -> Result<Session> {
    let grid = Grid::from_config(&config.grid).context("Invalid grid dimensions")?;
    let commands = CommandParser::new(config.rotation_step).parse_script(script)?;
    replay_commands(Editor::new(grid), &commands)
}

/// Apply `commands` in order, keeping recoverable rejections as diagnostics.
pub fn replay_commands(mut editor: Editor, commands: &[Command]) -> Result<Session> {
    let mut diagnostics = Vec::new();
    for (idx, &command) in commands.iter().enumerate() {
        match editor.apply(command) {
            Ok(outcome) => debug!(step = idx + 1, ?command, ?outcome, "applied"),
            Err(e) if e.is_recoverable() => {
                warn!(step = idx + 1, ?command, "{e}");
                diagnostics.push((idx + 1, e));
            }
            Err(e) => return Err(e).with_context(|| format!("Command {} failed", idx + 1)),
        }
    }
    Ok(Session {
        editor,
        commands: commands.len(),
        diagnostics,
    })
}

/// Print rejected commands.
pub fn print_diagnostics(diagnostics: &[(usize, EditError)]) {
    for (step, error) in diagnostics {
        println!(
            "  {} step {}: {}",
            style("!").yellow().bold(),
            step,
            style(error).dim()
        );
    }
}

/// Print compiled operations in order.
pub fn print_ops(ops: &[GateOp]) {
    println!("\n{} ({}):", style("Operations").bold(), ops.len());
    if ops.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for (idx, op) in ops.iter().enumerate() {
        println!("  {:>2}. {}", idx + 1, style(op).cyan());
    }
}

fn bar(fraction: f64) -> String {
    let percent = fraction * 100.0;
    "█".repeat((percent / 2.0).round() as usize)
}

/// Print the probability of every reachable basis state.
pub fn print_probabilities(probabilities: &[f64], wires: usize) {
    println!("\n{} Probabilities:", style("✓").green().bold());

    let listed: Vec<(usize, f64)> = probabilities
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| *p > PROBABILITY_EPSILON)
        .collect();

    for (state, p) in listed.iter().take(MAX_LISTED) {
        println!(
            "  {}: {:>6.2}% {}",
            style(basis_label(*state, wires)).cyan(),
            p * 100.0,
            style(bar(*p)).green()
        );
    }
    if listed.len() > MAX_LISTED {
        println!("  ... and {} more outcomes", listed.len() - MAX_LISTED);
    }
}

/// Print measurement counts.
pub fn print_counts(counts: &BTreeMap<usize, u32>, shots: u32, wires: usize) {
    println!(
        "\n{} Measurements ({} shots):",
        style("✓").green().bold(),
        shots
    );

    let mut sorted: Vec<(&usize, &u32)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    for (state, count) in sorted.iter().take(MAX_LISTED) {
        let fraction = f64::from(**count) / f64::from(shots);
        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(basis_label(**state, wires)).cyan(),
            count,
            fraction * 100.0,
            style(bar(fraction)).green()
        );
    }
    if sorted.len() > MAX_LISTED {
        println!("  ... and {} more outcomes", sorted.len() - MAX_LISTED);
    }
}
