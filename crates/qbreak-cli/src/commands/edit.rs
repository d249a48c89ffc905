//! Edit command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::SessionArgs;

use super::common::{load_script, print_diagnostics, print_ops, replay, resolve_config};

/// Execute the edit command.
pub fn execute(config_path: Option<&Path>, args: &SessionArgs, json: bool) -> Result<()> {
    let config = resolve_config(config_path, args, None)?;
    let script = load_script(args)?;
    let session = replay(&config, &script)?;
    let grid = session.editor.grid();
    let ops = grid.compile().context("Grid does not compile")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ops)?);
        return Ok(());
    }

    println!(
        "{} Editing {}×{} grid ({} commands)",
        style("→").cyan().bold(),
        grid.wires(),
        grid.columns(),
        session.commands
    );
    print_diagnostics(&session.diagnostics);
    println!();
    print!("{grid}");
    print_ops(&ops);

    Ok(())
}
