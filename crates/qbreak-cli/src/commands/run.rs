//! Run command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde_json::json;

use qbreak_adapter_sim::StatevectorSimulator;
use qbreak_grid::{Simulator, basis_label, most_likely};

use crate::SessionArgs;

use super::common::{
    load_script, print_counts, print_diagnostics, print_ops, print_probabilities, replay,
    resolve_config,
};

/// Execute the run command.
pub fn execute(
    config_path: Option<&Path>,
    args: &SessionArgs,
    shots: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = resolve_config(config_path, args, shots)?;
    let script = load_script(args)?;
    let session = replay(&config, &script)?;
    let grid = session.editor.grid();
    let wires = grid.wires();
    let ops = grid.compile().context("Grid does not compile")?;

    let simulator = match seed {
        Some(seed) => StatevectorSimulator::with_seed(seed),
        None => StatevectorSimulator::new(),
    };
    let probabilities = simulator
        .probabilities(wires, &ops)
        .context("Simulation failed")?;
    let counts = simulator
        .counts(wires, &ops, config.shots)
        .context("Measurement failed")?;

    if json {
        let counts: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(state, count)| (basis_label(*state, wires), json!(count)))
            .collect();
        let report = json!({
            "wires": wires,
            "columns": grid.columns(),
            "ops": ops,
            "probabilities": probabilities,
            "shots": config.shots,
            "counts": counts,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} Running {}×{} grid on {} ({} shots)",
        style("→").cyan().bold(),
        wires,
        grid.columns(),
        style(simulator.name()).yellow(),
        config.shots
    );
    print_diagnostics(&session.diagnostics);
    println!();
    print!("{grid}");
    print_ops(&ops);
    print_probabilities(&probabilities, wires);
    print_counts(&counts, config.shots, wires);

    if let Some(state) = most_likely(&probabilities) {
        println!(
            "\n  Most likely: {}",
            style(basis_label(state, wires)).yellow()
        );
    }

    Ok(())
}
