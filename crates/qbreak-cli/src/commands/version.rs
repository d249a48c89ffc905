//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit grid editor",
        style("qbreak").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qbreak-grid         Grid model and compiler");
    println!("  qbreak-editor       Cursor-driven edit commands");
    println!("  qbreak-adapter-sim  Local statevector simulator");
    println!("  qbreak-cli          Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
