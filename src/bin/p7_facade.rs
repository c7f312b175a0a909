//! Run with: cargo run --bin p7_facade

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::structural::facade;

fn main() {
    println!("{}", "=== Facade: subsystem aggregation ===".bold());
    facade::demo(&mut Terminal);
}
