//! Run with: cargo run --bin p5_adapter

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::structural::adapter;

fn main() {
    println!("{}", "=== Adapter: interface translation ===".bold());
    adapter::demo(&mut Terminal);
}
