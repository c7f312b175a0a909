//! Run with: cargo run --bin p6_bridge

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::structural::bridge;

fn main() {
    println!("{}", "=== Bridge: abstraction over implementation ===".bold());
    bridge::demo(&mut Terminal);
}
