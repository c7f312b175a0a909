//! Run with: cargo run --bin p4_singleton

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::creational::singleton;

fn main() {
    println!("{}", "=== Singleton: shared counter ===".bold());
    singleton::demo(&mut Terminal);
}
