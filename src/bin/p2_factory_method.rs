//! Run with: cargo run --bin p2_factory_method

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::creational::factory_method;

fn main() {
    println!("{}", "=== Factory Method: vehicle creators ===".bold());
    factory_method::demo(&mut Terminal);
}
