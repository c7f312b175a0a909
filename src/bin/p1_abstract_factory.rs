//! Run with: cargo run --bin p1_abstract_factory

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::creational::abstract_factory;

fn main() {
    println!("{}", "=== Abstract Factory: view families ===".bold());
    abstract_factory::demo(&mut Terminal);
}
