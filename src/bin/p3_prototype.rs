//! Run with: cargo run --bin p3_prototype

use colored::Colorize;

use design_patterns::console::Terminal;
use design_patterns::creational::prototype;

fn main() {
    println!("{}", "=== Prototype: delegated lookup ===".bold());
    prototype::demo(&mut Terminal);
}
