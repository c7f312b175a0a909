//! # Classic Design Patterns in Rust
//!
//! Small, independent illustrations of the classic object-oriented design
//! patterns, each reduced to a few types and a short driver that prints the
//! pattern's observable effect:
//!
//! ## Creational
//! - **Abstract Factory**: interchangeable view families that never mix
//! - **Factory Method**: vehicle creators with type-scoped id counters
//! - **Prototype**: delegated field lookup that shares, never copies
//! - **Singleton**: one lazily created counter behind an accessor
//!
//! ## Structural
//! - **Adapter**: translating an incompatible interface
//! - **Bridge**: abstraction and implementation varied independently
//! - **Facade**: one call fanning out to two subsystems in a fixed order
//!
//! Every demo writes through the [`console::Console`] sink, so the drivers
//! print to the terminal while the tests capture and assert the exact lines.
//!
//! Run a demo with: `cargo run --bin p1_abstract_factory` (… `p7_facade`).

pub mod console;
pub mod creational;
pub mod structural;
