//! Creational patterns: ways of constructing objects without naming
//! concrete types at the call site.

pub mod abstract_factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
