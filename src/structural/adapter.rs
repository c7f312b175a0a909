//! Adapter: the client speaks [`Target`]; the adaptee answers backwards.
//! The adapter owns the adaptee and translates on the way through.

use crate::console::Console;

pub trait Target {
    fn request(&self) -> String;
}

/// A target the client already understands.
#[derive(Debug, Default)]
pub struct DefaultTarget;

impl Target for DefaultTarget {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// Useful behavior behind an interface the client cannot read.
#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

/// Makes the adaptee usable wherever a [`Target`] is expected.
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {translated}")
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo(out: &mut dyn Console) {
    out.line("Client: I can work just fine with the Target objects:");
    let target = DefaultTarget;
    out.line(&target.request());
    out.line("");

    out.line("Client: The Adaptee has a weird interface. See, I don't understand it:");
    let adaptee = Adaptee;
    out.line(&format!("Adaptee: {}", adaptee.specific_request()));
    out.line("");

    out.line("Client: But I can work with it via the Adapter:");
    let adapter = Adapter::new(adaptee);
    out.line(&adapter.request());
}
