//! Facade: one object owning two subsystems and exposing their combined
//! behavior as a single call with a fixed phase order.

use crate::console::Console;

#[derive(Debug, Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn common_feature(&self) -> String {
        "Subsystem1: Ready!".to_string()
    }

    pub fn feature_n(&self) -> String {
        "Subsystem1: Go!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn common_feature(&self) -> String {
        "Subsystem2: Get ready!".to_string()
    }

    pub fn feature_z(&self) -> String {
        "Subsystem2: Fire!".to_string()
    }
}

/// Owns both subsystems and shields the client from their surface.
#[derive(Debug, Default)]
pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(subsystem1: Subsystem1, subsystem2: Subsystem2) -> Self {
        Self {
            subsystem1,
            subsystem2,
        }
    }

    /// The aggregate shortcut: init, ready and action phases, each phase
    /// calling the subsystems in the same fixed order.
    pub fn operation(&self) -> String {
        [
            "Facade initializes subsystems:".to_string(),
            self.subsystem1.common_feature(),
            self.subsystem2.common_feature(),
            "Facade orders subsystems to get ready:".to_string(),
            self.subsystem1.common_feature(),
            self.subsystem2.common_feature(),
            "Facade orders subsystems to perform the action:".to_string(),
            self.subsystem1.feature_n(),
            self.subsystem2.feature_z(),
        ]
        .join("\n")
    }

    pub fn feature_n(&self) -> String {
        self.subsystem1.feature_n()
    }

    pub fn feature_z(&self) -> String {
        self.subsystem2.feature_z()
    }
}

// =============================================================================
// Demo
// =============================================================================

/// The individual passthroughs, then the full aggregate transcript.
pub fn demo(out: &mut dyn Console) {
    let facade = Facade::new();
    out.line(&facade.feature_n());
    out.line(&facade.feature_z());
    out.line("");
    for line in facade.operation().lines() {
        out.line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Capture;

    #[test]
    fn test_passthrough_features() {
        let facade = Facade::new();
        assert_eq!(facade.feature_n(), "Subsystem1: Go!");
        assert_eq!(facade.feature_z(), "Subsystem2: Fire!");
    }

    #[test]
    fn test_operation_order_is_fixed() {
        let facade = Facade::with_parts(Subsystem1, Subsystem2);
        assert_eq!(
            facade.operation(),
            "Facade initializes subsystems:\n\
             Subsystem1: Ready!\n\
             Subsystem2: Get ready!\n\
             Facade orders subsystems to get ready:\n\
             Subsystem1: Ready!\n\
             Subsystem2: Get ready!\n\
             Facade orders subsystems to perform the action:\n\
             Subsystem1: Go!\n\
             Subsystem2: Fire!"
        );
    }

    #[test]
    fn test_demo_output() {
        let mut capture = Capture::new();
        demo(&mut capture);

        let lines = capture.lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Subsystem1: Go!");
        assert_eq!(lines[1], "Subsystem2: Fire!");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Facade initializes subsystems:");
        assert_eq!(lines[11], "Subsystem2: Fire!");
    }
}
