//! Bridge: the thing being shown and the way of showing it vary
//! independently. Two small hierarchies illustrate the split: tinted solids
//! and team-count cup views. Both sides meet through a capability trait held
//! by composition, never through inheritance.

use crate::console::Console;

// =============================================================================
// Solids, tinted
// =============================================================================

pub trait Solid {
    fn build(&self) -> String;
}

pub struct Ball;

impl Solid for Ball {
    fn build(&self) -> String {
        "Ball".to_string()
    }
}

pub struct Cube;

impl Solid for Cube {
    fn build(&self) -> String {
        "Cube".to_string()
    }
}

pub struct Pyramid;

impl Solid for Pyramid {
    fn build(&self) -> String {
        "Pyramid".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tint {
    #[default]
    Blue,
    Red,
    Green,
}

impl Tint {
    fn label(self) -> &'static str {
        match self {
            Tint::Blue => "Blue (default)",
            Tint::Red => "Red",
            Tint::Green => "Green",
        }
    }
}

/// Abstraction side of the solids split: a tint applied to any solid.
pub struct Tinted {
    tint: Tint,
    solid: Box<dyn Solid>,
}

impl Tinted {
    pub fn new(solid: Box<dyn Solid>) -> Self {
        Self {
            tint: Tint::default(),
            solid,
        }
    }

    pub fn with_tint(tint: Tint, solid: Box<dyn Solid>) -> Self {
        Self { tint, solid }
    }

    pub fn show(&self) -> String {
        format!("{} Colorized {}", self.tint.label(), self.solid.build())
    }
}

// =============================================================================
// Cup views, customized by team count
// =============================================================================

pub trait View {
    fn render(&self) -> String;
}

pub struct CreateView;

impl View for CreateView {
    fn render(&self) -> String {
        "Creation View".to_string()
    }
}

pub struct EditView;

impl View for EditView {
    fn render(&self) -> String {
        "Edit View".to_string()
    }
}

pub struct ShowView;

impl View for ShowView {
    fn render(&self) -> String {
        "Show View".to_string()
    }
}

/// Abstraction side of the views split: any view presented for a cup of a
/// given team count.
pub struct CupPresenter {
    teams: usize,
    view: Box<dyn View>,
}

impl CupPresenter {
    pub fn new(teams: usize, view: Box<dyn View>) -> Self {
        Self { teams, view }
    }

    pub fn present(&self) -> String {
        format!("{} Teams Cup {}", self.teams, self.view.render())
    }
}

// =============================================================================
// Demo
// =============================================================================

/// Raw views, the 4-team customizations, then one solid in each tint.
pub fn demo(out: &mut dyn Console) {
    out.line(&CreateView.render());
    out.line(&EditView.render());

    out.line(&CupPresenter::new(4, Box::new(CreateView)).present());
    out.line(&CupPresenter::new(4, Box::new(EditView)).present());

    out.line(&Tinted::new(Box::new(Ball)).show());
    out.line(&Tinted::with_tint(Tint::Red, Box::new(Cube)).show());
    out.line(&Tinted::with_tint(Tint::Green, Box::new(Pyramid)).show());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Capture;

    #[test]
    fn test_default_tint_is_blue() {
        let tinted = Tinted::new(Box::new(Ball));
        assert_eq!(tinted.show(), "Blue (default) Colorized Ball");
    }

    #[test]
    fn test_tints_and_solids_combine_freely() {
        assert_eq!(
            Tinted::with_tint(Tint::Red, Box::new(Cube)).show(),
            "Red Colorized Cube"
        );
        assert_eq!(
            Tinted::with_tint(Tint::Green, Box::new(Pyramid)).show(),
            "Green Colorized Pyramid"
        );
        assert_eq!(
            Tinted::with_tint(Tint::Red, Box::new(Ball)).show(),
            "Red Colorized Ball"
        );
    }

    #[test]
    fn test_cup_presenter_customizes_any_view() {
        assert_eq!(
            CupPresenter::new(4, Box::new(CreateView)).present(),
            "4 Teams Cup Creation View"
        );
        assert_eq!(
            CupPresenter::new(4, Box::new(EditView)).present(),
            "4 Teams Cup Edit View"
        );
        assert_eq!(
            CupPresenter::new(2, Box::new(ShowView)).present(),
            "2 Teams Cup Show View"
        );
    }

    #[test]
    fn test_demo_output() {
        let mut capture = Capture::new();
        demo(&mut capture);

        assert_eq!(
            capture.lines(),
            [
                "Creation View",
                "Edit View",
                "4 Teams Cup Creation View",
                "4 Teams Cup Edit View",
                "Blue (default) Colorized Ball",
                "Red Colorized Cube",
                "Green Colorized Pyramid",
            ]
        );
    }
}
