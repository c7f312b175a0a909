//! Abstract Factory: two families of tournament views ("2 teams" and
//! "4 teams"). A factory produces all three views of its own family, so
//! client code can never end up with a create view from one family and an
//! edit view from the other.

use std::str::FromStr;

use thiserror::Error;

use crate::console::Console;

// =============================================================================
// Products
// =============================================================================

pub trait CreateView {
    fn add_teams(&self) -> String;
}

pub trait EditView {
    fn replace_teams(&self) -> String;
}

pub trait ShowView {
    fn overview(&self) -> String;
}

pub struct TwoTeamsCreateView;

impl CreateView for TwoTeamsCreateView {
    fn add_teams(&self) -> String {
        "adding teams to a 2 teams create view".to_string()
    }
}

pub struct FourTeamsCreateView;

impl CreateView for FourTeamsCreateView {
    fn add_teams(&self) -> String {
        "adding teams to a 4 teams create view".to_string()
    }
}

pub struct TwoTeamsEditView;

impl EditView for TwoTeamsEditView {
    fn replace_teams(&self) -> String {
        "replacing teams in a 2 teams edit view".to_string()
    }
}

pub struct FourTeamsEditView;

impl EditView for FourTeamsEditView {
    fn replace_teams(&self) -> String {
        "replacing teams in a 4 teams edit view".to_string()
    }
}

pub struct TwoTeamsShowView;

impl ShowView for TwoTeamsShowView {
    fn overview(&self) -> String {
        "see teams and matches for a 2 teams cup".to_string()
    }
}

pub struct FourTeamsShowView;

impl ShowView for FourTeamsShowView {
    fn overview(&self) -> String {
        "see teams and matches for a 4 teams cup".to_string()
    }
}

// =============================================================================
// Factories
// =============================================================================

/// One factory per family. Each method returns a product of the factory's
/// own family only.
pub trait ViewFactory {
    fn create_view(&self) -> Box<dyn CreateView>;
    fn edit_view(&self) -> Box<dyn EditView>;
    fn show_view(&self) -> Box<dyn ShowView>;
}

pub struct TwoTeamsFactory;

impl ViewFactory for TwoTeamsFactory {
    fn create_view(&self) -> Box<dyn CreateView> {
        Box::new(TwoTeamsCreateView)
    }

    fn edit_view(&self) -> Box<dyn EditView> {
        Box::new(TwoTeamsEditView)
    }

    fn show_view(&self) -> Box<dyn ShowView> {
        Box::new(TwoTeamsShowView)
    }
}

pub struct FourTeamsFactory;

impl ViewFactory for FourTeamsFactory {
    fn create_view(&self) -> Box<dyn CreateView> {
        Box::new(FourTeamsCreateView)
    }

    fn edit_view(&self) -> Box<dyn EditView> {
        Box::new(FourTeamsEditView)
    }

    fn show_view(&self) -> Box<dyn ShowView> {
        Box::new(FourTeamsShowView)
    }
}

// =============================================================================
// Family selection
// =============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FamilyError {
    #[error("unknown view family '{0}', expected '2-teams' or '4-teams'")]
    UnknownFamily(String),
}

/// Tag naming one view family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    TwoTeams,
    FourTeams,
}

impl Family {
    pub fn teams(self) -> usize {
        match self {
            Family::TwoTeams => 2,
            Family::FourTeams => 4,
        }
    }

    /// Selects the concrete factory for this family.
    pub fn factory(self) -> Box<dyn ViewFactory> {
        match self {
            Family::TwoTeams => Box::new(TwoTeamsFactory),
            Family::FourTeams => Box::new(FourTeamsFactory),
        }
    }
}

impl FromStr for Family {
    type Err = FamilyError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "2-teams" => Ok(Family::TwoTeams),
            "4-teams" => Ok(Family::FourTeams),
            other => Err(FamilyError::UnknownFamily(other.to_string())),
        }
    }
}

// =============================================================================
// Demo
// =============================================================================

/// Runs both families through all three views.
pub fn demo(out: &mut dyn Console) {
    for family in [Family::TwoTeams, Family::FourTeams] {
        let factory = family.factory();
        out.line(&factory.create_view().add_teams());
        out.line(&factory.edit_view().replace_teams());
        out.line(&factory.show_view().overview());
    }
}
