//! The fixed catalog of quadrants and assessment parameters.
//!
//! A [`Taxonomy`] lists the four thematic quadrants in display order,
//! each with its parameters in display order. Declaration order matters:
//! it determines the angular assignment of every parameter. The taxonomy
//! is constructed once at startup and never mutated afterwards.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// One of the four fixed thematic quadrants.
///
/// The first two quadrants describe the inner world of the organisation,
/// the last two the outer world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Mensen,
    Organisatie,
    Partners,
    Jongeren,
}

/// All quadrants in declaration order.
pub const ALL_QUADRANTS: [Quadrant; 4] = [
    Quadrant::Mensen,
    Quadrant::Organisatie,
    Quadrant::Partners,
    Quadrant::Jongeren,
];

impl Quadrant {
    /// Returns the display label of this quadrant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mensen => "Mensen",
            Self::Organisatie => "Organisatie",
            Self::Partners => "Partners",
            Self::Jongeren => "Jongeren",
        }
    }
}

impl FromStr for Quadrant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mensen" => Ok(Self::Mensen),
            "organisatie" => Ok(Self::Organisatie),
            "partners" => Ok(Self::Partners),
            "jongeren" => Ok(Self::Jongeren),
            _ => Err(format!(
                "unknown quadrant `{s}`, valid values: mensen, organisatie, partners, jongeren"
            )),
        }
    }
}

impl From<Quadrant> for &'static str {
    fn from(val: Quadrant) -> Self {
        match val {
            Quadrant::Mensen => "mensen",
            Quadrant::Organisatie => "organisatie",
            Quadrant::Partners => "partners",
            Quadrant::Jongeren => "jongeren",
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// An ordered group of parameters belonging to one quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuadrantGroup {
    quadrant: Quadrant,
    parameters: Vec<String>,
}

impl QuadrantGroup {
    /// Creates a new group with the given parameters in display order.
    pub fn new(quadrant: Quadrant, parameters: Vec<String>) -> Self {
        Self {
            quadrant,
            parameters,
        }
    }

    /// Returns the quadrant this group belongs to.
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the parameter names in display order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

/// The ordered catalog of quadrants and their parameters.
///
/// Iteration over [`Taxonomy::parameters`] yields every parameter in
/// flattened declaration order (quadrant by quadrant), which is the
/// canonical iteration order for angular assignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Taxonomy {
    quadrants: Vec<QuadrantGroup>,
}

impl Taxonomy {
    /// Creates a taxonomy from explicit groups.
    ///
    /// Intended for tests and data-driven configuration; most callers
    /// want [`Taxonomy::default`].
    pub fn new(quadrants: Vec<QuadrantGroup>) -> Self {
        Self { quadrants }
    }

    /// Returns the quadrant groups in display order.
    pub fn quadrants(&self) -> &[QuadrantGroup] {
        &self.quadrants
    }

    /// Returns the group for the given quadrant, if present.
    pub fn group(&self, quadrant: Quadrant) -> Option<&QuadrantGroup> {
        self.quadrants.iter().find(|g| g.quadrant() == quadrant)
    }

    /// Returns the total number of parameters across all quadrants.
    pub fn parameter_count(&self) -> usize {
        self.quadrants.iter().map(|g| g.parameters().len()).sum()
    }

    /// Iterates over `(quadrant, parameter name)` pairs in flattened
    /// declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = (Quadrant, &str)> {
        self.quadrants.iter().flat_map(|g| {
            g.parameters()
                .iter()
                .map(move |p| (g.quadrant(), p.as_str()))
        })
    }

    /// Returns true if a parameter with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.parameters().any(|(_, p)| p == name)
    }
}

impl Default for Taxonomy {
    /// The fixed domain catalog: four quadrants, three parameters each.
    fn default() -> Self {
        let group = |quadrant, names: &[&str]| {
            QuadrantGroup::new(quadrant, names.iter().map(|s| (*s).to_string()).collect())
        };

        Self::new(vec![
            group(
                Quadrant::Mensen,
                &[
                    "kennis jongerenparticipatie",
                    "participatief proces",
                    "samenwerken jongeren",
                ],
            ),
            group(
                Quadrant::Organisatie,
                &["governance", "cultuur", "werkprocessen"],
            ),
            group(
                Quadrant::Partners,
                &["netwerk", "afspraken & randvoorwaarden", "kwaliteit werk"],
            ),
            group(
                Quadrant::Jongeren,
                &["verbinding", "diverse manieren", "in staat stellen"],
            ),
        ])
    }
}
