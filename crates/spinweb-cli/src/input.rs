//! Input file parsing: the UI-collaborator surface of the CLI.
//!
//! The input is a TOML file carrying the diagram title and one level
//! selection per parameter:
//!
//! ```toml
//! title = "Mijn Spiderweb"
//!
//! [niveaus]
//! "governance" = "basis"
//! "cultuur" = "gevorderd"
//! ```
//!
//! A missing `title` key falls back to the default; an explicitly empty
//! title is kept empty.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use spinweb::{
    SpinwebError,
    level::Level,
    session::{DEFAULT_TITLE, LevelSelection},
    taxonomy::Taxonomy,
};

/// Raw input file structure.
#[derive(Debug, Deserialize)]
struct InputFile {
    title: Option<String>,
    #[serde(default)]
    niveaus: IndexMap<String, String>,
}

/// Parsed input: the title plus the validated level selection.
#[derive(Debug)]
pub struct Input {
    title: String,
    selection: LevelSelection,
}

impl Input {
    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the level selection.
    pub fn selection(&self) -> &LevelSelection {
        &self.selection
    }
}

/// Parse and validate input TOML against the taxonomy.
///
/// # Errors
///
/// Returns:
/// - [`SpinwebError::Input`] if the TOML cannot be parsed
/// - [`SpinwebError::UnknownParameter`] for a selection outside the taxonomy
/// - [`SpinwebError::UnknownLevel`] for an unrecognized level string
pub fn parse_input(content: &str, taxonomy: &Taxonomy) -> Result<Input, SpinwebError> {
    let file: InputFile =
        toml::from_str(content).map_err(|err| SpinwebError::Input(err.to_string()))?;

    let mut selection = LevelSelection::new();
    for (parameter, level_str) in &file.niveaus {
        if !taxonomy.contains(parameter) {
            return Err(SpinwebError::UnknownParameter(parameter.clone()));
        }
        let level = Level::from_str(level_str)
            .map_err(|_| SpinwebError::UnknownLevel(level_str.clone()))?;
        selection.set(parameter.clone(), level);
    }

    Ok(Input {
        title: file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        selection,
    })
}
