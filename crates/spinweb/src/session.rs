//! Per-user session state.
//!
//! A [`Session`] owns one user's title and level selections and drives
//! diagram regeneration according to the configured [`TriggerMode`].
//! Sessions never share state: concurrent users each hold their own
//! `Session` value.

use indexmap::IndexMap;
use log::debug;

use spinweb_core::{level::Level, taxonomy::Taxonomy};

use crate::{
    chart::{self, DiagramSpec},
    config::{AppConfig, TriggerMode},
    error::SpinwebError,
    layout::{AngularEngine, EngineBuilder, build_polygon},
};

/// Default diagram title used until the user supplies one.
pub const DEFAULT_TITLE: &str = "Mijn Spiderweb";

/// The user's level selections, keyed by parameter name.
///
/// Selections overwrite silently: choosing a new level for a parameter
/// replaces the previous choice. A parameter without a selection has no
/// level until the user picks one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSelection {
    levels: IndexMap<String, Level>,
}

impl LevelSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level for a parameter, overwriting any prior value.
    pub fn set(&mut self, parameter: impl Into<String>, level: Level) {
        self.levels.insert(parameter.into(), level);
    }

    /// Returns the selected level for a parameter, if any.
    pub fn level_of(&self, parameter: &str) -> Option<Level> {
        self.levels.get(parameter).copied()
    }

    /// Returns the number of selected parameters.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if nothing has been selected yet.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates over `(parameter, level)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> {
        self.levels.iter().map(|(name, level)| (name.as_str(), *level))
    }
}

/// One user's diagram-editing session.
///
/// The angular assignment is derived once at construction (taxonomy and
/// policy are fixed for the session's lifetime); the diagram spec is
/// recomputed per render request.
pub struct Session {
    taxonomy: Taxonomy,
    config: AppConfig,
    engine: Box<dyn AngularEngine>,
    title: String,
    selection: LevelSelection,
    current: Option<DiagramSpec>,
}

impl Session {
    /// Creates a session over the given taxonomy and configuration.
    ///
    /// The angular engine is built here, so an invalid clustered arc
    /// table fails fast at session start rather than at render time.
    ///
    /// # Errors
    ///
    /// Returns [`SpinwebError::InvalidPolicyConfig`] for an invalid arc
    /// table.
    pub fn new(taxonomy: Taxonomy, config: AppConfig) -> Result<Self, SpinwebError> {
        let engine = EngineBuilder::from_config(config.layout()).build(&taxonomy)?;

        Ok(Self {
            taxonomy,
            config,
            engine,
            title: DEFAULT_TITLE.to_string(),
            selection: LevelSelection::new(),
            current: None,
        })
    }

    /// Returns the current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &LevelSelection {
        &self.selection
    }

    /// Returns the most recently composed diagram spec, if any.
    pub fn current(&self) -> Option<&DiagramSpec> {
        self.current.as_ref()
    }

    /// Sets the diagram title.
    ///
    /// The title is stored as-is: an empty string is a valid title and
    /// is never replaced by the default. In live mode the diagram is
    /// recomposed immediately.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), SpinwebError> {
        self.title = title.into();
        self.maybe_recompose()
    }

    /// Selects a level for a parameter, overwriting any prior value.
    ///
    /// In live mode the diagram is recomposed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SpinwebError::UnknownParameter`] if the parameter is
    /// not declared in the taxonomy.
    pub fn set_level(&mut self, parameter: &str, level: Level) -> Result<(), SpinwebError> {
        if !self.taxonomy.contains(parameter) {
            return Err(SpinwebError::UnknownParameter(parameter.to_string()));
        }

        self.selection.set(parameter, level);
        debug!(parameter, level:% = level; "Level selected");
        self.maybe_recompose()
    }

    /// Composes the diagram spec from the current state.
    ///
    /// This is the explicit generate action of gated mode; it also works
    /// in live mode, where it simply recomposes from current state.
    ///
    /// # Errors
    ///
    /// Returns [`SpinwebError::IncompleteInput`] when levels are missing
    /// and the effective missing-level policy blocks.
    pub fn generate(&mut self) -> Result<&DiagramSpec, SpinwebError> {
        let spec = self.compose()?;
        Ok(self.current.insert(spec))
    }

    fn compose(&self) -> Result<DiagramSpec, SpinwebError> {
        let assignment = self.engine.assign(&self.taxonomy);
        let polygon = build_polygon(
            &assignment,
            &self.selection,
            self.config.session().missing_level(),
        )?;
        chart::compose(&self.title, polygon, &assignment, self.config.style())
    }

    fn maybe_recompose(&mut self) -> Result<(), SpinwebError> {
        if self.config.session().trigger() == TriggerMode::Live {
            let spec = self.compose()?;
            self.current = Some(spec);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{LayoutConfig, SessionConfig, StyleConfig};

    use super::*;

    fn live_config() -> AppConfig {
        AppConfig::new(
            LayoutConfig::default(),
            StyleConfig::default(),
            SessionConfig::new(TriggerMode::Live, None),
        )
    }

    #[test]
    fn test_selection_overwrites() {
        let mut selection = LevelSelection::new();
        selection.set("governance", Level::Start);
        selection.set("governance", Level::Expert);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.level_of("governance"), Some(Level::Expert));
    }

    #[test]
    fn test_gated_session_requires_generate() {
        let mut session = Session::new(Taxonomy::default(), AppConfig::default()).unwrap();
        session.set_level("governance", Level::Basis).unwrap();

        // No spec until the explicit generate action fires.
        assert!(session.current().is_none());
    }

    #[test]
    fn test_gated_generate_blocks_on_missing_levels() {
        let mut session = Session::new(Taxonomy::default(), AppConfig::default()).unwrap();
        session.set_level("governance", Level::Basis).unwrap();

        let result = session.generate();
        match result {
            Err(SpinwebError::IncompleteInput { missing }) => {
                assert_eq!(missing.len(), 11);
                assert!(!missing.contains(&"governance".to_string()));
            }
            other => panic!("expected IncompleteInput, got {other:?}"),
        }
    }

    #[test]
    fn test_gated_generate_succeeds_when_complete() {
        let taxonomy = Taxonomy::default();
        let mut session = Session::new(taxonomy.clone(), AppConfig::default()).unwrap();
        let names: Vec<String> = taxonomy.parameters().map(|(_, p)| p.to_string()).collect();
        for name in &names {
            session.set_level(name, Level::Gevorderd).unwrap();
        }

        let spec = session.generate().unwrap();
        assert_eq!(spec.series().polygon().len(), names.len() + 1);
    }

    #[test]
    fn test_live_session_recomposes_on_every_change() {
        let mut session = Session::new(Taxonomy::default(), live_config()).unwrap();
        session.set_level("governance", Level::Expert).unwrap();

        let spec = session.current().expect("live mode composes immediately");
        // Unselected parameters fall back to the lowest level in live mode.
        assert_eq!(spec.series().polygon().len(), 13);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let mut session = Session::new(Taxonomy::default(), AppConfig::default()).unwrap();
        let result = session.set_level("does not exist", Level::Start);
        assert!(matches!(result, Err(SpinwebError::UnknownParameter(_))));
    }

    #[test]
    fn test_default_title_and_empty_title() {
        let mut session = Session::new(Taxonomy::default(), live_config()).unwrap();
        assert_eq!(session.title(), DEFAULT_TITLE);

        session.set_title("").unwrap();
        assert_eq!(session.title(), "");
        let spec = session.current().expect("live mode composes on title change");
        assert_eq!(spec.title(), "");
    }
}
