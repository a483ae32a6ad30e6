//! The ordinal maturity scale.
//!
//! A [`Level`] is one of four ordered maturity stages. Levels carry an
//! integer rank (1 through 4) which doubles as the radial coordinate of
//! the corresponding polygon vertex. The names match external
//! configuration strings (snake_case).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// One of the four ordered maturity stages.
///
/// Levels form a total order (`Start < Basis < Gevorderd < Expert`).
/// There is no arithmetic on levels beyond comparison and use of the
/// rank as a radius.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// First stage (rank 1, default)
    #[default]
    Start,
    /// Second stage (rank 2)
    Basis,
    /// Third stage (rank 3)
    Gevorderd,
    /// Fourth stage (rank 4)
    Expert,
}

/// All levels in ascending rank order.
pub const ALL_LEVELS: [Level; 4] = [Level::Start, Level::Basis, Level::Gevorderd, Level::Expert];

impl Level {
    /// Returns the integer rank of this level (1 through 4).
    pub fn rank(self) -> u8 {
        match self {
            Self::Start => 1,
            Self::Basis => 2,
            Self::Gevorderd => 3,
            Self::Expert => 4,
        }
    }

    /// Returns the rank as a radial coordinate.
    pub fn radius(self) -> f32 {
        f32::from(self.rank())
    }

    /// Returns the level for the given rank, if it is in range.
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Start),
            2 => Some(Self::Basis),
            3 => Some(Self::Gevorderd),
            4 => Some(Self::Expert),
            _ => None,
        }
    }

    /// Returns the display label used on the radial axis.
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Basis => "Basis",
            Self::Gevorderd => "Gevorderd",
            Self::Expert => "Expert",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "basis" => Ok(Self::Basis),
            "gevorderd" => Ok(Self::Gevorderd),
            "expert" => Ok(Self::Expert),
            _ => Err(format!(
                "unknown level `{s}`, valid values: start, basis, gevorderd, expert"
            )),
        }
    }
}

impl From<Level> for &'static str {
    fn from(val: Level) -> Self {
        match val {
            Level::Start => "start",
            Level::Basis => "basis",
            Level::Gevorderd => "gevorderd",
            Level::Expert => "expert",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_one_through_four() {
        assert_eq!(Level::Start.rank(), 1);
        assert_eq!(Level::Basis.rank(), 2);
        assert_eq!(Level::Gevorderd.rank(), 3);
        assert_eq!(Level::Expert.rank(), 4);
    }

    #[test]
    fn test_rank_roundtrip() {
        for level in ALL_LEVELS {
            assert_eq!(Level::from_rank(level.rank()), Some(level));
        }
        assert_eq!(Level::from_rank(0), None);
        assert_eq!(Level::from_rank(5), None);
    }

    #[test]
    fn test_total_order() {
        assert!(Level::Start < Level::Basis);
        assert!(Level::Basis < Level::Gevorderd);
        assert!(Level::Gevorderd < Level::Expert);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Level::from_str("start").unwrap(), Level::Start);
        assert_eq!(Level::from_str("basis").unwrap(), Level::Basis);
        assert_eq!(Level::from_str("gevorderd").unwrap(), Level::Gevorderd);
        assert_eq!(Level::from_str("expert").unwrap(), Level::Expert);

        let result = Level::from_str("beginner");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unknown level"));
    }

    #[test]
    fn test_display_matches_config_strings() {
        assert_eq!(Level::Start.to_string(), "start");
        assert_eq!(Level::Expert.to_string(), "expert");
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(Level::Start.label(), "Start");
        assert_eq!(Level::Gevorderd.label(), "Gevorderd");
    }

    #[test]
    fn test_radius_matches_rank() {
        for level in ALL_LEVELS {
            assert_eq!(level.radius(), f32::from(level.rank()));
        }
    }
}
