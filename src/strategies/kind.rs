//! # Built-in strategy selection.
//!
//! [`StrategyKind`] names the strategies shipped with the crate so a caller can
//! pick one from configuration or a command-line argument.
//!
//! # Example
//! ```rust
//! use sortvisor::StrategyKind;
//!
//! let kind: StrategyKind = "quick".parse().unwrap();
//! assert_eq!(kind.strategy().name(), "quick");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::strategies::{BubbleSort, QuickSort, StrategyRef};

/// Built-in sort strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// [`BubbleSort`].
    #[default]
    Bubble,
    /// [`QuickSort`].
    Quick,
}

impl StrategyKind {
    /// Every built-in strategy, in display order.
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Bubble, StrategyKind::Quick];

    /// Returns the stable name, matching [`SortStrategy::name`](crate::SortStrategy::name).
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Bubble => "bubble",
            StrategyKind::Quick => "quick",
        }
    }

    /// Returns a shared instance of the strategy.
    pub fn strategy(&self) -> StrategyRef {
        match self {
            StrategyKind::Bubble => Arc::new(BubbleSort),
            StrategyKind::Quick => Arc::new(QuickSort),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected one of: bubble, quick)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" | "bubblesort" => Ok(StrategyKind::Bubble),
            "quick" | "quick-sort" | "quicksort" => Ok(StrategyKind::Quick),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("bubble".parse::<StrategyKind>(), Ok(StrategyKind::Bubble));
        assert_eq!(" QuickSort ".parse::<StrategyKind>(), Ok(StrategyKind::Quick));
        assert_eq!(
            "merge".parse::<StrategyKind>(),
            Err(UnknownStrategy("merge".to_string()))
        );
    }

    #[test]
    fn test_names_match_strategies() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.strategy().name(), kind.as_str());
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
