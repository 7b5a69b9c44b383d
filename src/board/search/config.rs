use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::StrategyError;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 2;

/// Move-selection strategies, numbered as the host addresses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    Random,
    Greedy,
    MinimaxIterative,
    Minimax,
    Negamax,
    NegamaxAlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::MinimaxIterative,
        Strategy::Minimax,
        Strategy::Negamax,
        Strategy::NegamaxAlphaBeta,
    ];

    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Strategy::Random => 0,
            Strategy::Greedy => 1,
            Strategy::MinimaxIterative => 2,
            Strategy::Minimax => 3,
            Strategy::Negamax => 4,
            Strategy::NegamaxAlphaBeta => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::MinimaxIterative => "minimax-iterative",
            Strategy::Minimax => "minimax",
            Strategy::Negamax => "negamax",
            Strategy::NegamaxAlphaBeta => "alphabeta",
        }
    }

    /// Whether the configured depth affects this strategy.
    ///
    /// Random and greedy look one ply at most; the iterative minimax is
    /// always two plies.
    #[must_use]
    pub const fn uses_depth(self) -> bool {
        matches!(
            self,
            Strategy::Minimax | Strategy::Negamax | Strategy::NegamaxAlphaBeta
        )
    }
}

impl TryFrom<u8> for Strategy {
    type Error = StrategyError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or(StrategyError::UnknownId { id })
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Ok(id) = lower.parse::<u8>() {
            return Strategy::try_from(id);
        }
        match lower.as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "minimax-iterative" | "iterative" => Ok(Strategy::MinimaxIterative),
            "minimax" | "minimax-recursive" => Ok(Strategy::Minimax),
            "negamax" => Ok(Strategy::Negamax),
            "alphabeta" | "negamax-alphabeta" => Ok(Strategy::NegamaxAlphaBeta),
            _ => Err(StrategyError::UnknownName {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one move decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Plies searched by the recursive strategies
    pub depth: u32,
    /// Seed for tie-break shuffling (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::NegamaxAlphaBeta,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Default config for one strategy
    #[must_use]
    pub fn strategy(strategy: Strategy) -> Self {
        SearchConfig {
            strategy,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
