//! Exact adversarial search for two-player zero-sum games with perfect
//! information: plain minimax and minimax with alpha-beta pruning.

pub mod interface;
pub mod strategies;
pub mod util;

pub use crate::interface::{
    Game, Player, SearchError, SearchResult, Strategy, Utility, MAX_UTILITY, MIN_UTILITY,
};
pub use crate::strategies::alpha_beta::{alpha_beta, AlphaBeta};
pub use crate::strategies::minimax::{minimax, Minimax};
pub use crate::strategies::random::Random;
pub use crate::strategies::SearchOptions;
