//! The common structures and traits.

use thiserror::Error;

/// The numeric payoff of a finished game, always from the Maximizer's point
/// of view: positive favors the Maximizer, negative favors the Minimizer,
/// and zero is neutral.
pub type Utility = i32;

/// Upper bound on utilities, e.g. a forced win for the Maximizer.
pub const MAX_UTILITY: Utility = i32::MAX;
/// Lower bound on utilities, e.g. a forced win for the Minimizer.
///
/// The bounds negate to each other, which leaves `i32::MIN` as a value
/// outside the valid utility range. Games must keep all utilities within
/// `MIN_UTILITY..=MAX_UTILITY`.
pub const MIN_UTILITY: Utility = -MAX_UTILITY;

/// The player whose turn it is at a given state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Player {
    /// Seeks the highest utility.
    Maximizer,
    /// Seeks the lowest utility.
    Minimizer,
}

impl Player {
    /// The player taking the other side of the board.
    pub fn opponent(self) -> Player {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }
}

/// Ways a search can fail. There are no others: the engines perform no I/O,
/// parsing, or external calls.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SearchError {
    /// A non-terminal state reported zero legal moves, violating the game's
    /// contract. The input is structurally wrong, so retrying cannot help.
    #[error("non-terminal state reported no legal moves")]
    InvalidState,
    /// The recursion guard configured via
    /// [`SearchOptions`](crate::strategies::SearchOptions) was exceeded.
    #[error("search exceeded the configured recursion depth")]
    ResourceExhausted,
}

/// The outcome of a completed search: the exact game-theoretic value of the
/// searched state under optimal play by both sides, and a move achieving it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchResult<M> {
    /// The minimax value of the searched state.
    pub value: Utility,
    /// A best move from the searched state. `None` exactly when the state
    /// was already terminal. Ties between equally good moves are broken in
    /// favor of the move generated first.
    pub best_move: Option<M>,
}

/// Defines the rules for a two-player, zero-sum, perfect-information game.
///
/// A game ties together types for the state and moves, generates the legal
/// moves of a state, determines whether a state is terminal, and applies
/// moves to produce successor states. States are treated as immutable
/// snapshots: `apply` builds a new state and leaves its input untouched.
pub trait Game: Sized {
    /// The type of the game state.
    type S;
    /// The type of game moves.
    type M: Copy;

    /// Which player takes the next turn. Only meaningful for non-terminal
    /// states.
    fn player_to_move(s: &Self::S) -> Player;

    /// Append the legal moves of `s` to `moves`.
    ///
    /// The order is significant: the engines scan moves in this order and
    /// resolve ties in favor of earlier entries, which makes their results
    /// deterministic. Non-terminal states must generate at least one move.
    fn generate_moves(s: &Self::S, moves: &mut Vec<Self::M>);

    /// Returns `Some(utility)` if the state is terminal, `None` otherwise.
    fn get_utility(s: &Self::S) -> Option<Utility>;

    /// Produce the successor state reached by playing `m` in `s`.
    fn apply(s: &Self::S, m: Self::M) -> Self::S;
}

/// Defines a method of choosing a move for the player whose turn it is.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M>;
}
