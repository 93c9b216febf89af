//! Utility functions for driving games.

use super::interface;
use super::interface::{Game, Player, Utility};

/// Play a complete game from `initial`, with `maximizer` moving for the
/// Maximizer and `minimizer` for the Minimizer.
///
/// Returns the terminal utility of the final position, or `None` if either
/// strategy failed to produce a move for a non-terminal state.
pub fn play_game<G, S1, S2>(initial: G::S, maximizer: &mut S1, minimizer: &mut S2) -> Option<Utility>
where
    G: Game,
    S1: interface::Strategy<G>,
    S2: interface::Strategy<G>,
{
    let mut state = initial;
    while G::get_utility(&state).is_none() {
        let m = match G::player_to_move(&state) {
            Player::Maximizer => maximizer.choose_move(&state),
            Player::Minimizer => minimizer.choose_move(&state),
        }?;
        state = G::apply(&state, m);
    }
    G::get_utility(&state)
}
