//! An implementation of minimax with alpha-beta pruning.
//!
//! Returns the same value and move as the exhaustive engine for every input,
//! but skips subtrees that provably cannot affect the result. The `[alpha,
//! beta]` window carries the best value each side can already guarantee
//! elsewhere in the tree: once a node's value proves at least as good for
//! its player as what the opponent can force above it, the remaining
//! siblings are irrelevant and the scan stops.

use super::super::interface::*;
use super::util::MovePool;
use super::SearchOptions;

use log::{debug, warn};
use std::cmp::{max, min};
use std::marker::PhantomData;

/// Search the game tree under `s` with alpha-beta pruning and return its
/// exact value together with a best move.
pub fn alpha_beta<G: Game>(s: &G::S) -> Result<SearchResult<G::M>, SearchError> {
    AlphaBeta::<G>::new().search(s)
}

/// The alpha-beta pruning engine.
pub struct AlphaBeta<G: Game> {
    opts: SearchOptions,
    move_pool: MovePool<G::M>,
    nodes_visited: u64,
    _game: PhantomData<G>,
}

impl<G: Game> AlphaBeta<G> {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::new())
    }

    pub fn with_options(opts: SearchOptions) -> Self {
        AlphaBeta {
            opts,
            move_pool: MovePool::default(),
            nodes_visited: 0,
            _game: PhantomData,
        }
    }

    /// Number of states visited by the last call to [`search`](Self::search),
    /// counting the root. Never more than the exhaustive engine visits on
    /// the same state.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Return a human-readable summary of the last search.
    pub fn stats(&self) -> String {
        format!("Explored {} nodes with alpha-beta pruning.", self.nodes_visited)
    }

    /// Compute the exact value of `s` and a move achieving it, starting from
    /// the full `[MIN_UTILITY, MAX_UTILITY]` window.
    pub fn search(&mut self, s: &G::S) -> Result<SearchResult<G::M>, SearchError> {
        self.nodes_visited = 0;
        let result = self.alpha_beta(s, 0, MIN_UTILITY, MAX_UTILITY)?;
        debug!("alpha-beta explored {} nodes", self.nodes_visited);
        Ok(result)
    }

    fn alpha_beta(
        &mut self, s: &G::S, depth: usize, mut alpha: Utility, mut beta: Utility,
    ) -> Result<SearchResult<G::M>, SearchError> {
        self.nodes_visited += 1;
        if let Some(value) = G::get_utility(s) {
            return Ok(SearchResult { value, best_move: None });
        }
        if self.opts.exceeded(depth) {
            return Err(SearchError::ResourceExhausted);
        }

        let mut moves = self.move_pool.alloc();
        G::generate_moves(s, &mut moves);
        let player = G::player_to_move(s);

        let mut best: Option<(Utility, G::M)> = None;
        for &m in moves.iter() {
            let child = self.alpha_beta(&G::apply(s, m), depth + 1, alpha, beta)?;
            match player {
                Player::Maximizer => {
                    if best.map_or(true, |(value, _)| child.value > value) {
                        best = Some((child.value, m));
                    }
                    let (value, _) = best.unwrap();
                    alpha = max(alpha, value);
                    if value >= beta {
                        // The Minimizer ancestor already has a line at least
                        // this good for it; the remaining siblings cannot
                        // matter.
                        break;
                    }
                }
                Player::Minimizer => {
                    if best.map_or(true, |(value, _)| child.value < value) {
                        best = Some((child.value, m));
                    }
                    let (value, _) = best.unwrap();
                    beta = min(beta, value);
                    if value <= alpha {
                        break;
                    }
                }
            }
        }
        self.move_pool.free(moves);

        match best {
            Some((value, m)) => Ok(SearchResult { value, best_move: Some(m) }),
            None => Err(SearchError::InvalidState),
        }
    }
}

impl<G: Game> Default for AlphaBeta<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for AlphaBeta<G> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        match self.search(s) {
            Ok(result) => result.best_move,
            Err(err) => {
                warn!("alpha-beta search failed: {}", err);
                None
            }
        }
    }
}
