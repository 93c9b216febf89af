//! An implementation of exhaustive minimax search.
//!
//! Explores every node of the game tree down to the terminal states, with no
//! pruning. This is the slowest strategy in the crate, and also the easiest
//! to trust: the alpha-beta engine is verified against it.

use super::super::interface::*;
use super::util::MovePool;
use super::SearchOptions;

use log::{debug, warn};
use std::marker::PhantomData;

/// Search the full game tree under `s` and return its exact value together
/// with a best move.
pub fn minimax<G: Game>(s: &G::S) -> Result<SearchResult<G::M>, SearchError> {
    Minimax::<G>::new().search(s)
}

/// The exhaustive minimax engine.
pub struct Minimax<G: Game> {
    opts: SearchOptions,
    move_pool: MovePool<G::M>,
    nodes_visited: u64,
    _game: PhantomData<G>,
}

impl<G: Game> Minimax<G> {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::new())
    }

    pub fn with_options(opts: SearchOptions) -> Self {
        Minimax {
            opts,
            move_pool: MovePool::default(),
            nodes_visited: 0,
            _game: PhantomData,
        }
    }

    /// Number of states visited by the last call to [`search`](Self::search),
    /// counting the root.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Return a human-readable summary of the last search.
    pub fn stats(&self) -> String {
        format!("Explored {} nodes exhaustively.", self.nodes_visited)
    }

    /// Compute the exact value of `s` and a move achieving it.
    pub fn search(&mut self, s: &G::S) -> Result<SearchResult<G::M>, SearchError> {
        self.nodes_visited = 0;
        let result = self.minimax(s, 0)?;
        debug!("minimax explored {} nodes", self.nodes_visited);
        Ok(result)
    }

    fn minimax(&mut self, s: &G::S, depth: usize) -> Result<SearchResult<G::M>, SearchError> {
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

        // First-generated move wins ties, so only a strictly better child
        // replaces the incumbent.
        let mut best: Option<(Utility, G::M)> = None;
        for &m in moves.iter() {
            let child = self.minimax(&G::apply(s, m), depth + 1)?;
            let improved = match best {
                None => true,
                Some((value, _)) => match player {
                    Player::Maximizer => child.value > value,
                    Player::Minimizer => child.value < value,
                },
            };
            if improved {
                best = Some((child.value, m));
            }
        }
        self.move_pool.free(moves);

        match best {
            Some((value, m)) => Ok(SearchResult { value, best_move: Some(m) }),
            None => Err(SearchError::InvalidState),
        }
    }
}

impl<G: Game> Default for Minimax<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for Minimax<G> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        match self.search(s) {
            Ok(result) => result.best_move,
            Err(err) => {
                warn!("minimax search failed: {}", err);
                None
            }
        }
    }
}
