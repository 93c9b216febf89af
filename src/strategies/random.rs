//! A strategy that randomly chooses a legal move, for use in tests.

use super::super::interface::*;
use super::util::MovePool;

use rand::Rng;

pub struct Random<G: Game> {
    rng: rand::rngs::ThreadRng,
    move_pool: MovePool<G::M>,
}

impl<G: Game> Random<G> {
    pub fn new() -> Self {
        Random { rng: rand::thread_rng(), move_pool: MovePool::default() }
    }
}

impl<G: Game> Default for Random<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for Random<G> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        let mut moves = self.move_pool.alloc();
        G::generate_moves(s, &mut moves);
        let choice = if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.gen_range(0..moves.len())])
        };
        self.move_pool.free(moves);
        choice
    }
}
