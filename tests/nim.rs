#[path = "../demos/nim.rs"]
mod nim;

use gametree::{alpha_beta, minimax, AlphaBeta, Minimax, SearchResult};
use nim::{Nim, Pile};

// Nim is solved: the player to move wins exactly when the pile size is not
// a multiple of four, and the winning move takes `sticks % 4`. That gives
// the engines an oracle the test suite doesn't have to compute.
#[test]
fn test_nim_closed_form_values() {
    for sticks in 1..=13 {
        let pile = Pile::new(sticks);
        let expected = if sticks % 4 == 0 {
            // Lost position; every move is equally bad, so the first
            // generated move (take one stick) is chosen.
            SearchResult { value: -1, best_move: Some(1) }
        } else {
            SearchResult { value: 1, best_move: Some(sticks % 4) }
        };
        assert_eq!(minimax::<Nim>(&pile), Ok(expected), "pile of {}", sticks);
        assert_eq!(alpha_beta::<Nim>(&pile), Ok(expected), "pile of {}", sticks);
    }
}

// An empty pile is already terminal: the mover's opponent took the last
// stick, and no move is returned.
#[test]
fn test_nim_empty_pile_is_terminal() {
    let pile = Pile::new(0);
    assert_eq!(minimax::<Nim>(&pile), Ok(SearchResult { value: -1, best_move: None }));
    assert_eq!(alpha_beta::<Nim>(&pile), Ok(SearchResult { value: -1, best_move: None }));
}

#[test]
fn test_nim_pruning_saves_work() {
    let pile = Pile::new(12);
    let mut mm = Minimax::<Nim>::new();
    mm.search(&pile).unwrap();
    let mut ab = AlphaBeta::<Nim>::new();
    ab.search(&pile).unwrap();
    assert!(ab.nodes_visited() < mm.nodes_visited());
}
