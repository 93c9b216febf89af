//! A definition of single-pile Nim using the library, for use in tests and
//! demos.
//!
//! Players alternately take one, two, or three sticks from a pile; whoever
//! takes the last stick wins. The game is solved in closed form (the player
//! to move wins exactly when the pile size is not a multiple of four), which
//! makes it a handy independent check on the engines.
#![allow(dead_code)]

use gametree::{Game, Player, Utility};

use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    pub sticks: u32,
    pub to_move: Player,
}

impl Pile {
    pub fn new(sticks: u32) -> Self {
        // The Maximizer always opens.
        Pile { sticks, to_move: Player::Maximizer }
    }
}

impl Display for Pile {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} sticks, {:?} to move", self.sticks, self.to_move)
    }
}

/// How many sticks to take.
pub type Take = u32;

pub struct Nim;

impl Game for Nim {
    type S = Pile;
    type M = Take;

    fn player_to_move(s: &Pile) -> Player {
        s.to_move
    }

    fn generate_moves(s: &Pile, moves: &mut Vec<Take>) {
        for take in 1..=s.sticks.min(3) {
            moves.push(take);
        }
    }

    fn get_utility(s: &Pile) -> Option<Utility> {
        if s.sticks > 0 {
            return None;
        }
        // The opponent of the player now to move took the last stick.
        Some(match s.to_move {
            Player::Maximizer => -1,
            Player::Minimizer => 1,
        })
    }

    fn apply(s: &Pile, m: Take) -> Pile {
        Pile { sticks: s.sticks - m, to_move: s.to_move.opponent() }
    }
}

fn main() {
    use gametree::alpha_beta;

    env_logger::init();

    let mut pile = Pile::new(21);
    while Nim::get_utility(&pile).is_none() {
        println!("{}", pile);
        let result = alpha_beta::<Nim>(&pile).expect("nim never violates the game contract");
        println!("{:?} takes {} (value {})", pile.to_move, result.best_move.unwrap(), result.value);
        pile = Nim::apply(&pile, result.best_move.unwrap());
    }
    println!("{}", pile);
    println!("final utility: {}", Nim::get_utility(&pile).unwrap());
}
